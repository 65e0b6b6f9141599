mod args;
mod logging;
mod settings;

pub use args::{CliArgs, CompressionLevel};
pub use logging::init_logging;
pub use settings::Settings;
