mod cropper;
mod loader;

pub use cropper::{check_bounds, crop};
pub use loader::load_sheet;
