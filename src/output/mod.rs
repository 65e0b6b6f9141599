mod png;

pub use png::save_png;

use std::path::PathBuf;

use crate::cli::CompressionLevel;

/// Where and how extracted images are written
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub output_dir: PathBuf,
    pub compress: Option<CompressionLevel>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            compress: None,
        }
    }
}
