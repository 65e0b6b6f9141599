use std::path::Path;

use anyhow::Result;
use image::{ImageReader, RgbaImage};
use log::debug;

use crate::error::SplitterError;

/// Decode the sprite sheet into an RGBA buffer.
///
/// Fails with [`SplitterError::InputNotFound`] when the file is missing and
/// [`SplitterError::ImageLoad`] when it cannot be decoded.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(SplitterError::InputNotFound(path.to_path_buf()).into());
    }

    let sheet = ImageReader::open(path)
        .map_err(|e| SplitterError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| SplitterError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SplitterError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    debug!(
        "Loaded {} ({}x{})",
        path.display(),
        sheet.width(),
        sheet.height()
    );

    Ok(sheet)
}
