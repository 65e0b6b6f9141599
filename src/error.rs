use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::Rect;

#[derive(Error, Debug)]
pub enum SplitterError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Sprite sheet does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error(
        "Crop '{name}' {rect} falls outside the sprite sheet ({sheet_width}x{sheet_height})"
    )]
    CropOutOfBounds {
        name: String,
        rect: Rect,
        sheet_width: u32,
        sheet_height: u32,
    },

    #[error("Grid has {expected} {axis} but {actual} labels were given")]
    LabelMismatch {
        axis: &'static str,
        expected: u32,
        actual: usize,
    },

    #[error("Crop geometry overflows the pixel coordinate range")]
    GeometryOverflow,
}
