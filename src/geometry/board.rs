use serde::{Deserialize, Serialize};

use super::{CropTarget, Rect};
use crate::error::SplitterError;

/// Location of the chess board on the sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSpec {
    /// Left edge of the board in pixels
    pub start_x: u32,
    /// Top edge of the board in pixels
    pub start_y: u32,
    /// Board width in pixels
    pub width: u32,
    /// Board height in pixels
    pub height: u32,
    /// Name of the written image
    pub file_name: String,
}

impl Default for BoardSpec {
    fn default() -> Self {
        Self {
            start_x: 1,
            start_y: 5,
            width: 1200,
            height: 1201,
            file_name: "chess_board.png".to_string(),
        }
    }
}

/// Compute the board crop.
pub fn board_target(spec: &BoardSpec) -> Result<CropTarget, SplitterError> {
    let rect = Rect::from_origin(spec.start_x, spec.start_y, spec.width, spec.height)
        .ok_or(SplitterError::GeometryOverflow)?;
    Ok(CropTarget::new(rect, spec.file_name.clone()))
}
