use serde::{Deserialize, Serialize};

use super::{CropTarget, Label, Rect};
use crate::error::SplitterError;

/// Layout of the piece grid on the sprite sheet.
///
/// Rows are labelled by `colors`, columns by `piece_names`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Width of one cell in pixels
    pub cell_width: u32,
    /// Height of one cell in pixels
    pub cell_height: u32,
    /// Horizontal gap between cells
    pub gap_x: u32,
    /// Vertical gap between cells
    pub gap_y: u32,
    pub columns: u32,
    pub rows: u32,
    /// Left edge of the first cell
    pub origin_x: u32,
    /// Top edge of the first cell
    pub origin_y: u32,
    /// Color label for each row
    pub colors: Vec<String>,
    /// Piece label for each column
    pub piece_names: Vec<String>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            cell_width: 150,
            cell_height: 196,
            gap_x: 1,
            gap_y: 5,
            columns: 6,
            rows: 2,
            origin_x: 1,
            origin_y: 1210,
            colors: ["black", "white"].map(String::from).to_vec(),
            piece_names: ["bishop", "king", "knight", "pawn", "queen", "rook"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl GridSpec {
    /// Rect of the cell at (row, col).
    pub fn cell_rect(&self, row: u32, col: u32) -> Option<Rect> {
        let left = self
            .cell_width
            .checked_add(self.gap_x)?
            .checked_mul(col)?
            .checked_add(self.origin_x)?;
        let upper = self
            .cell_height
            .checked_add(self.gap_y)?
            .checked_mul(row)?
            .checked_add(self.origin_y)?;
        Rect::from_origin(left, upper, self.cell_width, self.cell_height)
    }

    fn check_labels(&self) -> Result<(), SplitterError> {
        if self.colors.len() != self.rows as usize {
            return Err(SplitterError::LabelMismatch {
                axis: "rows",
                expected: self.rows,
                actual: self.colors.len(),
            });
        }
        if self.piece_names.len() != self.columns as usize {
            return Err(SplitterError::LabelMismatch {
                axis: "columns",
                expected: self.columns,
                actual: self.piece_names.len(),
            });
        }
        Ok(())
    }
}

/// Compute every cell rect of the grid with its label, in row-major order.
pub fn compute_rectangles(spec: &GridSpec) -> Result<Vec<(Rect, Label)>, SplitterError> {
    spec.check_labels()?;

    let mut cells = Vec::with_capacity(spec.colors.len() * spec.piece_names.len());
    for (row, color) in (0..spec.rows).zip(&spec.colors) {
        for (col, piece) in (0..spec.columns).zip(&spec.piece_names) {
            let rect = spec
                .cell_rect(row, col)
                .ok_or(SplitterError::GeometryOverflow)?;
            cells.push((rect, Label::new(color.as_str(), piece.as_str())));
        }
    }

    Ok(cells)
}

/// Compute the crop targets for every piece image.
pub fn piece_targets(spec: &GridSpec) -> Result<Vec<CropTarget>, SplitterError> {
    Ok(compute_rectangles(spec)?
        .into_iter()
        .map(|(rect, label)| CropTarget::new(rect, label.file_name()))
        .collect())
}
