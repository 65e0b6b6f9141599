mod board;
mod grid;
mod rect;
mod target;

pub use board::{BoardSpec, board_target};
pub use grid::{GridSpec, compute_rectangles, piece_targets};
pub use rect::Rect;
pub use target::{CropTarget, Label};
