pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod output;
pub mod sheet;

pub use error::SplitterError;
pub use extract::{extract_board, extract_pieces};
pub use geometry::{BoardSpec, CropTarget, GridSpec, Label, Rect, compute_rectangles};
