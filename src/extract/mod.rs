mod board;
mod pieces;

pub use board::extract_board;
pub use pieces::extract_pieces;
