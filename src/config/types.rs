use serde::{Deserialize, Serialize};

use crate::geometry::{BoardSpec, GridSpec};

/// PNG compression level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Splitter configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Sprite sheet to split
    pub sheet: String,
    /// Directory the extracted images are written to
    pub output_dir: String,
    /// Board location on the sheet
    pub board: BoardSpec,
    /// Piece grid layout on the sheet
    pub pieces: GridSpec,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            sheet: "chess-splitter/sprites.png".to_string(),
            output_dir: ".".to_string(),
            board: BoardSpec::default(),
            pieces: GridSpec::default(),
            compress: None,
        }
    }
}
