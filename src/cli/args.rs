use clap::Parser;
use std::path::PathBuf;

/// Flags shared by `split-board` and `split-pieces`.
///
/// Every flag is optional; with none given the tools read
/// `chess-splitter/sprites.png` and write into the current directory.
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about = "Crop chess images out of a sprite sheet", long_about = None)]
pub struct CliArgs {
    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sprite sheet to split [default: chess-splitter/sprites.png]
    #[arg(short, long, value_name = "FILE")]
    pub sheet: Option<PathBuf>,

    /// Output directory for extracted images [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(CompressionLevel::from_level)
        }
    }
}

impl CompressionLevel {
    /// Validate a numeric level
    pub fn from_level(n: u8) -> Result<Self, String> {
        if n <= 6 {
            Ok(CompressionLevel::Level(n))
        } else {
            Err(format!("compression level must be 0-6 or 'max', got {}", n))
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
