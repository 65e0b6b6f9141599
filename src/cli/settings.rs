use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{CliArgs, CompressionLevel};
use crate::config::{CompressConfig, LoadedConfig, SplitterConfig};
use crate::geometry::{BoardSpec, GridSpec};
use crate::output::OutputOptions;

/// Merged configuration from CLI args and optional config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub sheet: PathBuf,
    pub output: OutputOptions,
    pub board: BoardSpec,
    pub pieces: GridSpec,
    pub verbose: bool,
}

impl Settings {
    /// Merge config file values with CLI arguments.
    /// CLI arguments always take precedence over config values.
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let loaded_config = if let Some(config_path) = &args.config {
            Some(
                LoadedConfig::load(config_path)
                    .with_context(|| format!("failed to load config: {}", config_path.display()))?,
            )
        } else {
            None
        };

        let defaults = SplitterConfig::default();

        // Sheet: CLI > config > default
        let sheet = args.sheet.clone().unwrap_or_else(|| {
            loaded_config
                .as_ref()
                .map(|lc| lc.resolve_sheet())
                .unwrap_or_else(|| PathBuf::from(&defaults.sheet))
        });

        // Output directory: CLI > config > default
        let output_dir = args.output.clone().unwrap_or_else(|| {
            loaded_config
                .as_ref()
                .map(|lc| lc.resolve_output_dir())
                .unwrap_or_else(|| PathBuf::from(&defaults.output_dir))
        });

        // Compress: CLI option overrides config
        let compress = if args.compress.is_some() {
            args.compress
        } else if let Some(ref lc) = loaded_config {
            lc.config
                .compress
                .as_ref()
                .map(parse_compress)
                .transpose()?
        } else {
            None
        };

        // Geometry is config-only
        let (board, pieces) = match loaded_config {
            Some(lc) => (lc.config.board, lc.config.pieces),
            None => (defaults.board, defaults.pieces),
        };

        Ok(Self {
            sheet,
            output: OutputOptions {
                output_dir,
                compress,
            },
            board,
            pieces,
            verbose: args.verbose,
        })
    }
}

fn parse_compress(config: &CompressConfig) -> Result<CompressionLevel> {
    match config {
        CompressConfig::Level(n) => {
            CompressionLevel::from_level(*n).map_err(|e| anyhow::anyhow!("{} in config file", e))
        }
        CompressConfig::Max(s) if s.eq_ignore_ascii_case("max") => Ok(CompressionLevel::Max),
        CompressConfig::Max(s) => Err(anyhow::anyhow!(
            "unknown compress '{}' in config file. Valid values: 0-6, max",
            s
        )),
    }
}
