use std::path::PathBuf;

use anyhow::Result;
use image::RgbaImage;
use log::{debug, info};

use crate::geometry::{BoardSpec, board_target};
use crate::output::{OutputOptions, save_png};
use crate::sheet::crop;

/// Crop the board out of the sheet and write it.
///
/// Returns the path of the written image.
pub fn extract_board(
    sheet: &RgbaImage,
    spec: &BoardSpec,
    options: &OutputOptions,
) -> Result<PathBuf> {
    let target = board_target(spec)?;
    debug!("Board rect {}", target.rect);

    let board = crop(sheet, &target)?;
    let path = options.output_dir.join(&target.file_name);
    save_png(&board, &path, options.compress)?;
    info!("Saved {}", target.file_name);

    Ok(path)
}
