use std::path::PathBuf;

use anyhow::Result;
use image::RgbaImage;
use log::{debug, info};

use crate::geometry::{GridSpec, piece_targets};
use crate::output::{OutputOptions, save_png};
use crate::sheet::{check_bounds, crop};

/// Crop every grid cell out of the sheet and write one image per cell.
///
/// All cells are bounds-checked before the first write. A failure while
/// writing leaves the images already saved in place.
pub fn extract_pieces(
    sheet: &RgbaImage,
    spec: &GridSpec,
    options: &OutputOptions,
) -> Result<Vec<PathBuf>> {
    let targets = piece_targets(spec)?;
    check_bounds(sheet, &targets)?;

    let mut written = Vec::with_capacity(targets.len());
    for target in &targets {
        debug!("{} rect {}", target.file_name, target.rect);

        let piece = crop(sheet, target)?;
        let path = options.output_dir.join(&target.file_name);
        save_png(&piece, &path, options.compress)?;
        info!("Saved {}", target.file_name);

        written.push(path);
    }

    Ok(written)
}
