use std::path::Path;

use image::{Rgba, RgbaImage};

/// Smallest sheet that holds both the default board and piece grid.
pub const SHEET_WIDTH: u32 = 1210;
pub const SHEET_HEIGHT: u32 = 1620;

/// Pixel value that encodes its own sheet coordinates.
pub fn coord_pixel(x: u32, y: u32) -> Rgba<u8> {
    Rgba([
        (x % 256) as u8,
        (y % 256) as u8,
        ((x / 256) | ((y / 256) << 4)) as u8,
        255,
    ])
}

/// Generates a sheet where every pixel records where it came from.
pub fn coordinate_sheet(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, coord_pixel)
}

/// Writes a coordinate sheet to `path` as PNG.
pub fn write_sheet(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    coordinate_sheet(width, height).save(path).unwrap();
}
