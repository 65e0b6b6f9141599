use image::RgbaImage;

use crate::error::SplitterError;
use crate::geometry::CropTarget;

/// Ensure every target lies inside the sheet.
///
/// Called before anything is written so an undersized sheet produces no
/// output at all.
pub fn check_bounds(sheet: &RgbaImage, targets: &[CropTarget]) -> Result<(), SplitterError> {
    let (width, height) = sheet.dimensions();
    match targets.iter().find(|t| !t.rect.fits_within(width, height)) {
        Some(target) => Err(SplitterError::CropOutOfBounds {
            name: target.file_name.clone(),
            rect: target.rect,
            sheet_width: width,
            sheet_height: height,
        }),
        None => Ok(()),
    }
}

/// Copy the target's pixels out of the sheet into a new image
pub fn crop(sheet: &RgbaImage, target: &CropTarget) -> Result<RgbaImage, SplitterError> {
    check_bounds(sheet, std::slice::from_ref(target))?;

    let rect = &target.rect;
    Ok(
        image::imageops::crop_imm(sheet, rect.left, rect.upper, rect.width(), rect.height())
            .to_image(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn test_crop_copies_region() {
        let sheet = gradient(20, 20);
        let target = CropTarget::new(Rect::new(3, 4, 8, 10), "piece.png");

        let cropped = crop(&sheet, &target).unwrap();

        assert_eq!(cropped.dimensions(), (5, 6));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([3, 4, 0, 255]));
        assert_eq!(cropped.get_pixel(4, 5), &Rgba([7, 9, 0, 255]));
    }

    #[test]
    fn test_crop_touching_edges() {
        let sheet = gradient(10, 10);
        let target = CropTarget::new(Rect::new(0, 0, 10, 10), "all.png");

        let cropped = crop(&sheet, &target).unwrap();
        assert_eq!(cropped, sheet);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let sheet = gradient(10, 10);
        let target = CropTarget::new(Rect::new(5, 5, 11, 10), "wide.png");

        let err = crop(&sheet, &target).unwrap_err();
        match err {
            SplitterError::CropOutOfBounds {
                name,
                sheet_width,
                sheet_height,
                ..
            } => {
                assert_eq!(name, "wide.png");
                assert_eq!((sheet_width, sheet_height), (10, 10));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_check_bounds_reports_first_offender() {
        let sheet = gradient(10, 10);
        let targets = vec![
            CropTarget::new(Rect::new(0, 0, 5, 5), "a.png"),
            CropTarget::new(Rect::new(0, 8, 5, 12), "b.png"),
            CropTarget::new(Rect::new(8, 0, 12, 5), "c.png"),
        ];

        let err = check_bounds(&sheet, &targets).unwrap_err();
        assert!(matches!(err, SplitterError::CropOutOfBounds { name, .. } if name == "b.png"));
    }
}
