use std::fmt;

use serde::Serialize;

/// A crop rectangle in sheet pixel space.
///
/// Edges follow the (left, upper, right, lower) convention: `right` and
/// `lower` are exclusive, so a rect from 1 to 151 is 150 pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub left: u32,
    pub upper: u32,
    pub right: u32,
    pub lower: u32,
}

impl Rect {
    pub fn new(left: u32, upper: u32, right: u32, lower: u32) -> Self {
        Self {
            left,
            upper,
            right,
            lower,
        }
    }

    /// Build a rect from its top-left corner and size.
    ///
    /// Returns `None` if the far edges do not fit in `u32`.
    pub fn from_origin(x: u32, y: u32, width: u32, height: u32) -> Option<Self> {
        Some(Self::new(x, y, x.checked_add(width)?, y.checked_add(height)?))
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.lower.saturating_sub(self.upper)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Check if this rectangle shares at least one pixel with another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.upper < other.lower
            && self.lower > other.upper
    }

    /// Check if this rectangle fully contains another
    pub fn contains(&self, other: &Rect) -> bool {
        self.left <= other.left
            && self.upper <= other.upper
            && self.right >= other.right
            && self.lower >= other.lower
    }

    /// Check if this rectangle lies inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        Rect::new(0, 0, width, height).contains(self)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.upper, self.right, self.lower
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let r = Rect::new(1, 5, 1201, 1206);
        assert_eq!(r.width(), 1200);
        assert_eq!(r.height(), 1201);
        assert_eq!(r.area(), 1200 * 1201);
    }

    #[test]
    fn test_from_origin() {
        assert_eq!(
            Rect::from_origin(1, 5, 1200, 1201),
            Some(Rect::new(1, 5, 1201, 1206))
        );
        assert_eq!(Rect::from_origin(u32::MAX, 0, 1, 1), None);
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 15, 15);
        let c = Rect::new(20, 20, 30, 30);
        // Shares only an edge, no pixels
        let d = Rect::new(10, 0, 20, 10);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_contains() {
        let outer = Rect::new(0, 0, 20, 20);
        let inner = Rect::new(5, 5, 10, 10);
        let partial = Rect::new(15, 15, 25, 25);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&partial));
    }

    #[test]
    fn test_fits_within() {
        let r = Rect::new(1, 5, 1201, 1206);
        assert!(r.fits_within(1201, 1206));
        assert!(!r.fits_within(1200, 1206));
        assert!(!r.fits_within(1201, 1205));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
    }
}
