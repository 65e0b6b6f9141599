use std::fmt;

use super::Rect;

/// Color and piece-type pair naming one cell of the piece grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    pub color: String,
    pub piece: String,
}

impl Label {
    pub fn new(color: impl Into<String>, piece: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            piece: piece.into(),
        }
    }

    /// Output file stem, e.g. `black_bishop`
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.color, self.piece)
    }

    /// Output file name, e.g. `black_bishop.png`
    pub fn file_name(&self) -> String {
        format!("{}.png", self.file_stem())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.piece)
    }
}

/// One crop to perform: where to cut and what to call the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropTarget {
    pub rect: Rect,
    pub file_name: String,
}

impl CropTarget {
    pub fn new(rect: Rect, file_name: impl Into<String>) -> Self {
        Self {
            rect,
            file_name: file_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_file_name() {
        let label = Label::new("white", "rook");
        assert_eq!(label.file_stem(), "white_rook");
        assert_eq!(label.file_name(), "white_rook.png");
        assert_eq!(label.to_string(), "white rook");
    }
}
