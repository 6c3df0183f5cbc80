use serde::Serialize;

use super::color::Rgb;

/// Number of darken steps after which a cell stops reacting to Darken mode
pub const MAX_DARKEN_LEVEL: u8 = 10;

/// Identity of a cell, issued by the grid that owns it.
///
/// Ids survive a clear but are never handed out twice, so a cell created
/// before a resize can't be confused with one created after it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
pub struct CellId(pub u64);

/// Colour state of one grid square
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Cell {
    pub id: CellId,
    /// Base colour recorded by Default/Random hovers or by the first darken step
    pub original: Option<Rgb>,
    /// Darken steps already applied, 0..=MAX_DARKEN_LEVEL
    pub darken_level: u8,
    /// Colour currently shown; `None` means no fill
    pub display: Option<Rgb>,
}

impl Cell {
    pub fn new(id: CellId) -> Self {
        Self {
            id,
            original: None,
            darken_level: 0,
            display: None,
        }
    }

    pub fn is_untouched(&self) -> bool {
        self.original.is_none() && self.darken_level == 0 && self.display.is_none()
    }

    pub fn is_fully_darkened(&self) -> bool {
        self.darken_level >= MAX_DARKEN_LEVEL
    }

    /// Back to the freshly created state, keeping the id.
    pub fn reset(&mut self) {
        self.original = None;
        self.darken_level = 0;
        self.display = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_identity() {
        let mut cell = Cell::new(CellId(42));
        cell.original = Some(Rgb::new(1, 2, 3));
        cell.display = Some(Rgb::new(0, 0, 0));
        cell.darken_level = 4;

        cell.reset();

        assert_eq!(cell.id, CellId(42));
        assert!(cell.is_untouched());
    }
}
