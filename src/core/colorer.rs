use rand::Rng;

use super::cell::{Cell, MAX_DARKEN_LEVEL};
use super::color::{Rgb, DEFAULT_INK, WHITE};
use super::mode::Mode;

/// Colour shown after `level` darken steps have already been applied to `base`.
///
/// The step removes `0.1 * (10 - level)` of the base, so level 0 yields
/// black and each later step keeps a further tenth of the base.
pub fn darken_step(base: Rgb, level: u8) -> Rgb {
    let remaining = MAX_DARKEN_LEVEL.saturating_sub(level);
    let fraction = 0.1 * remaining as f64;
    base.scaled(1.0 - fraction)
}

/// Next state of `cell` after the pointer enters it under `mode`.
pub fn apply_hover<R: Rng + ?Sized>(cell: &Cell, mode: Mode, rng: &mut R) -> Cell {
    let mut next = *cell;
    match mode {
        Mode::Default => {
            next.original = Some(DEFAULT_INK);
            next.display = Some(DEFAULT_INK);
            next.darken_level = 0;
        }
        Mode::Random => {
            let color = Rgb::random(rng);
            next.original = Some(color);
            next.display = Some(color);
            next.darken_level = 0;
        }
        Mode::Darken => {
            if cell.is_fully_darkened() {
                return next;
            }
            let base = *next.original.get_or_insert(WHITE);
            next.display = Some(darken_step(base, next.darken_level));
            next.darken_level += 1;
        }
    }
    next
}

/// Owns the random source used by Random mode
pub struct CellColorer<R> {
    rng: R,
}

impl<R: Rng> CellColorer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn apply(&mut self, cell: &Cell, mode: Mode) -> Cell {
        apply_hover(cell, mode, &mut self.rng)
    }
}
