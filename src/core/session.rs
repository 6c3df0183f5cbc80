use rand::Rng;

use super::colorer::CellColorer;
use super::grid::Grid;
use super::mode::Mode;
use super::size::GridSize;
use crate::utils::logger;

/// Mutable per-session configuration
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Settings {
    pub mode: Mode,
    pub size: GridSize,
}

/// Something the user did, already translated out of terminal events
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    Hover { row: usize, col: usize },
    SetMode(Mode),
    Clear,
    Resize(GridSize),
}

/// Grid, colorer and settings for one running sketch.
///
/// Actions are applied one at a time, in the order they are dispatched.
pub struct Session<R> {
    settings: Settings,
    grid: Grid,
    colorer: CellColorer<R>,
}

impl<R: Rng> Session<R> {
    pub fn new(settings: Settings, rng: R) -> Self {
        Self {
            grid: Grid::new(settings.size),
            settings,
            colorer: CellColorer::new(rng),
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn mode(&self) -> Mode {
        self.settings.mode
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns whether any cell changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Hover { row, col } => self.hover(row, col),
            Action::SetMode(mode) => {
                if mode != self.settings.mode {
                    logger::debug(&format!(
                        "Mode {} -> {}",
                        self.settings.mode.label(),
                        mode.label()
                    ));
                }
                self.settings.mode = mode;
                false
            }
            Action::Clear => {
                logger::debug(&format!("Clearing {} cells", self.grid.len()));
                self.grid.clear();
                true
            }
            Action::Resize(size) => {
                logger::debug(&format!("Resizing grid {} -> {}", self.settings.size, size));
                self.settings.size = size;
                self.grid.resize(size);
                true
            }
        }
    }

    fn hover(&mut self, row: usize, col: usize) -> bool {
        let mode = self.settings.mode;
        let Some(cell) = self.grid.cell_mut(row, col) else {
            return false;
        };
        let next = self.colorer.apply(cell, mode);
        let changed = next != *cell;
        *cell = next;
        changed
    }
}
