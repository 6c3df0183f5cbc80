use serde::Serialize;

use super::cell::{Cell, CellId};
use super::size::GridSize;

/// Square, row-major collection of `size * size` cells
#[derive(Debug, Serialize)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
    #[serde(skip)]
    next_id: u64,
}

impl Grid {
    pub fn new(size: GridSize) -> Self {
        let mut grid = Self {
            size,
            cells: Vec::new(),
            next_id: 0,
        };
        grid.populate(size);
        grid
    }

    /// Throws every cell away and builds a fresh, untouched set.
    pub fn resize(&mut self, size: GridSize) {
        self.populate(size);
    }

    /// Resets the colour state of every cell in place.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    fn populate(&mut self, size: GridSize) {
        let first = self.next_id;
        let count = size.cell_count() as u64;
        self.next_id += count;
        self.size = size;
        self.cells = (first..first + count).map(|id| Cell::new(CellId(id))).collect();
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.size.get();
        (row < n && col < n).then(|| row * n + col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index_of(row, col).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.index_of(row, col).map(move |i| &mut self.cells[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Rgb;
    use std::collections::HashSet;

    fn size(n: u16) -> GridSize {
        GridSize::new(n).unwrap()
    }

    #[test]
    fn test_new_grid_has_size_squared_untouched_cells() {
        for n in 1..=100 {
            let grid = Grid::new(size(n));
            assert_eq!(grid.len(), n as usize * n as usize);
            assert!(grid
                .cells()
                .iter()
                .all(|c| c.darken_level == 0 && c.original.is_none() && c.display.is_none()));
        }
    }

    #[test]
    fn test_row_major_indexing() {
        let grid = Grid::new(size(4));
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(1, 2), Some(6));
        assert_eq!(grid.index_of(3, 3), Some(15));
        assert_eq!(grid.index_of(4, 0), None);
        assert_eq!(grid.index_of(0, 4), None);
    }

    #[test]
    fn test_clear_resets_state_and_keeps_cells() {
        let mut grid = Grid::new(size(3));
        let ids: Vec<CellId> = grid.cells().iter().map(|c| c.id).collect();

        let cell = grid.cell_mut(1, 1).unwrap();
        cell.original = Some(Rgb::new(9, 9, 9));
        cell.display = Some(Rgb::new(0, 0, 0));
        cell.darken_level = 7;

        grid.clear();

        assert_eq!(grid.len(), 9);
        assert!(grid.cells().iter().all(Cell::is_untouched));
        let after: Vec<CellId> = grid.cells().iter().map(|c| c.id).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn test_resize_discards_every_previous_cell() {
        let mut grid = Grid::new(size(5));
        grid.cell_mut(0, 0).unwrap().darken_level = 3;
        let before: HashSet<CellId> = grid.cells().iter().map(|c| c.id).collect();

        grid.resize(size(5));

        assert_eq!(grid.len(), 25);
        assert!(grid.cells().iter().all(Cell::is_untouched));
        assert!(grid.cells().iter().all(|c| !before.contains(&c.id)));
    }

    #[test]
    fn test_resize_changes_cell_count() {
        let mut grid = Grid::new(size(16));
        grid.resize(size(2));
        assert_eq!(grid.size(), size(2));
        assert_eq!(grid.len(), 4);
        grid.resize(size(100));
        assert_eq!(grid.len(), 10_000);
    }
}
