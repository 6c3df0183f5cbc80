use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::core::{Grid, GridSize, Rgb};
use crate::shared::constants;

/// Where the square canvas sits on screen and how terminal cells map onto
/// grid cells.
///
/// One canvas row is one terminal row and two terminal columns, which keeps
/// squares roughly square in a typical 1:2 font.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CanvasGeometry {
    pub area: Rect,
    pub size: GridSize,
}

impl CanvasGeometry {
    /// Largest square canvas that fits in `available`, centered.
    pub fn fit(available: Rect, size: GridSize) -> Self {
        let rows = available.height.min(available.width / 2);
        let cols = rows * 2;
        let x = available.x + (available.width - cols) / 2;
        let y = available.y + (available.height - rows) / 2;
        Self {
            area: Rect::new(x, y, cols, rows),
            size,
        }
    }

    /// Grid `(row, col)` under the terminal position, if it is on the canvas.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return None;
        }
        if column < a.x || row < a.y || column >= a.right() || row >= a.bottom() {
            return None;
        }
        let n = self.size.get();
        let grid_row = (row - a.y) as usize * n / a.height as usize;
        let grid_col = (column - a.x) as usize * n / a.width as usize;
        Some((grid_row, grid_col))
    }
}

pub fn to_color(rgb: Option<Rgb>) -> Color {
    match rgb {
        Some(rgb) => {
            let (r, g, b) = rgb.to_tuple();
            Color::Rgb(r, g, b)
        }
        None => constants::CANVAS_BACKGROUND,
    }
}

/// Paints each cell's displayed colour as terminal background
pub struct GridWidget<'a> {
    grid: &'a Grid,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let geometry = CanvasGeometry::fit(area, self.grid.size());
        let canvas = geometry.area;

        for y in canvas.top()..canvas.bottom() {
            for x in canvas.left()..canvas.right() {
                let Some((row, col)) = geometry.cell_at(x, y) else {
                    continue;
                };
                let color = to_color(self.grid.cell(row, col).and_then(|c| c.display));
                buf.get_mut(x, y).set_symbol(" ").set_bg(color);
            }
        }
    }
}
