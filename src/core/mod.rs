pub mod cell;
pub mod color;
pub mod colorer;
pub mod grid;
pub mod mode;
pub mod session;
pub mod size;

pub use cell::{Cell, CellId};
pub use color::Rgb;
pub use grid::Grid;
pub use mode::Mode;
pub use session::{Action, Session, Settings};
pub use size::{parse_grid_size, GridSize, SizeError, SizeRequest};
