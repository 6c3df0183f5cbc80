pub mod canvas;
pub mod toolbar;

pub use canvas::{CanvasGeometry, GridWidget};
pub use toolbar::{Button, Toolbar};
