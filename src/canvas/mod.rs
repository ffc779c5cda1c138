pub mod color;
pub mod error;
pub mod grid;
pub mod overlay;
pub mod sprites;

pub use color::{Color, NamedColor};
pub use grid::Grid;
pub use overlay::overlay;
