pub mod cell;
pub mod display;
pub mod formatter;
pub mod processor;

pub use display::render_preview;
pub use formatter::{format_grid, FormatStyle};
