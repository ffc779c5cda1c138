use crate::shared::constants;

/// Represents a single character cell of the terminal preview
///
/// Two stacked pixels share one cell: `fg` is the upper pixel, `bg` the lower.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CellData {
    pub char: char,
    pub fg: (u8, u8, u8), // RGB
    pub bg: (u8, u8, u8), // RGB
}

impl Default for CellData {
    fn default() -> Self {
        Self {
            char: constants::HALF_BLOCK,
            fg: (0, 0, 0),
            bg: (0, 0, 0),
        }
    }
}
