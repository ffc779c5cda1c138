use super::error::GridError;
use super::grid::Grid;

pub const SPRITE_SIZE: usize = 8;
pub const TEMPLATE_SIZE: usize = 16;

/// 8x8 snake, web green body (0x008000) with dark green (0x003300) shading
#[rustfmt::skip]
pub const SNAKE_SPRITE: [[u32; SPRITE_SIZE]; SPRITE_SIZE] = [
    [0x000000, 0x008000, 0x000000, 0x008000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x008000, 0x000000, 0x008000, 0x000000, 0x008000, 0x000000, 0x000000, 0x000000],
    [0x008000, 0x008000, 0x008000, 0x008000, 0x008000, 0x000000, 0x000000, 0x008000],
    [0x000000, 0xffffff, 0x000000, 0xffffff, 0x000000, 0x000000, 0x008000, 0x003300],
    [0x000000, 0x003300, 0x008000, 0x000000, 0x000000, 0x000000, 0x008000, 0x000000],
    [0x000000, 0x003300, 0x008000, 0x008000, 0x008000, 0x008000, 0x003300, 0x000000],
    [0x000000, 0x003300, 0x003300, 0x003300, 0x003300, 0x003300, 0x000000, 0x000000],
    [0x000000, 0x008000, 0x000000, 0x008000, 0x000000, 0x000000, 0x000000, 0x000000],
];

/// The snake padded with black to the full matrix size
#[rustfmt::skip]
pub const OVERLAY_TEMPLATE: [[u32; TEMPLATE_SIZE]; TEMPLATE_SIZE] = [
    [0x000000, 0x008000, 0x000000, 0x008000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x008000, 0x000000, 0x008000, 0x000000, 0x008000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x008000, 0x008000, 0x008000, 0x008000, 0x008000, 0x000000, 0x000000, 0x008000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0xffffff, 0x000000, 0xffffff, 0x000000, 0x000000, 0x008000, 0x003300, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x003300, 0x008000, 0x000000, 0x000000, 0x000000, 0x008000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x003300, 0x008000, 0x008000, 0x008000, 0x008000, 0x003300, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x003300, 0x003300, 0x003300, 0x003300, 0x003300, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x008000, 0x000000, 0x008000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
    [0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000, 0x000000],
];

pub fn snake() -> Result<Grid, GridError> {
    Grid::from_rows(&SNAKE_SPRITE)
}

pub fn overlay_template() -> Result<Grid, GridError> {
    Grid::from_rows(&OVERLAY_TEMPLATE)
}
