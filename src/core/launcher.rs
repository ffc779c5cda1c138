use anyhow::{Context, Result};
use clap::Args;

use crate::canvas::{overlay, sprites, Color, Grid, NamedColor};
use crate::renderer::{format_grid, FormatStyle};
use crate::shared::constants;
use crate::utils::config::FileConfig;

/// Canvas options shared by every command that draws the sprite
#[derive(Args, Debug, Clone, Default)]
pub struct CanvasArgs {
    /// Canvas side length (sets both rows and columns)
    #[arg(short, long)]
    pub size: Option<usize>,
    #[arg(long)]
    pub rows: Option<usize>,
    #[arg(long)]
    pub cols: Option<usize>,
    /// Background color: a name (Black, White, Red, Green, Blue) or hex like 0x003300
    #[arg(short, long)]
    pub fill: Option<Color>,
    /// Overlay the 16x16 template instead of the 8x8 snake
    #[arg(short, long, default_value_t = false)]
    pub template: bool,
}

/// Fully resolved canvas request
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasRequest {
    pub rows: usize,
    pub cols: usize,
    pub fill: Color,
    pub template: bool,
}

impl Default for CanvasRequest {
    fn default() -> Self {
        Self {
            rows: constants::MATRIX_SIZE,
            cols: constants::MATRIX_SIZE,
            fill: NamedColor::Black.color(),
            template: false,
        }
    }
}

impl CanvasRequest {
    /// Command-line flags win over the config file, which wins over the defaults
    pub fn resolve(args: &CanvasArgs, config: &FileConfig) -> Self {
        let defaults = Self::default();
        let size = args.size.or(config.size);
        Self {
            rows: args.rows.or(size).unwrap_or(defaults.rows),
            cols: args.cols.or(size).unwrap_or(defaults.cols),
            fill: args.fill.or(config.fill).unwrap_or(defaults.fill),
            template: args.template,
        }
    }
}

/// Allocate the canvas and stamp the sprite into its top-left corner
pub fn build_canvas(request: &CanvasRequest) -> Result<Grid> {
    let mut canvas = Grid::filled(request.rows, request.cols, request.fill)
        .with_context(|| format!("cannot allocate a {}x{} canvas", request.rows, request.cols))?;

    let (name, sprite) = if request.template {
        ("template", sprites::overlay_template()?)
    } else {
        ("snake", sprites::snake()?)
    };

    overlay(&sprite, &mut canvas).with_context(|| {
        format!(
            "{} sprite ({}x{}) does not fit on a {}x{} canvas",
            name,
            sprite.rows(),
            sprite.cols(),
            request.rows,
            request.cols
        )
    })?;

    crate::utils::logger::info(&format!(
        "composited {} onto {}x{} canvas, fill={}",
        name, request.rows, request.cols, request.fill
    ));

    Ok(canvas)
}

/// Build the canvas and format it, the whole default run minus the printing
pub fn render(request: &CanvasRequest, style: FormatStyle) -> Result<String> {
    let canvas = build_canvas(request)?;
    Ok(format_grid(&canvas, style))
}
