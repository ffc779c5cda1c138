use anyhow::Result;
use crossterm::{
    queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{BufWriter, Write};

use super::cell::CellData;
use super::processor::PreviewProcessor;
use crate::canvas::Grid;

/// Writes half-block cells as truecolor escape sequences, inline (no alternate screen)
pub struct DisplayManager<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> DisplayManager<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    pub fn render(&mut self, cells: &[CellData], width: usize) -> Result<()> {
        if width == 0 {
            return Ok(());
        }

        for line in cells.chunks(width) {
            // Only emit a color change when it differs from the previous cell
            let mut last_fg: Option<(u8, u8, u8)> = None;
            let mut last_bg: Option<(u8, u8, u8)> = None;

            for cell in line {
                if Some(cell.fg) != last_fg {
                    let (r, g, b) = cell.fg;
                    queue!(self.out, SetForegroundColor(TermColor::Rgb { r, g, b }))?;
                    last_fg = Some(cell.fg);
                }
                if Some(cell.bg) != last_bg {
                    let (r, g, b) = cell.bg;
                    queue!(self.out, SetBackgroundColor(TermColor::Rgb { r, g, b }))?;
                    last_bg = Some(cell.bg);
                }
                queue!(self.out, Print(cell.char))?;
            }

            // Reset before the newline so the background does not bleed to the edge
            queue!(self.out, ResetColor, Print('\n'))?;
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Draw `grid` to `out` as a half-block preview
pub fn render_preview<W: Write>(grid: &Grid, out: W) -> Result<()> {
    let processor = PreviewProcessor::for_grid(grid);
    let cells = processor.process(grid);

    DisplayManager::new(out).render(&cells, processor.width)
}
