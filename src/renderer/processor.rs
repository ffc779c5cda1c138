use super::cell::CellData;
use crate::canvas::Grid;
use crate::shared::constants;

/// Folds pixel rows into half-block terminal cells
pub struct PreviewProcessor {
    pub width: usize,
    pub height: usize,
}

impl PreviewProcessor {
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            width: grid.cols(),
            height: grid.rows(),
        }
    }

    /// Number of terminal rows needed, an odd last pixel row still takes a full cell row
    pub fn term_height(&self) -> usize {
        (self.height + 1) / 2
    }

    /// Pixels outside `grid` are drawn black, so the cell count always matches this processor
    pub fn process(&self, grid: &Grid) -> Vec<CellData> {
        let w = self.width;
        let mut cells = vec![CellData::default(); w * self.term_height()];

        for (idx, cell) in cells.iter_mut().enumerate() {
            let cx = idx % w;
            let cy = idx / w;

            let get_pixel = |y: usize| -> (u8, u8, u8) {
                grid.get(y, cx).map(|color| color.rgb()).unwrap_or((0, 0, 0))
            };

            *cell = CellData {
                char: constants::HALF_BLOCK,
                fg: get_pixel(cy * 2),
                bg: get_pixel(cy * 2 + 1),
            };
        }

        cells
    }
}
