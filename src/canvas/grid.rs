use super::color::Color;
use super::error::GridError;

/// Rectangular grid of colors, stored row-major.
///
/// Dimensions are fixed at construction. Every row is its own slice of the
/// backing buffer, so writing into one row never touches another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Build a `rows` x `cols` grid with every cell set to `fill`
    pub fn filled(rows: usize, cols: usize, fill: Color) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let invalid = GridError::InvalidDimensions { rows, cols };
        let len = rows.checked_mul(cols).ok_or_else(|| invalid.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid)?;
        cells.resize(len, fill);

        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from nested literal data such as the compiled-in sprites
    pub fn from_rows<R: AsRef<[u32]>>(data: &[R]) -> Result<Self, GridError> {
        let rows = data.len();
        let cols = data.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (index, row) in data.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::RaggedRows {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            for &value in row {
                cells.push(Color::new(value)?);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Color, GridError> {
        let index = self.index(row, col)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<(), GridError> {
        let index = self.index(row, col)?;
        self.cells[index] = color;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&[Color], GridError> {
        let start = self.index(row, 0)?;
        Ok(&self.cells[start..start + self.cols])
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut [Color], GridError> {
        let start = self.index(row, 0)?;
        let cols = self.cols;
        Ok(&mut self.cells[start..start + cols])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}
