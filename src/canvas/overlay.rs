use super::error::GridError;
use super::grid::Grid;

/// Copy `top` onto the top-left corner of `background`, in place.
///
/// Cells of `background` outside `top`'s extent keep their previous color.
/// Fails with `OutOfBounds` without writing anything if `top` does not fit.
pub fn overlay(top: &Grid, background: &mut Grid) -> Result<(), GridError> {
    if top.rows() > background.rows() || top.cols() > background.cols() {
        // Report the first cell of `top` that would land outside `background`
        let row = if top.rows() > background.rows() { background.rows() } else { 0 };
        let col = if top.cols() > background.cols() { background.cols() } else { 0 };
        return Err(GridError::OutOfBounds {
            row,
            col,
            rows: background.rows(),
            cols: background.cols(),
        });
    }

    for (index, source) in top.iter_rows().enumerate() {
        let target = background.row_mut(index)?;
        target[..source.len()].copy_from_slice(source);
    }

    Ok(())
}
