//! NumPy `.npy` export.
//!
//! Writes the grid as an `<i4` array of shape `(1, T, H, W)`: a leading batch
//! axis over the `[time][row][col]` amplitude frames.

use std::io::Write;

use ndarray_npy::WriteNpyExt;

use crate::error::PreviewResult;
use crate::grid::AmplitudeGrid;

/// Writes the grid as a `.npy` array.
pub fn write_npy<W: Write>(grid: &AmplitudeGrid, writer: W) -> PreviewResult<()> {
    grid.to_array().write_npy(writer)?;
    Ok(())
}

/// Renders the grid to `.npy` bytes.
pub fn render_npy(grid: &AmplitudeGrid) -> PreviewResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_npy(grid, &mut bytes)?;
    Ok(bytes)
}
