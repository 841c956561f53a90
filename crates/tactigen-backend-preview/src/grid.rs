//! Rasterizing patterns into `[time][row][col]` amplitude frames.

use ndarray::Array4;
use tactigen_spec::{GridSize, Pattern};

use crate::error::{PreviewError, PreviewResult};

/// One frame per pattern iteration, one cell per actuator.
///
/// Cells no event touched are `None`. When several events in one iteration
/// hit the same actuator, the last one wins.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeGrid {
    grid: GridSize,
    frames: Vec<Vec<Option<i32>>>,
}

impl AmplitudeGrid {
    /// Rasterizes a pattern.
    pub fn from_pattern(pattern: &Pattern, grid: GridSize) -> PreviewResult<Self> {
        let cells = grid.capacity();
        let mut frames = Vec::with_capacity(pattern.len());

        for iteration in pattern.iterations() {
            let mut frame = vec![None; cells];
            for event in &iteration.events {
                if !grid.contains(event.coord) {
                    return Err(PreviewError::CoordinateOutOfGrid {
                        coord: event.coord,
                        width: grid.width,
                        height: grid.height,
                    });
                }
                let idx = (event.coord.row as usize - 1) * grid.width as usize
                    + (event.coord.column as usize - 1);
                frame[idx] = Some(event.amplitude);
            }
            frames.push(frame);
        }

        Ok(Self { grid, frames })
    }

    /// Grid geometry.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Cells of frame `t`, row-major.
    pub fn frame(&self, t: usize) -> Option<&[Option<i32>]> {
        self.frames.get(t).map(Vec::as_slice)
    }

    /// The cell at 1-based `(column, row)` in frame `t`.
    pub fn cell(&self, t: usize, column: u8, row: u8) -> Option<i32> {
        if column == 0 || row == 0 || column > self.grid.width || row > self.grid.height {
            return None;
        }
        let idx = (row as usize - 1) * self.grid.width as usize + (column as usize - 1);
        self.frames.get(t).and_then(|frame| frame[idx])
    }

    /// Array shape `(1, time, rows, columns)` with the leading batch axis.
    pub fn shape(&self) -> [usize; 4] {
        [
            1,
            self.frames.len(),
            self.grid.height as usize,
            self.grid.width as usize,
        ]
    }

    /// The frames as a `(1, time, rows, columns)` array, inactive cells as zero.
    pub fn to_array(&self) -> Array4<i32> {
        let [batch, time, rows, columns] = self.shape();
        Array4::from_shape_fn((batch, time, rows, columns), |(_, t, row, column)| {
            self.frames[t][row * columns + column].unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tactigen_spec::{GridPosition, MotorEvent, PatternIteration};

    fn event(c: u8, r: u8, amp: i32) -> MotorEvent {
        MotorEvent::new(GridPosition::new(c, r), amp, 300)
    }

    #[test]
    fn test_cells_are_row_major_and_one_based() {
        let pattern = Pattern::new(vec![
            PatternIteration::new(vec![event(1, 1, 10), event(4, 6, 20)], 10.0),
            PatternIteration::new(vec![event(2, 3, 30)], 10.0),
        ]);
        let grid = AmplitudeGrid::from_pattern(&pattern, GridSize::new(4, 6)).unwrap();

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.shape(), [1, 2, 6, 4]);
        assert_eq!(grid.cell(0, 1, 1), Some(10));
        assert_eq!(grid.cell(0, 4, 6), Some(20));
        assert_eq!(grid.cell(0, 2, 3), None);
        assert_eq!(grid.cell(1, 2, 3), Some(30));
        assert_eq!(grid.frame(0).unwrap()[23], Some(20));
        assert_eq!(grid.frame(1).unwrap()[2 * 4 + 1], Some(30));
    }

    #[test]
    fn test_last_event_wins() {
        let pattern = Pattern::new(vec![PatternIteration::new(
            vec![event(2, 2, 1), event(2, 2, 2)],
            10.0,
        )]);
        let grid = AmplitudeGrid::from_pattern(&pattern, GridSize::default()).unwrap();
        assert_eq!(grid.cell(0, 2, 2), Some(2));
    }

    #[test]
    fn test_array_fills_inactive_with_zero() {
        let pattern = Pattern::new(vec![PatternIteration::new(vec![event(2, 1, -7)], 10.0)]);
        let grid = AmplitudeGrid::from_pattern(&pattern, GridSize::new(2, 2)).unwrap();
        let array = grid.to_array();
        assert_eq!(array.shape(), &[1, 1, 2, 2]);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![0, -7, 0, 0]);
        assert_eq!(array[[0, 0, 0, 1]], -7);
    }

    #[test]
    fn test_out_of_grid_event_rejected() {
        let pattern = Pattern::new(vec![PatternIteration::new(vec![event(3, 1, 5)], 10.0)]);
        let err = AmplitudeGrid::from_pattern(&pattern, GridSize::new(2, 2)).unwrap_err();
        assert!(matches!(err, PreviewError::CoordinateOutOfGrid { .. }));
    }
}
