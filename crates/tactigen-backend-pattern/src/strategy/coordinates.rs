//! Coordinate list generation.

use rand::Rng;
use rand_pcg::Pcg32;
use tactigen_spec::{GridPosition, GridSize, PatternMode};

/// Draws one position uniformly from the grid.
pub fn random_position(grid: GridSize, rng: &mut Pcg32) -> GridPosition {
    GridPosition::new(
        rng.gen_range(1..=grid.width),
        rng.gen_range(1..=grid.height),
    )
}

/// Draws `count` positions independently, so repeats are possible.
pub fn random_coordinates(grid: GridSize, count: usize, rng: &mut Pcg32) -> Vec<GridPosition> {
    (0..count).map(|_| random_position(grid, rng)).collect()
}

/// Moves one axis value by `-step`, `0` or `+step`, staying within `1..=max`.
fn walk_axis(value: u8, max: u8, step: u8, rng: &mut Pcg32) -> u8 {
    let value = i16::from(value);
    let step = i16::from(step);
    let max = i16::from(max);

    let mut options = [0i16; 3];
    let mut len = 0;
    for next in [value - step, value, value + step] {
        if (1..=max).contains(&next) {
            options[len] = next;
            len += 1;
        }
    }
    // `value` itself is always in bounds, so `len >= 1`.
    options[rng.gen_range(0..len)] as u8
}

/// Bounded random walk of `steps` moves from `start`.
///
/// Each move shifts the column and row independently by `-step`, `0` or
/// `+step`, dropping any option that would leave the grid. The result has
/// `steps + 1` positions including `start`.
pub fn random_walk(
    grid: GridSize,
    start: GridPosition,
    steps: usize,
    step: u8,
    rng: &mut Pcg32,
) -> Vec<GridPosition> {
    let mut path = Vec::with_capacity(steps + 1);
    path.push(start);

    let mut current = start;
    for i in 0..steps {
        let next = GridPosition::new(
            walk_axis(current.column, grid.width, step, rng),
            walk_axis(current.row, grid.height, step, rng),
        );
        tracing::trace!(step = i, from = %current, to = %next, "walk step");
        path.push(next);
        current = next;
    }
    path
}

/// Builds the coordinate list for a mode.
///
/// `actuators` is the set size for random modes and the number of walk
/// steps for path-like modes. Dynamic patterns draw `pattern_sets` sets in
/// turn and keep the last one; earlier draws only advance the RNG.
pub fn coordinates_for_mode(
    mode: PatternMode,
    grid: GridSize,
    actuators: usize,
    pattern_sets: usize,
    rng: &mut Pcg32,
) -> Vec<GridPosition> {
    match mode {
        PatternMode::Static => random_coordinates(grid, actuators, rng),
        PatternMode::DynamicRandom => {
            let mut coords = Vec::new();
            for _ in 0..pattern_sets.max(1) {
                coords = random_coordinates(grid, actuators, rng);
            }
            coords
        }
        PatternMode::PathLike | PatternMode::StriddenPathLike => {
            let step = mode.walk_step().unwrap_or(1);
            let start = random_position(grid, rng);
            random_walk(grid, start, actuators, step, rng)
        }
    }
}
