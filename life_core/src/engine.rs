// engine.rs - Generation rule and board-wide operations

use rand::Rng;

use crate::grid::{CellState, Grid};

/// Compute the next generation.
///
/// Two-phase by construction: every neighbor count reads the pre-step
/// snapshot and results land in a fresh grid, so cell evaluation order
/// never affects the outcome.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let live = grid.live_neighbors(x, y);
            let state = match (grid.get(x, y), live) {
                (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive, // Survival
                (CellState::Dead, 3) => CellState::Alive,                          // Birth
                _ => CellState::Dead,                                              // Death or stays dead
            };
            next.set(x, y, state);
        }
    }
    next
}

/// Set every cell independently: alive with probability 0.5, dead otherwise.
pub fn randomize<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let state = if rng.random_bool(0.5) {
                CellState::Alive
            } else {
                CellState::Dead
            };
            grid.set(x, y, state);
        }
    }
}
