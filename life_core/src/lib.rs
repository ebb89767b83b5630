//! Game of Life board state, step engine and auto-play scheduling.

pub mod engine;
pub mod grid;
pub mod patterns;
pub mod scheduler;
pub mod simulation;

pub use engine::{randomize, step};
pub use grid::{CellState, Grid};
pub use patterns::{PATTERNS, Pattern};
pub use scheduler::{AutoPlay, PlayState};
pub use simulation::{SimConfig, Simulation};
