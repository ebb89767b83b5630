// simulation.rs - The state object behind the UI commands

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use log::debug;

use crate::engine;
use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid};
use crate::patterns::{self, Pattern};
use crate::scheduler::{AutoPlay, DEFAULT_PERIOD, PlayState};

/// Recent generation hashes kept for cycle detection.
const HISTORY_LEN: usize = 10;

/// Construction-time settings.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Delay between automatic steps.
    pub period: Duration,
    /// Stop a running auto-play when the board is randomized.
    pub pause_on_reset: bool,
    /// Stop auto-play when a recent board state repeats.
    pub halt_on_cycle: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            period: DEFAULT_PERIOD,
            pause_on_reset: false,
            halt_on_cycle: false,
        }
    }
}

/// Grid, scheduler and bookkeeping behind the UI commands.
///
/// A frontend maps input events to calls on this object and renders from
/// the `grid()` snapshot; nothing here knows about any widget toolkit.
pub struct Simulation {
    grid: Grid,
    autoplay: AutoPlay,
    generation: u64,
    pause_on_reset: bool,
    halt_on_cycle: bool,
    history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self {
            grid: Grid::new(config.width, config.height),
            autoplay: AutoPlay::new(config.period),
            generation: 0,
            pause_on_reset: config.pause_on_reset,
            halt_on_cycle: config.halt_on_cycle,
            history: [0; HISTORY_LEN],
            history_count: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn period(&self) -> Duration {
        self.autoplay.period()
    }

    pub fn set_period(&mut self, period: Duration) {
        self.autoplay.set_period(period);
    }

    pub fn halt_on_cycle(&self) -> bool {
        self.halt_on_cycle
    }

    pub fn set_halt_on_cycle(&mut self, on: bool) {
        if on && !self.halt_on_cycle {
            self.reset_history();
        }
        self.halt_on_cycle = on;
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        self.grid = engine::step(&self.grid);
        self.generation += 1;
        if self.halt_on_cycle && self.seen_before() && self.autoplay.is_running() {
            debug!(
                "board state repeated at generation {}, stopping auto-play",
                self.generation
            );
            self.autoplay.stop();
        }
    }

    /// Flip one cell. Coordinates outside the board are ignored.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if self.grid.in_bounds(x, y) {
            self.grid.toggle(x, y);
        }
    }

    /// Start or stop automatic stepping.
    pub fn toggle_autoplay(&mut self, now: Instant) -> PlayState {
        let state = self.autoplay.toggle(now);
        debug!("auto-play {state:?}");
        state
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Randomize the whole board: each cell alive with probability 0.5.
    /// A running auto-play keeps running unless the simulation was
    /// configured with `pause_on_reset`.
    pub fn reset(&mut self) {
        if self.pause_on_reset {
            self.autoplay.stop();
        }
        engine::randomize(&mut self.grid, &mut rand::rng());
        self.restart_counters();
        debug!("board randomized, population {}", self.grid.population());
    }

    /// Kill every cell and stop any running auto-play.
    pub fn clear(&mut self) {
        self.autoplay.stop();
        self.grid.clear();
        self.restart_counters();
        debug!("board cleared");
    }

    /// Seed a named pattern, centered on the board.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        patterns::apply_pattern(&mut self.grid, pattern);
        self.restart_counters();
        debug!("applied pattern {}", pattern.name);
    }

    /// Drive auto-play: perform one step when a tick is due. Frontends
    /// call this once per frame with the current instant; returns whether
    /// a step happened.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.autoplay.tick_due(now) {
            self.step();
            true
        } else {
            false
        }
    }

    fn restart_counters(&mut self) {
        self.generation = 0;
        self.reset_history();
    }

    fn reset_history(&mut self) {
        self.history = [0; HISTORY_LEN];
        self.history_count = 0;
    }

    /// Record the current state in the hash ring; true if it was already
    /// there.
    fn seen_before(&mut self) -> bool {
        let hash = grid_hash(&self.grid);
        if self.history.contains(&hash) {
            return true;
        }
        self.history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
        false
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

fn grid_hash(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.cells().hash(&mut hasher);
    hasher.finish()
}
