// scheduler.rs - Auto-play state machine

use std::time::{Duration, Instant};

/// Default delay between automatic steps.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(100);

/// Whether automatic stepping is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Stopped,
    Running,
}

/// Repeating step timer.
///
/// Starts stopped. `toggle` flips between the two states, so one control
/// both starts and stops a run. While running, `tick_due` consumes at most
/// one due tick per period, and the first tick falls due a full period
/// after the run starts. The caller supplies `now`, which keeps the
/// machine deterministic under test.
#[derive(Debug, Clone)]
pub struct AutoPlay {
    state: PlayState,
    period: Duration,
    last_step: Instant,
}

impl AutoPlay {
    pub fn new(period: Duration) -> Self {
        Self {
            state: PlayState::Stopped,
            period,
            last_step: Instant::now(),
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Change the delay between automatic steps; applies from the next
    /// tick check.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// Flip Stopped <-> Running, returning the new state. Starting arms
    /// the timer so the next step falls due one period from `now`.
    pub fn toggle(&mut self, now: Instant) -> PlayState {
        self.state = match self.state {
            PlayState::Stopped => {
                self.last_step = now;
                PlayState::Running
            }
            PlayState::Running => PlayState::Stopped,
        };
        self.state
    }

    /// Cancel a running timer. Stopped stays stopped.
    pub fn stop(&mut self) {
        self.state = PlayState::Stopped;
    }

    /// True when running and a full period has elapsed since the last
    /// automatic step; consuming the tick re-arms the timer from `now`.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        if self.is_running() && now.duration_since(self.last_step) >= self.period {
            self.last_step = now;
            true
        } else {
            false
        }
    }
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn starts_stopped_and_toggles() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::default();

        assert_eq!(autoplay.state(), PlayState::Stopped);
        assert_eq!(autoplay.toggle(t0), PlayState::Running);
        assert_eq!(autoplay.toggle(t0), PlayState::Stopped);
        assert_eq!(autoplay.toggle(t0), PlayState::Running);
    }

    #[test]
    fn no_ticks_while_stopped() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::default();
        assert!(!autoplay.tick_due(t0 + 500 * MS));
    }

    #[test]
    fn first_tick_due_after_one_period() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::new(Duration::from_millis(100));

        autoplay.toggle(t0);
        assert!(!autoplay.tick_due(t0 + 99 * MS));
        assert!(autoplay.tick_due(t0 + 100 * MS));
        // Consumed: re-armed from the tick instant.
        assert!(!autoplay.tick_due(t0 + 150 * MS));
        assert!(autoplay.tick_due(t0 + 200 * MS));
    }

    #[test]
    fn stop_cancels_a_running_timer() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::new(Duration::from_millis(100));

        autoplay.toggle(t0);
        autoplay.stop();
        assert!(!autoplay.is_running());
        assert!(!autoplay.tick_due(t0 + 300 * MS));

        // Stopping while already stopped is a no-op.
        autoplay.stop();
        assert_eq!(autoplay.state(), PlayState::Stopped);
    }

    #[test]
    fn set_period_applies_to_the_next_check() {
        let t0 = Instant::now();
        let mut autoplay = AutoPlay::new(Duration::from_millis(100));

        autoplay.toggle(t0);
        autoplay.set_period(Duration::from_millis(50));
        assert_eq!(autoplay.period(), Duration::from_millis(50));
        assert!(autoplay.tick_due(t0 + 50 * MS));
    }
}
