//! Delay hook standing in for an asynchronous pipeline stage.
//!
//! # Responsibility
//! - Model the artificial processing pause as an injectable, cancellable
//!   blocking step.
//!
//! # Invariants
//! - Hooks must be cheap to call and must not panic.
//! - `NoDelay` always completes immediately; tests rely on it.

use crate::sim::SimulatorKind;
use std::thread;
use std::time::Duration;

/// Default pause applied by [`FixedDelay::standard`].
pub const STANDARD_PAUSE: Duration = Duration::from_secs(2);

/// How a delay stage ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    Completed,
    /// The wait was cancelled; the simulation must abort without a result.
    Interrupted,
}

/// Blocking pause executed once per simulation, before any computation.
pub trait DelayHook {
    fn pause(&self, kind: SimulatorKind) -> DelayOutcome;
}

/// Sleeps the calling thread for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    pause_for: Duration,
}

impl FixedDelay {
    pub fn new(pause_for: Duration) -> Self {
        Self { pause_for }
    }

    /// The production pause used by the demo UI.
    pub fn standard() -> Self {
        Self::new(STANDARD_PAUSE)
    }
}

impl DelayHook for FixedDelay {
    fn pause(&self, _kind: SimulatorKind) -> DelayOutcome {
        thread::sleep(self.pause_for);
        DelayOutcome::Completed
    }
}

/// Completes immediately; lets tests run simulations synchronously.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayHook for NoDelay {
    fn pause(&self, _kind: SimulatorKind) -> DelayOutcome {
        DelayOutcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::{DelayHook, DelayOutcome, FixedDelay, NoDelay};
    use crate::sim::SimulatorKind;
    use std::time::{Duration, Instant};

    #[test]
    fn no_delay_completes_immediately() {
        let outcome = NoDelay.pause(SimulatorKind::DocumentValidation);
        assert_eq!(outcome, DelayOutcome::Completed);
    }

    #[test]
    fn fixed_delay_blocks_for_roughly_its_duration() {
        let hook = FixedDelay::new(Duration::from_millis(20));
        let started_at = Instant::now();
        let outcome = hook.pause(SimulatorKind::RiskScoring);
        assert_eq!(outcome, DelayOutcome::Completed);
        assert!(started_at.elapsed() >= Duration::from_millis(20));
    }
}
