//! Per-worker search counters.

use std::time::{Duration, Instant};

/// Step and move counters of one worker.
///
/// # Example
///
/// ```
/// use hotelforge_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_move(true);
/// stats.record_move(false);
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.moves_evaluated, 2);
/// assert_eq!(stats.moves_accepted, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    /// Steps taken.
    pub step_count: u64,
    /// Moves scored.
    pub moves_evaluated: u64,
    /// Moves the acceptor let through.
    pub moves_accepted: u64,
}

impl SolverStats {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn start_at(&mut self, start: Instant) {
        self.start_time = Some(start);
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_move(&mut self, accepted: bool) {
        self.moves_evaluated += 1;
        if accepted {
            self.moves_accepted += 1;
        }
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Moves scored per second of wall-clock time.
    pub fn moves_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.moves_evaluated as f64 / secs
        } else {
            0.0
        }
    }

    /// Accepted / evaluated, or 0 before any move.
    pub fn acceptance_rate(&self) -> f64 {
        if self.moves_evaluated == 0 {
            0.0
        } else {
            self.moves_accepted as f64 / self.moves_evaluated as f64
        }
    }

    /// Adds another worker's counters.
    pub fn merge(&mut self, other: &SolverStats) {
        self.step_count += other.step_count;
        self.moves_evaluated += other.moves_evaluated;
        self.moves_accepted += other.moves_accepted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_before_any_move() {
        let stats = SolverStats::default();
        assert_eq!(stats.acceptance_rate(), 0.0);
        assert_eq!(stats.moves_per_second(), 0.0);
    }

    #[test]
    fn test_acceptance_rate_and_merge() {
        let mut stats = SolverStats::default();
        stats.start_at(Instant::now() - Duration::from_secs(2));
        for accepted in [true, false, false, true] {
            stats.record_move(accepted);
        }
        assert_eq!(stats.acceptance_rate(), 0.5);
        assert!(stats.moves_per_second() > 0.0);
        assert!(stats.moves_per_second() <= 2.0);

        let mut other = SolverStats::default();
        other.record_step();
        other.record_move(false);
        stats.merge(&other);
        assert_eq!(stats.step_count, 1);
        assert_eq!(stats.moves_evaluated, 5);
        assert!((stats.acceptance_rate() - 0.4).abs() < 1e-12);
    }
}
