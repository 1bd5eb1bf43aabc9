//! Move selection within one step.

use hotelforge_core::HardSoftScore;

/// Collects accepted moves of a step and picks the best one.
///
/// Stores `(index, score)` pairs into the step's move list. Quits early once
/// `accepted_count_limit` moves were accepted. Among equal scores the first
/// accepted move wins.
#[derive(Debug, Clone)]
pub struct AcceptedCountForager {
    accepted_count_limit: usize,
    accepted_count: usize,
    best: Option<(usize, HardSoftScore)>,
}

impl AcceptedCountForager {
    pub fn new(accepted_count_limit: usize) -> Self {
        Self {
            accepted_count_limit: accepted_count_limit.max(1),
            accepted_count: 0,
            best: None,
        }
    }

    pub fn step_started(&mut self) {
        self.accepted_count = 0;
        self.best = None;
    }

    pub fn add_move_index(&mut self, index: usize, score: HardSoftScore) {
        self.accepted_count += 1;
        if self.best.map_or(true, |(_, best)| score > best) {
            self.best = Some((index, score));
        }
    }

    pub fn is_quit_early(&self) -> bool {
        self.accepted_count >= self.accepted_count_limit
    }

    /// The best accepted move of the step, if any.
    pub fn pick_move_index(&mut self) -> Option<(usize, HardSoftScore)> {
        self.best.take()
    }
}
