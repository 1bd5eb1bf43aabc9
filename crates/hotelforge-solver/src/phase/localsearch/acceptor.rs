//! Acceptors decide whether a move's resulting score is good enough.

use std::fmt::Debug;

use hotelforge_core::HardSoftScore;

/// Accepts or rejects moves in local search.
pub trait Acceptor: Send + Debug {
    /// Returns true if a move resulting in `move_score` should be accepted,
    /// given the previous step's score.
    fn is_accepted(&self, last_step_score: &HardSoftScore, move_score: &HardSoftScore) -> bool;

    fn phase_started(&mut self, _initial_score: &HardSoftScore) {}

    fn phase_ended(&mut self) {}

    /// Called when a step ends with an applied move.
    fn step_ended(&mut self, _step_score: &HardSoftScore) {}
}

impl<A: Acceptor + ?Sized> Acceptor for Box<A> {
    fn is_accepted(&self, last_step_score: &HardSoftScore, move_score: &HardSoftScore) -> bool {
        (**self).is_accepted(last_step_score, move_score)
    }

    fn phase_started(&mut self, initial_score: &HardSoftScore) {
        (**self).phase_started(initial_score)
    }

    fn phase_ended(&mut self) {
        (**self).phase_ended()
    }

    fn step_ended(&mut self, step_score: &HardSoftScore) {
        (**self).step_ended(step_score)
    }
}

/// Plateau hill climbing: accepts any move that is not worse.
///
/// Equal scores are accepted so the search can walk across plateaus.
#[derive(Debug, Clone, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(&self, last_step_score: &HardSoftScore, move_score: &HardSoftScore) -> bool {
        move_score >= last_step_score
    }
}

/// Late acceptance: accepts a move that is not worse than the previous step
/// or than the step score `late_acceptance_size` steps ago.
#[derive(Debug, Clone)]
pub struct LateAcceptanceAcceptor {
    late_acceptance_size: usize,
    // Circular buffer of step scores.
    score_history: Vec<HardSoftScore>,
    current_index: usize,
}

impl LateAcceptanceAcceptor {
    pub fn new(late_acceptance_size: usize) -> Self {
        let size = late_acceptance_size.max(1);
        Self {
            late_acceptance_size: size,
            score_history: vec![HardSoftScore::ZERO; size],
            current_index: 0,
        }
    }

    pub fn late_acceptance_size(&self) -> usize {
        self.late_acceptance_size
    }
}

impl Default for LateAcceptanceAcceptor {
    fn default() -> Self {
        Self::new(hotelforge_config::DEFAULT_LATE_ACCEPTANCE_SIZE)
    }
}

impl Acceptor for LateAcceptanceAcceptor {
    fn is_accepted(&self, last_step_score: &HardSoftScore, move_score: &HardSoftScore) -> bool {
        move_score >= last_step_score || *move_score >= self.score_history[self.current_index]
    }

    fn phase_started(&mut self, initial_score: &HardSoftScore) {
        self.score_history.fill(*initial_score);
        self.current_index = 0;
    }

    fn step_ended(&mut self, step_score: &HardSoftScore) {
        self.score_history[self.current_index] = *step_score;
        self.current_index = (self.current_index + 1) % self.late_acceptance_size;
    }
}
