//! Score-based termination.

use hotelforge_core::HardSoftScore;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once the best score reaches a target.
#[derive(Debug, Clone)]
pub struct BestScoreTermination {
    target_score: HardSoftScore,
}

impl BestScoreTermination {
    pub fn new(target_score: HardSoftScore) -> Self {
        Self { target_score }
    }
}

impl Termination for BestScoreTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope.best_score() >= self.target_score
    }
}
