//! Stagnation termination.

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after `limit` consecutive steps without a new best score.
///
/// Plateau steps that keep the score unchanged count as unimproved.
#[derive(Debug, Clone)]
pub struct UnimprovedStepCountTermination {
    limit: u64,
}

impl UnimprovedStepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for UnimprovedStepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope.unimproved_step_count() >= self.limit
    }
}
