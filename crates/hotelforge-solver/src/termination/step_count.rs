//! Step count termination.

use super::Termination;
use crate::scope::SolverScope;

#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope.total_step_count() >= self.limit
    }
}
