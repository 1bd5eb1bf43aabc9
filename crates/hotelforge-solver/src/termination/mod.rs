//! Termination conditions for the local search phase.

mod best_score;
mod composite;
mod external;
mod step_count;
mod time;
mod unimproved;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use best_score::BestScoreTermination;
pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedStepCountTermination;

/// Decides when to stop solving.
pub trait Termination: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool;
}

/// An absent termination never fires.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(solver_scope))
    }
}

impl<T: Termination + ?Sized> Termination for Box<T> {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        (**self).is_terminated(solver_scope)
    }
}

#[cfg(test)]
mod tests;
