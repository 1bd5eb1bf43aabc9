//! Solver phases.
//!
//! - [`ConstructionHeuristicPhase`]: greedily builds the initial assignment
//! - [`LocalSearchPhase`]: improves it with sampled reassign/swap moves

pub mod construction;
pub mod localsearch;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use construction::ConstructionHeuristicPhase;
pub use localsearch::LocalSearchPhase;

/// A phase of the solving process.
///
/// Phases run in sequence. Each modifies the working assignment in the
/// solver scope and keeps the scope's best solution up to date.
pub trait Phase: Send + Debug {
    fn solve(&mut self, solver_scope: &mut SolverScope);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
