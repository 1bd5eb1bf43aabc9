//! Scopes shared by the solver phases.

mod solver;

pub use solver::{BestSolutionUpdate, SolverScope};
