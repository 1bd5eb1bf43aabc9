//! HotelForge Solver Engine
//!
//! This crate provides the search side of room allocation:
//! - Construction heuristic (priority-ordered best-fit placement)
//! - Local search with reassign and swap moves
//! - Acceptors, foragers and termination conditions
//! - The [`Solver`] orchestrator with parallel workers, cooperative
//!   cancellation and best-solution streaming
//! - Configuration wiring (builder module)

pub mod builder;
pub mod heuristic;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod status;
pub mod termination;

pub use builder::{AcceptorBuilder, SearchTermination, TerminationBuilder};
pub use heuristic::{AllocationMove, MoveSelector};
pub use phase::{
    construction::{BestFitForager, ConstructionHeuristicPhase, QueuedBookingPlacer},
    localsearch::{
        AcceptedCountForager, Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor,
        LocalSearchPhase,
    },
    Phase,
};
pub use scope::{BestSolutionUpdate, SolverScope};
pub use solver::{
    AllocationProblem, SolveResult, SolveStatistics, Solver, DEFAULT_TIME_LIMIT_SECS,
};
pub use stats::SolverStats;
pub use status::SolverStatus;
pub use termination::{
    BestScoreTermination, ExternalTermination, OrTermination, StepCountTermination, Termination,
    TimeTermination, UnimprovedStepCountTermination,
};
