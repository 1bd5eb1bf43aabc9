//! Local search: sample moves, score them incrementally, keep the best
//! accepted one.

mod acceptor;
mod forager;
mod phase;

pub use acceptor::{Acceptor, HillClimbingAcceptor, LateAcceptanceAcceptor};
pub use forager::AcceptedCountForager;
pub use phase::LocalSearchPhase;
