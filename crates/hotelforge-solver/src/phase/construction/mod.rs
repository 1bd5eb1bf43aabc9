//! Construction heuristic: place bookings one at a time, best room first.

mod forager;
mod phase;
mod placer;

pub use forager::BestFitForager;
pub use phase::ConstructionHeuristicPhase;
pub use placer::QueuedBookingPlacer;
