//! HotelForge - Multi-tenant Hotel Room Allocation
//!
//! Assigns guest bookings to rooms under hard feasibility rules and
//! weighted, per-tenant guest preferences:
//! 1. the tenant's constraint catalog is resolved into typed constraints
//! 2. a construction heuristic places bookings by priority
//! 3. local search improves the result within a time budget
//! 4. the best assignment comes back fully explained
//!
//! # Example
//!
//! ```
//! use hotelforge::prelude::*;
//!
//! let request = SolveRequest::from_json(r#"{
//!     "tenantId": "hotel-1",
//!     "timeLimit": 0,
//!     "bookings": [{
//!         "guestId": "g1", "guestName": "Ada",
//!         "checkIn": "2026-06-01", "checkOut": "2026-06-03"
//!     }],
//!     "rooms": [{
//!         "id": "room-101", "number": "101", "type": "standard",
//!         "floor": 1, "view": "city", "pricePerNight": 120
//!     }]
//! }"#).unwrap();
//!
//! let solver = Solver::new(std::sync::Arc::new(InMemoryConstraintSource::builtin()));
//! let (status, response) = handle_request(&solver, request);
//! assert_eq!(status, 200);
//! assert!(response.success);
//! assert_eq!(response.assignments[0].room_id.as_deref(), Some("room-101"));
//! ```

pub mod api;
mod solver;

pub use api::{handle_json, handle_request, Assignment, BookingRequest, SolveRequest, SolveResponse};
pub use solver::{load_solver, DEFAULT_CONFIG_FILE};

pub use hotelforge_config::{CatalogFile, ConfigError, SolverConfig, WorkerCount};
pub use hotelforge_core::{
    ConstraintKind, ConstraintMatch, DateRange, Guest, GuestBooking, GuestPreferences,
    HardSoftScore, Justification, Room, RoomType, Solution, SolverError, View,
};
pub use hotelforge_scoring::{
    CatalogResolver, ConstraintSource, ConstraintTemplate, InMemoryConstraintSource,
    ScoreCalculator, ScoreExplanation, TenantConstraintConfig,
};
pub use hotelforge_solver::{
    AllocationProblem, BestSolutionUpdate, SolveResult, SolveStatistics, Solver, SolverStatus,
};

pub mod prelude {
    pub use super::{handle_json, handle_request, SolveRequest, SolveResponse};
    pub use super::{AllocationProblem, InMemoryConstraintSource, Solver, SolverConfig};
    pub use super::{GuestBooking, HardSoftScore, Room, RoomType, Solution, View};
}
