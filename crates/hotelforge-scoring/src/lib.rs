//! Constraint catalog and incremental scoring for HotelForge.
//!
//! This crate turns constraint templates and tenant overrides into an
//! ordered, immutable list of [`ActiveConstraint`]s and scores allocations
//! against it:
//! - [`catalog`] resolves templates plus tenant configuration, validating
//!   parameters into closed, strongly-typed [`ConstraintParams`]
//! - [`ScoreCalculator`] is the ground truth: full scoring with explained
//!   matches, plus the pure delta form
//! - [`AllocationScoreDirector`] keeps a working assignment with a per-room
//!   occupancy index and applies moves incrementally with undo
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use hotelforge_scoring::{CatalogResolver, InMemoryConstraintSource, ScoreCalculator};
//! use hotelforge_test::{booking, standard_room};
//!
//! let resolver = CatalogResolver::new(Arc::new(InMemoryConstraintSource::builtin()));
//! let constraints = resolver.resolve("hotel-1").unwrap();
//!
//! let rooms = vec![standard_room("room-101", 1)];
//! let calculator = ScoreCalculator::new(constraints, rooms);
//!
//! let bookings = vec![booking("B1", 1, 3).with_assigned_room(Some(0))];
//! let (score, matches) = calculator.score_full(&bookings);
//! assert!(score.is_feasible());
//! assert_eq!(matches.iter().map(|m| m.score).sum::<hotelforge_core::HardSoftScore>(), score);
//! ```

pub mod analysis;
pub mod calculator;
pub mod catalog;
pub mod constraint;
pub mod director;

pub use analysis::{ConstraintAnalysis, ScoreExplanation};
pub use calculator::ScoreCalculator;
pub use catalog::{
    builtin_templates, resolve_constraints, CatalogCache, CatalogError, CatalogResolver,
    ConstraintSource, ConstraintTemplate, InMemoryConstraintSource, ParameterField,
    ParameterSchema, ParameterType, TenantConstraintConfig, MAX_CONSTRAINT_WEIGHT,
};
pub use constraint::{
    ActiveConstraint, BudgetFitParams, ConstraintCode, ConstraintParams, ConstraintScope,
    HighFloorParams, LoyaltyTierParams, QuietZoneParams, VipBestRoomParams,
};
pub use director::{AllocationScoreDirector, RoomIndex};
