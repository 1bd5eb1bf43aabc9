//! Active constraints and their evaluators.
//!
//! Every canonical constraint has a [`ConstraintCode`]. Once resolved for a
//! tenant, it becomes an [`ActiveConstraint`] carrying its effective weight
//! and strongly-typed [`ConstraintParams`]. Evaluation is dispatched on the
//! parameter variant, so an active constraint is its own evaluator.

mod evaluate;
mod params;


use std::fmt;

use hotelforge_core::{ConstraintKind, HardSoftScore};

pub(crate) use evaluate::{EvalContext, MatchSink};
pub use params::{
    BudgetFitParams, ConstraintParams, HighFloorParams, LoyaltyTierParams, QuietZoneParams,
    VipBestRoomParams,
};

/// Identity of one of the fourteen canonical constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintCode {
    NoDoubleBooking,
    RoomTypeMatch,
    AccessibilityRequired,
    ValidDateRange,
    BookingUnallocated,
    VipBestRoom,
    ViewPreference,
    HighFloorPreference,
    QuietZonePreference,
    PetFriendlyMatch,
    SmokingPreferenceMatch,
    BudgetFit,
    LoyaltyTierReward,
    EarlyLateReadiness,
}

/// What a constraint looks at when it is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintScope {
    /// One booking and its assigned room.
    Booking,
    /// Two bookings sharing a room.
    Pair,
    /// One booking and everyone else staying in its room.
    Room,
}

impl ConstraintCode {
    pub const ALL: [ConstraintCode; 14] = [
        ConstraintCode::NoDoubleBooking,
        ConstraintCode::RoomTypeMatch,
        ConstraintCode::AccessibilityRequired,
        ConstraintCode::ValidDateRange,
        ConstraintCode::BookingUnallocated,
        ConstraintCode::VipBestRoom,
        ConstraintCode::ViewPreference,
        ConstraintCode::HighFloorPreference,
        ConstraintCode::QuietZonePreference,
        ConstraintCode::PetFriendlyMatch,
        ConstraintCode::SmokingPreferenceMatch,
        ConstraintCode::BudgetFit,
        ConstraintCode::LoyaltyTierReward,
        ConstraintCode::EarlyLateReadiness,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ConstraintCode::NoDoubleBooking => "no_double_booking",
            ConstraintCode::RoomTypeMatch => "room_type_match",
            ConstraintCode::AccessibilityRequired => "accessibility_required",
            ConstraintCode::ValidDateRange => "valid_date_range",
            ConstraintCode::BookingUnallocated => "booking_unallocated",
            ConstraintCode::VipBestRoom => "vip_best_room",
            ConstraintCode::ViewPreference => "view_preference",
            ConstraintCode::HighFloorPreference => "high_floor_preference",
            ConstraintCode::QuietZonePreference => "quiet_zone_preference",
            ConstraintCode::PetFriendlyMatch => "pet_friendly_match",
            ConstraintCode::SmokingPreferenceMatch => "smoking_preference_match",
            ConstraintCode::BudgetFit => "budget_fit",
            ConstraintCode::LoyaltyTierReward => "loyalty_tier_reward",
            ConstraintCode::EarlyLateReadiness => "early_late_readiness",
        }
    }

    /// Looks up a code by its string form.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == code)
    }

    pub const fn scope(self) -> ConstraintScope {
        match self {
            ConstraintCode::NoDoubleBooking => ConstraintScope::Pair,
            ConstraintCode::EarlyLateReadiness => ConstraintScope::Room,
            _ => ConstraintScope::Booking,
        }
    }
}

impl fmt::Display for ConstraintCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved constraint for one solve call.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveConstraint {
    pub kind: ConstraintKind,
    /// Effective weight per unit of magnitude.
    pub weight: i64,
    pub category: String,
    pub params: ConstraintParams,
}

impl ActiveConstraint {
    pub fn new(
        kind: ConstraintKind,
        weight: i64,
        category: impl Into<String>,
        params: ConstraintParams,
    ) -> Self {
        Self {
            kind,
            weight,
            category: category.into(),
            params,
        }
    }

    #[inline]
    pub fn code(&self) -> ConstraintCode {
        self.params.code()
    }

    #[inline]
    pub fn scope(&self) -> ConstraintScope {
        self.code().scope()
    }

    /// The weight placed on this constraint's score level.
    #[inline]
    pub fn weight_score(&self) -> HardSoftScore {
        HardSoftScore::of_level(self.kind.level(), self.weight)
    }

    /// Score contributed by one match of the given magnitude.
    #[inline]
    pub fn score_for(&self, magnitude: i64) -> HardSoftScore {
        self.weight_score().multiply(magnitude)
    }
}
