// Per-constraint evaluation.
//
// Evaluators compute an integer magnitude for the booking (or booking pair)
// they are given. A magnitude of zero is not a match. Justifications are only
// built when the sink asks for them.

use hotelforge_core::{GuestBooking, Justification, Room, RoomType};
use rust_decimal::Decimal;

use super::{ActiveConstraint, ConstraintParams};
use crate::director::RoomIndex;

// Receives constraint matches from evaluators.
pub(crate) trait MatchSink {
    fn record(
        &mut self,
        constraint: &ActiveConstraint,
        magnitude: i64,
        justify: impl FnOnce() -> Justification,
    );
}

// Read-only view of the state being scored.
pub(crate) struct EvalContext<'a> {
    pub rooms: &'a [Room],
    pub bookings: &'a [GuestBooking],
    pub index: &'a RoomIndex,
    // Indexed by `RoomType::rank`.
    pub type_available: &'a [bool; 3],
}

impl EvalContext<'_> {
    #[inline]
    fn room_of(&self, booking: &GuestBooking) -> Option<&Room> {
        booking.assigned_room.and_then(|r| self.rooms.get(r))
    }

    #[inline]
    fn is_type_available(&self, room_type: RoomType) -> bool {
        self.type_available[room_type.rank() as usize]
    }
}

impl ActiveConstraint {
    // Single-booking constraints.
    pub(crate) fn evaluate_booking<S: MatchSink>(
        &self,
        ctx: &EvalContext<'_>,
        booking_idx: usize,
        sink: &mut S,
    ) {
        let booking = &ctx.bookings[booking_idx];
        let room = ctx.room_of(booking);
        let guest = &booking.guest;
        let prefs = &guest.preferences;

        let magnitude = match (&self.params, room) {
            (ConstraintParams::ValidDateRange, _) => i64::from(!booking.date_range().is_valid()),
            (ConstraintParams::BookingUnallocated, None) => 1,
            (ConstraintParams::RoomTypeMatch, Some(room)) => booking
                .requested_room_type
                .map_or(0, |t| i64::from(t != room.room_type)),
            (ConstraintParams::RoomTypeMatch, None) => booking
                .requested_room_type
                .map_or(0, |t| i64::from(!ctx.is_type_available(t))),
            (ConstraintParams::AccessibilityRequired, Some(room)) => {
                i64::from(prefs.accessible && !room.accessible)
            }
            (ConstraintParams::VipBestRoom(p), Some(room)) if guest.vip => {
                room.quality_rank(p.premium_view)
            }
            (ConstraintParams::ViewPreference, Some(room)) => {
                i64::from(prefs.view == Some(room.view))
            }
            (ConstraintParams::HighFloorPreference(p), Some(room)) => {
                i64::from(prefs.high_floor && room.floor >= p.min_floor)
            }
            (ConstraintParams::QuietZonePreference(p), Some(room)) => i64::from(
                prefs.quiet
                    && room.floor >= p.min_floor
                    && room.distance_from_elevator >= p.min_distance_from_elevator,
            ),
            (ConstraintParams::PetFriendlyMatch, Some(room)) => {
                i64::from(prefs.pets && room.pet_friendly)
            }
            (ConstraintParams::SmokingPreferenceMatch, Some(room)) => {
                i64::from(prefs.smoking == room.smoking_allowed)
            }
            (ConstraintParams::BudgetFit(p), Some(room)) => guest.budget.map_or(0, |budget| {
                i64::from(exceeds_budget(room.price_per_night, budget, p.tolerance_percent))
            }),
            (ConstraintParams::LoyaltyTierReward(p), Some(room)) => {
                let tier = guest.loyalty_tier;
                if tier >= p.min_tier.max(1) && room.room_type.is_upgrade_for_tier(tier) {
                    i64::from(tier)
                } else {
                    0
                }
            }
            _ => 0,
        };

        if magnitude != 0 {
            sink.record(self, magnitude, || {
                Justification::new(
                    vec![booking.id.clone()],
                    room.map(|r| vec![r.id.clone()]).unwrap_or_default(),
                    self.describe(booking, room),
                )
            });
        }
    }

    // Two bookings sharing a room. Callers pass each unordered pair once.
    pub(crate) fn evaluate_pair<S: MatchSink>(
        &self,
        ctx: &EvalContext<'_>,
        a: usize,
        b: usize,
        sink: &mut S,
    ) {
        if !matches!(self.params, ConstraintParams::NoDoubleBooking) {
            return;
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        let (x, y) = (&ctx.bookings[first], &ctx.bookings[second]);
        let Some(room) = ctx.room_of(x) else {
            return;
        };
        if x.assigned_room != y.assigned_room || !x.overlaps(y) {
            return;
        }
        sink.record(self, 1, || {
            Justification::new(
                vec![x.id.clone(), y.id.clone()],
                vec![room.id.clone()],
                format!(
                    "bookings {} and {} overlap in room {}",
                    x.id, y.id, room.number
                ),
            )
        });
    }

    // One booking against the other occupants of its room.
    pub(crate) fn evaluate_room_context<S: MatchSink>(
        &self,
        ctx: &EvalContext<'_>,
        booking_idx: usize,
        sink: &mut S,
    ) {
        if !matches!(self.params, ConstraintParams::EarlyLateReadiness) {
            return;
        }
        let booking = &ctx.bookings[booking_idx];
        let Some(room_idx) = booking.assigned_room else {
            return;
        };
        let Some(room) = ctx.rooms.get(room_idx) else {
            return;
        };
        let mut early = booking.early_checkin;
        let mut late = booking.late_checkout;
        for &j in ctx.index.occupants(room_idx) {
            if j == booking_idx {
                continue;
            }
            let other = &ctx.bookings[j];
            if other.check_out == booking.check_in {
                early = false;
            }
            if other.check_in == booking.check_out {
                late = false;
            }
        }
        let magnitude = i64::from(early) + i64::from(late);

        if magnitude != 0 {
            sink.record(self, magnitude, || {
                Justification::new(
                    vec![booking.id.clone()],
                    vec![room.id.clone()],
                    format!(
                        "room {} is ready for {} of the requested early/late flags of booking {}",
                        room.number, magnitude, booking.id
                    ),
                )
            });
        }
    }

    fn describe(&self, booking: &GuestBooking, room: Option<&Room>) -> String {
        let id = &booking.id;
        let number = room.map(|r| r.number.as_str()).unwrap_or("-");
        match &self.params {
            ConstraintParams::ValidDateRange => format!(
                "booking {} checks in on {} but checks out on {}",
                id, booking.check_in, booking.check_out
            ),
            ConstraintParams::BookingUnallocated => {
                format!("booking {} has no room", id)
            }
            ConstraintParams::RoomTypeMatch => match (booking.requested_room_type, room) {
                (Some(t), Some(r)) => format!(
                    "booking {} requested a {} room but room {} is {}",
                    id, t, r.number, r.room_type
                ),
                (Some(t), None) => format!(
                    "room type unavailable: no {} room exists for booking {}",
                    t, id
                ),
                (None, _) => format!("booking {} has no room type request", id),
            },
            ConstraintParams::AccessibilityRequired => format!(
                "booking {} requires an accessible room but room {} is not",
                id, number
            ),
            ConstraintParams::VipBestRoom(_) => {
                format!("VIP booking {} placed in room {}", id, number)
            }
            ConstraintParams::ViewPreference => {
                format!("room {} has the view booking {} asked for", number, id)
            }
            ConstraintParams::HighFloorPreference(_) => {
                format!("room {} is a high floor for booking {}", number, id)
            }
            ConstraintParams::QuietZonePreference(_) => {
                format!("room {} is in a quiet zone for booking {}", number, id)
            }
            ConstraintParams::PetFriendlyMatch => {
                format!("room {} accepts the pets of booking {}", number, id)
            }
            ConstraintParams::SmokingPreferenceMatch => format!(
                "room {} smoking policy matches booking {}",
                number, id
            ),
            ConstraintParams::BudgetFit(_) => {
                format!("room {} exceeds the budget of booking {}", number, id)
            }
            ConstraintParams::LoyaltyTierReward(_) => format!(
                "room {} upgrades tier {} guest of booking {}",
                number, booking.guest.loyalty_tier, id
            ),
            ConstraintParams::NoDoubleBooking | ConstraintParams::EarlyLateReadiness => {
                format!("booking {} in room {}", id, number)
            }
        }
    }
}

// price > budget * (100 + tolerance) / 100, without dividing.
fn exceeds_budget(price: Decimal, budget: Decimal, tolerance_percent: u32) -> bool {
    let limit = budget.checked_mul(Decimal::from(100 + u64::from(tolerance_percent)));
    let scaled_price = price.checked_mul(Decimal::ONE_HUNDRED);
    match (scaled_price, limit) {
        (Some(p), Some(l)) => p > l,
        // Only absurd amounts overflow; compare them unscaled.
        _ => price > budget,
    }
}
