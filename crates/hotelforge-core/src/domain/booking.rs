//! Bookings and their stay dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Guest, Room, RoomType};

/// A half-open stay interval `[check_in, check_out)`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotelforge_core::DateRange;
///
/// let d = |day| NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
/// let first = DateRange::new(d(1), d(4));
/// let second = DateRange::new(d(4), d(6));
///
/// // Checking out and checking in on the same day does not overlap.
/// assert!(!first.overlaps(&second));
/// assert_eq!(first.nights(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    pub const fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Non-empty with check-in strictly before check-out.
    pub fn is_valid(&self) -> bool {
        self.check_in < self.check_out
    }

    /// Empty or inverted ranges never overlap anything.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.check_in < other.check_out
            && other.check_in < self.check_out
    }

    /// Number of nights, zero for an invalid range.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}

/// A guest's stay request and the solver's answer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestBooking {
    pub id: String,
    pub guest: Guest,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub requested_room_type: Option<RoomType>,
    #[serde(default)]
    pub early_checkin: bool,
    #[serde(default)]
    pub late_checkout: bool,
    /// Index into the room list of the solve call. `None` until assigned.
    #[serde(default, skip_serializing)]
    pub assigned_room: Option<usize>,
}

impl GuestBooking {
    pub fn new(
        id: impl Into<String>,
        guest: Guest,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            guest,
            check_in,
            check_out,
            requested_room_type: None,
            early_checkin: false,
            late_checkout: false,
            assigned_room: None,
        }
    }

    pub fn with_requested_room_type(mut self, room_type: RoomType) -> Self {
        self.requested_room_type = Some(room_type);
        self
    }

    pub fn with_early_checkin(mut self, early_checkin: bool) -> Self {
        self.early_checkin = early_checkin;
        self
    }

    pub fn with_late_checkout(mut self, late_checkout: bool) -> Self {
        self.late_checkout = late_checkout;
        self
    }

    pub fn with_assigned_room(mut self, room_idx: Option<usize>) -> Self {
        self.assigned_room = room_idx;
        self
    }

    #[inline]
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.check_in, self.check_out)
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.assigned_room.is_some()
    }

    pub fn overlaps(&self, other: &GuestBooking) -> bool {
        self.date_range().overlaps(&other.date_range())
    }

    /// True when no room type was requested or the room has the requested type.
    pub fn accepts_room_type(&self, room: &Room) -> bool {
        self.requested_room_type
            .map_or(true, |requested| requested == room.room_type)
    }
}
