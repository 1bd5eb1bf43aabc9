//! Guest and booking builders.

use hotelforge_core::{Guest, GuestBooking};

use crate::dates::date;

/// A guest with no preferences.
pub fn guest(id: &str) -> Guest {
    Guest::new(id, format!("Guest {}", id))
}

/// A booking from `check_in` to `check_out` (days in June) for guest `g-<id>`.
pub fn booking(id: &str, check_in: u32, check_out: u32) -> GuestBooking {
    GuestBooking::new(
        id,
        guest(&format!("g-{}", id)),
        date(check_in),
        date(check_out),
    )
}
