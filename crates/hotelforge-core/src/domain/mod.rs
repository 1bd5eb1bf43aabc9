//! Domain model for hotel room allocation.
//!
//! Rooms and guests are immutable for the duration of a solve call. A
//! [`GuestBooking`] carries the single planning variable, `assigned_room`,
//! stored as an index into the room list of the call.

mod booking;
mod guest;
mod room;
mod solution;

#[cfg(test)]
mod tests;

pub use booking::{DateRange, GuestBooking};
pub use guest::{Guest, GuestPreferences};
pub use room::{Room, RoomType, View};
pub use solution::Solution;
