//! Shared test fixtures for HotelForge crates.
//!
//! This crate provides rooms, guests and bookings for testing. It depends
//! only on `hotelforge-core` so every other crate can use it as a
//! dev-dependency.
//!
//! - [`dates`] - fixed calendar helpers
//! - [`rooms`] - room builders
//! - [`bookings`] - guest and booking builders
//! - [`hotel`] - a small sample hotel with a realistic booking mix
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! hotelforge-test = { workspace = true }
//! ```

pub mod bookings;
pub mod dates;
pub mod hotel;
pub mod rooms;

pub use bookings::{booking, guest};
pub use dates::date;
pub use hotel::{overbooked, sample_bookings, sample_rooms};
pub use rooms::{deluxe_room, price, standard_room, suite_room};
