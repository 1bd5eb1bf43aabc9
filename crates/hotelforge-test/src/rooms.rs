//! Room builders.

use hotelforge_core::{Room, RoomType, View};
use rust_decimal::Decimal;

/// Whole-currency price per night.
pub fn price(amount: i64) -> Decimal {
    Decimal::from(amount)
}

fn room(id: &str, room_type: RoomType, floor: i32) -> Room {
    Room::new(id, id.trim_start_matches("room-"))
        .with_type(room_type)
        .with_floor(floor)
        .with_distance_from_elevator(5)
}

/// A courtyard-facing standard room at 120 per night.
pub fn standard_room(id: &str, floor: i32) -> Room {
    room(id, RoomType::Standard, floor)
        .with_view(View::Courtyard)
        .with_price(price(120))
}

/// A city-view deluxe room at 200 per night.
pub fn deluxe_room(id: &str, floor: i32) -> Room {
    room(id, RoomType::Deluxe, floor)
        .with_view(View::City)
        .with_price(price(200))
}

/// An ocean-view suite at 450 per night.
pub fn suite_room(id: &str, floor: i32) -> Room {
    room(id, RoomType::Suite, floor)
        .with_view(View::Ocean)
        .with_price(price(450))
}
