//! A small sample hotel.

use hotelforge_core::{GuestBooking, GuestPreferences, Room, RoomType, View};

use crate::bookings::booking;
use crate::rooms::{deluxe_room, price, standard_room, suite_room};

/// Eight rooms over four floors with a mix of types and features.
pub fn sample_rooms() -> Vec<Room> {
    vec![
        standard_room("room-101", 1).with_accessible(true),
        standard_room("room-102", 1).with_smoking_allowed(true),
        standard_room("room-201", 2).with_pet_friendly(true),
        deluxe_room("room-301", 3).with_distance_from_elevator(15),
        deluxe_room("room-302", 3).with_view(View::Garden).with_pet_friendly(true),
        deluxe_room("room-501", 5).with_view(View::Ocean),
        suite_room("room-601", 6).with_distance_from_elevator(20),
        suite_room("room-602", 6).with_view(View::City).with_accessible(true),
    ]
}

/// Twelve bookings over two weeks with overlapping stays and varied guests.
pub fn sample_bookings() -> Vec<GuestBooking> {
    let mut bookings = vec![
        booking("B01", 1, 4),
        booking("B02", 2, 5),
        booking("B03", 3, 7),
        booking("B04", 4, 6).with_early_checkin(true),
        booking("B05", 5, 9).with_late_checkout(true),
        booking("B06", 1, 3).with_requested_room_type(RoomType::Suite),
        booking("B07", 3, 6).with_requested_room_type(RoomType::Deluxe),
        booking("B08", 6, 10),
        booking("B09", 7, 12).with_early_checkin(true),
        booking("B10", 9, 11),
        booking("B11", 2, 8),
        booking("B12", 10, 14).with_late_checkout(true),
    ];

    bookings[0].guest.vip = true;
    bookings[0].guest.preferences.view = Some(View::Ocean);
    bookings[1].guest.loyalty_tier = 2;
    bookings[1].guest.preferences.high_floor = true;
    bookings[2].guest.preferences = GuestPreferences {
        accessible: true,
        ..GuestPreferences::default()
    };
    bookings[3].guest.preferences.pets = true;
    bookings[4].guest.preferences.smoking = true;
    bookings[5].guest.vip = true;
    bookings[5].guest.loyalty_tier = 3;
    bookings[6].guest.budget = Some(price(180));
    bookings[7].guest.preferences.quiet = true;
    bookings[8].guest.loyalty_tier = 1;
    bookings[8].guest.preferences.view = Some(View::City);
    bookings[10].guest.budget = Some(price(150));
    bookings[11].guest.vip = true;
    bookings
}

/// `booking_count` bookings with identical stays competing for
/// `room_count` standard rooms.
pub fn overbooked(booking_count: usize, room_count: usize) -> (Vec<Room>, Vec<GuestBooking>) {
    let rooms = (0..room_count)
        .map(|i| standard_room(&format!("room-{}", 101 + i), 1))
        .collect();
    let bookings = (0..booking_count)
        .map(|i| booking(&format!("B{}", i + 1), 1, 4))
        .collect();
    (rooms, bookings)
}
