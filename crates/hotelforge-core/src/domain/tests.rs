use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::*;
use crate::constraint::{ConstraintKind, ConstraintMatch, Justification};
use crate::score::HardSoftScore;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, day).unwrap()
}

fn booking(id: &str, from: u32, to: u32) -> GuestBooking {
    GuestBooking::new(id, Guest::new(format!("g-{}", id), "Guest"), d(from), d(to))
}

#[test]
fn test_date_range_half_open() {
    let a = DateRange::new(d(1), d(3));
    assert!(a.overlaps(&DateRange::new(d(2), d(5))));
    assert!(!a.overlaps(&DateRange::new(d(3), d(5))));
    assert!(!a.overlaps(&DateRange::new(d(10), d(12))));
    assert!(a.is_valid());
    assert!(!DateRange::new(d(3), d(3)).is_valid());
    assert_eq!(DateRange::new(d(5), d(3)).nights(), 0);
}

#[test]
fn test_room_type_rank_and_upgrades() {
    assert!(RoomType::Suite.rank() > RoomType::Deluxe.rank());
    assert!(RoomType::Deluxe.is_upgrade_for_tier(1));
    assert!(!RoomType::Suite.is_upgrade_for_tier(1));
    assert!(RoomType::Suite.is_upgrade_for_tier(2));
    assert!(!RoomType::Deluxe.is_upgrade_for_tier(3));
    assert!(!RoomType::Standard.is_upgrade_for_tier(0));
}

#[test]
fn test_room_type_and_view_parse_case_insensitive() {
    let t: RoomType = serde_json::from_str("\"SUITE\"").unwrap();
    assert_eq!(t, RoomType::Suite);
    let v: View = serde_json::from_str("\"Ocean\"").unwrap();
    assert_eq!(v, View::Ocean);
    assert!(serde_json::from_str::<View>("\"mountain\"").is_err());
    assert_eq!(serde_json::to_string(&RoomType::Deluxe).unwrap(), "\"deluxe\"");
}

#[test]
fn test_room_deserializes_numeric_number() {
    let json = r#"{
        "id": "r1", "number": 101, "type": "deluxe", "floor": 4, "view": "city",
        "accessible": true, "smokingAllowed": false, "petFriendly": true,
        "distanceFromElevator": 12, "pricePerNight": 180.50
    }"#;
    let room: Room = serde_json::from_str(json).unwrap();
    assert_eq!(room.number, "101");
    assert_eq!(room.room_type, RoomType::Deluxe);
    assert!(room.pet_friendly);
    assert_eq!(room.price_per_night, Decimal::new(18050, 2));
}

#[test]
fn test_quality_rank() {
    let room = Room::new("r", "1").with_type(RoomType::Suite).with_view(View::Ocean);
    assert_eq!(room.quality_rank(View::Ocean), 3);
    assert_eq!(room.quality_rank(View::City), 2);
}

#[test]
fn test_accepts_room_type() {
    let deluxe = Room::new("r", "1").with_type(RoomType::Deluxe);
    assert!(booking("b", 1, 2).accepts_room_type(&deluxe));
    assert!(booking("b", 1, 2)
        .with_requested_room_type(RoomType::Deluxe)
        .accepts_room_type(&deluxe));
    assert!(!booking("b", 1, 2)
        .with_requested_room_type(RoomType::Suite)
        .accepts_room_type(&deluxe));
}

#[test]
fn test_solution_helpers() {
    let rooms = vec![Room::new("r1", "101"), Room::new("r2", "102")];
    let bookings = vec![
        booking("b1", 1, 4).with_assigned_room(Some(0)),
        booking("b2", 3, 5).with_assigned_room(Some(0)),
        booking("b3", 1, 4).with_assigned_room(Some(1)),
        booking("b4", 1, 4),
    ];
    let mut solution = Solution::new("hotel", rooms, bookings);
    solution.constraint_matches = vec![
        ConstraintMatch::new(
            "booking_unallocated",
            ConstraintKind::Hard,
            HardSoftScore::of_hard(-1),
            Justification::new(vec!["b4".into()], vec![], "unallocated"),
        ),
        ConstraintMatch::new(
            "view_preference",
            ConstraintKind::Soft,
            HardSoftScore::of_soft(50),
            Justification::new(vec!["b3".into()], vec!["r2".into()], "view"),
        ),
    ];
    solution.score = solution.matches_total();

    assert_eq!(solution.score, HardSoftScore::of(-1, 50));
    assert!(!solution.is_feasible());
    assert_eq!(solution.overlapping_pairs(), vec![(0, 1)]);
    assert_eq!(solution.assigned_room_of("b3").map(|r| r.id.as_str()), Some("r2"));
    assert_eq!(solution.unassigned_bookings().count(), 1);
    assert_eq!(solution.constraint_violations().count(), 1);
    assert_eq!(solution.assignment(), vec![Some(0), Some(0), Some(1), None]);
}
