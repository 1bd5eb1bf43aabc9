use hotelforge_core::{GuestBooking, HardSoftScore};
use hotelforge_test::{booking, sample_bookings, sample_rooms, standard_room};

use super::*;
use crate::catalog::{resolve_constraints, InMemoryConstraintSource};

fn calculator(rooms: Vec<hotelforge_core::Room>) -> ScoreCalculator {
    let source = InMemoryConstraintSource::builtin();
    ScoreCalculator::new(resolve_constraints(&source, "t").unwrap(), rooms)
}

fn sample_director() -> AllocationScoreDirector {
    let mut bookings = sample_bookings();
    for (i, b) in bookings.iter_mut().enumerate() {
        b.assigned_room = if i % 5 == 4 { None } else { Some(i % 8) };
    }
    AllocationScoreDirector::new(calculator(sample_rooms()), bookings)
}

#[test]
fn test_initial_score_matches_full_score() {
    let director = sample_director();
    assert_eq!(director.score(), director.calculate_full_score());
    assert_eq!(director.booking_count(), 12);
    assert_eq!(director.room_count(), 8);
}

#[test]
fn test_every_reassignment_matches_full_rescore() {
    let mut director = sample_director();
    for b in 0..director.booking_count() {
        for room in (0..director.room_count()).map(Some).chain([None]) {
            let before = director.score();
            let delta = director.do_move(&[(b, room)]);
            assert_eq!(
                director.score(),
                director.calculate_full_score(),
                "booking {} to {:?}",
                b,
                room
            );
            assert_eq!(director.score(), before + delta);

            assert!(director.undo_move());
            assert_eq!(director.score(), before);
            assert_eq!(director.calculate_full_score(), before);
        }
    }
}

#[test]
fn test_two_change_moves_match_full_rescore() {
    let mut director = sample_director();
    let assignment = director.assignment();
    for a in 0..director.booking_count() {
        for b in (a + 1)..director.booking_count() {
            let before = director.score();
            director.do_move(&[(a, assignment[b]), (b, assignment[a])]);
            assert_eq!(
                director.score(),
                director.calculate_full_score(),
                "swap {} and {}",
                a,
                b
            );
            director.undo_move();
            assert_eq!(director.score(), before);
        }
    }
    assert_eq!(director.assignment(), assignment);
}

#[test]
fn test_nested_undo_restores_in_order() {
    let mut director = sample_director();
    let start = director.score();
    let assignment = director.assignment();

    director.do_move(&[(0, Some(6))]);
    let mid = director.score();
    director.do_move(&[(1, None), (2, Some(0))]);

    assert!(director.undo_move());
    assert_eq!(director.score(), mid);
    assert!(director.undo_move());
    assert_eq!(director.score(), start);
    assert!(!director.undo_move());
    assert_eq!(director.assignment(), assignment);
    assert_eq!(director.index(), &RoomIndex::build(8, director.bookings()));
}

#[test]
fn test_commit_drops_undo_history() {
    let mut director = sample_director();
    director.do_move(&[(3, Some(2))]);
    director.commit();
    assert!(!director.undo_move());

    let delta = director.assign(4, Some(5));
    assert!(!director.undo_move());
    assert_eq!(director.bookings()[4].assigned_room, Some(5));
    assert_eq!(director.score(), director.calculate_full_score());
    assert_ne!(delta, HardSoftScore::ZERO);
}

#[test]
fn test_score_delta_equals_difference() {
    let calc = calculator(sample_rooms());
    let before: Vec<GuestBooking> = sample_bookings()
        .into_iter()
        .enumerate()
        .map(|(i, b)| b.with_assigned_room(Some(i % 8)))
        .collect();
    let mut after = before.clone();
    after[0].assigned_room = Some(6);
    after[6].assigned_room = None;
    after[9].assigned_room = Some(0);

    let delta = calc.score_delta(&before, &after, &[9, 0, 6, 0]);
    assert_eq!(delta, calc.score(&after) - calc.score(&before));
}

#[test]
fn test_fits_checks_type_and_dates() {
    let rooms = vec![standard_room("r1", 1), standard_room("r2", 1)];
    let bookings = vec![
        booking("B1", 1, 4).with_assigned_room(Some(0)),
        booking("B2", 3, 6),
        booking("B3", 4, 6),
        booking("B4", 1, 2).with_requested_room_type(hotelforge_core::RoomType::Suite),
    ];
    let director = AllocationScoreDirector::new(calculator(rooms), bookings);

    assert!(!director.fits(1, 0, None));
    assert!(director.fits(1, 0, Some(0)));
    assert!(director.fits(2, 0, None));
    assert!(director.fits(1, 1, None));
    assert!(!director.fits(3, 1, None));
    assert!(!director.fits(1, 7, None));
    // A booking never blocks itself.
    assert!(director.is_room_free(0, 0, None));
}

#[test]
fn test_reset_assignment_rescores() {
    let mut director = sample_director();
    director.do_move(&[(0, None)]);
    let all_unassigned = vec![None; director.booking_count()];
    director.reset_assignment(&all_unassigned);

    assert!(!director.undo_move());
    assert_eq!(director.score(), director.calculate_full_score());
    assert_eq!(director.score().hard(), -12);
    assert!(director.index().occupants(0).is_empty());
}

#[test]
fn test_index_occupants_stay_sorted() {
    let (rooms, bookings) = hotelforge_test::overbooked(5, 1);
    let mut director = AllocationScoreDirector::new(calculator(rooms), bookings);
    for b in [3, 0, 4, 1] {
        director.assign(b, Some(0));
    }
    assert_eq!(director.index().occupants(0), &[0, 1, 3, 4]);
    director.assign(1, None);
    assert_eq!(director.index().occupants(0), &[0, 3, 4]);
    // Three bookings with the same stay in one room: three clashing pairs
    // plus two unassigned bookings.
    assert_eq!(director.score().hard(), -5);
    assert_eq!(director.score(), director.calculate_full_score());
}
