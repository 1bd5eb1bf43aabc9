use hotelforge_core::{GuestBooking, Room, RoomType};
use hotelforge_scoring::{
    resolve_constraints, AllocationScoreDirector, InMemoryConstraintSource, ScoreCalculator,
};
use hotelforge_test::{booking, deluxe_room, sample_bookings, sample_rooms, standard_room};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

fn director(rooms: Vec<Room>, bookings: Vec<GuestBooking>) -> AllocationScoreDirector {
    let source = InMemoryConstraintSource::builtin();
    let calculator = ScoreCalculator::new(resolve_constraints(&source, "t").unwrap(), rooms);
    AllocationScoreDirector::new(calculator, bookings)
}

// B1 in 101 and B2 in 102 on the same dates; B3 unassigned, later dates.
fn two_room_director() -> AllocationScoreDirector {
    director(
        vec![standard_room("room-101", 1), standard_room("room-102", 1)],
        vec![
            booking("B1", 1, 4).with_assigned_room(Some(0)),
            booking("B2", 1, 4).with_assigned_room(Some(1)),
            booking("B3", 5, 7),
        ],
    )
}

#[test]
fn test_reassign_is_doable() {
    let d = two_room_director();
    // Same room.
    assert!(!AllocationMove::Reassign { booking: 0, room: 0 }.is_doable(&d));
    // Occupied for those dates.
    assert!(!AllocationMove::Reassign { booking: 0, room: 1 }.is_doable(&d));
    assert!(AllocationMove::Reassign { booking: 2, room: 1 }.is_doable(&d));
}

#[test]
fn test_reassign_respects_requested_type() {
    let d = director(
        vec![standard_room("room-101", 1), deluxe_room("room-301", 3)],
        vec![booking("B1", 1, 3).with_requested_room_type(RoomType::Deluxe)],
    );
    assert!(!AllocationMove::Reassign { booking: 0, room: 0 }.is_doable(&d));
    assert!(AllocationMove::Reassign { booking: 0, room: 1 }.is_doable(&d));
}

#[test]
fn test_swap_is_doable() {
    let d = two_room_director();
    assert!(AllocationMove::Swap { left: 0, right: 1 }.is_doable(&d));
    // Unassigned B3 takes over room 101; B1 is left unassigned.
    assert!(AllocationMove::Swap { left: 0, right: 2 }.is_doable(&d));
    assert!(!AllocationMove::Swap { left: 1, right: 1 }.is_doable(&d));

    let none = director(
        vec![standard_room("room-101", 1)],
        vec![booking("B1", 1, 3), booking("B2", 4, 6)],
    );
    assert!(!AllocationMove::Swap { left: 0, right: 1 }.is_doable(&none));
}

#[test]
fn test_swap_requires_date_fit_in_other_room() {
    // B2 shares room 102 with B3; B1 cannot move in, although B2 could leave.
    let d = director(
        vec![standard_room("room-101", 1), standard_room("room-102", 1)],
        vec![
            booking("B1", 1, 6).with_assigned_room(Some(0)),
            booking("B2", 1, 3).with_assigned_room(Some(1)),
            booking("B3", 4, 6).with_assigned_room(Some(1)),
        ],
    );
    assert!(!AllocationMove::Swap { left: 0, right: 1 }.is_doable(&d));
}

#[test]
fn test_do_move_changes_and_undo() {
    let mut d = two_room_director();
    let before = d.score();
    let m = AllocationMove::Swap { left: 0, right: 2 };
    assert_eq!(m.changes(&d).as_slice(), &[(0, None), (2, Some(0))]);

    let delta = m.do_move(&mut d);
    assert_eq!(d.assignment(), vec![None, Some(1), Some(0)]);
    assert_eq!(d.score(), before + delta);
    assert_eq!(d.score(), d.calculate_full_score());

    assert!(d.undo_move());
    assert_eq!(d.assignment(), vec![Some(0), Some(1), None]);
    assert_eq!(d.score(), before);
}

#[test]
fn test_display() {
    assert_eq!(
        AllocationMove::Reassign { booking: 3, room: 1 }.to_string(),
        "reassign(3 -> 1)"
    );
    assert_eq!(AllocationMove::Swap { left: 0, right: 2 }.to_string(), "swap(0 <-> 2)");
    assert!(AllocationMove::Swap { left: 0, right: 2 }.is_swap());
}

#[test]
fn test_selector_candidates_by_type() {
    let d = director(sample_rooms(), sample_bookings());
    let selector = MoveSelector::new(&d, 0.5);
    // B06 asks for a suite, B07 for a deluxe room, B01 takes anything.
    assert_eq!(selector.candidates(5), &[6, 7]);
    assert_eq!(selector.candidates(6), &[3, 4, 5]);
    assert_eq!(selector.candidates(0).len(), 8);
    assert!(selector.candidates(99).is_empty());
}

#[test]
fn test_sampled_moves_are_doable() {
    let mut bookings = sample_bookings();
    for (i, b) in bookings.iter_mut().enumerate().take(4) {
        b.assigned_room = Some(i);
    }
    let d = director(sample_rooms(), bookings);
    let selector = MoveSelector::new(&d, 0.5);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let moves = selector.sample(&d, &mut rng, 32);
    assert!(!moves.is_empty());
    assert!(moves.len() <= 32);
    assert!(moves.iter().all(|m| m.is_doable(&d)));
}

#[test]
fn test_sampling_is_deterministic() {
    let d = director(sample_rooms(), sample_bookings());
    let selector = MoveSelector::new(&d, 0.3);
    let a = selector.sample(&d, &mut ChaCha8Rng::seed_from_u64(5), 16);
    let b = selector.sample(&d, &mut ChaCha8Rng::seed_from_u64(5), 16);
    assert_eq!(a, b);
}

#[test]
fn test_reassign_only_selector() {
    let d = two_room_director();
    let selector = MoveSelector::new(&d, 0.0);
    let moves = selector.sample(&d, &mut ChaCha8Rng::seed_from_u64(1), 8);
    assert!(moves.iter().all(|m| !m.is_swap()));
    // Only B3 can move: into either room.
    assert!(moves
        .iter()
        .all(|m| matches!(m, AllocationMove::Reassign { booking: 2, .. })));
}

#[test]
fn test_nan_swap_probability_samples_reassigns() {
    let d = two_room_director();
    let selector = MoveSelector::new(&d, f64::NAN);
    let moves = selector.sample(&d, &mut ChaCha8Rng::seed_from_u64(1), 8);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| !m.is_swap()));
}
