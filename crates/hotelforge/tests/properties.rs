//! Invariants every returned solution satisfies, checked over several
//! seeds and hotels.

use std::sync::Arc;
use std::time::Duration;

use hotelforge::prelude::*;
use hotelforge::{ScoreCalculator, WorkerCount};
use hotelforge_scoring::AllocationScoreDirector;
use hotelforge_solver::MoveSelector;
use hotelforge_test::{
    booking, deluxe_room, price, sample_bookings, sample_rooms, standard_room, suite_room,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SEEDS: [u64; 4] = [0, 1, 42, 2026];

// Twenty rooms, sixty bookings over three weeks: more demand than supply on
// busy nights, with a spread of guest preferences.
fn busy_hotel() -> (Vec<Room>, Vec<GuestBooking>) {
    let mut rooms = Vec::new();
    for i in 0..10 {
        rooms.push(
            standard_room(&format!("room-1{:02}", i), 1 + i % 3).with_smoking_allowed(i % 4 == 0),
        );
    }
    for i in 0..6 {
        rooms.push(
            deluxe_room(&format!("room-4{:02}", i), 4 + i % 2)
                .with_pet_friendly(i % 2 == 0)
                .with_distance_from_elevator(5 + 5 * i as u32),
        );
    }
    for i in 0..4 {
        rooms.push(suite_room(&format!("room-7{:02}", i), 7).with_accessible(i == 0));
    }

    let bookings = (0..60u32)
        .map(|i| {
            let check_in = 1 + (i * 7) % 18;
            let nights = 1 + (i * 5) % 4;
            let mut b = booking(&format!("B{:02}", i), check_in, check_in + nights)
                .with_early_checkin(i % 6 == 0)
                .with_late_checkout(i % 9 == 0);
            if i % 11 == 0 {
                b = b.with_requested_room_type(RoomType::Suite);
            } else if i % 7 == 0 {
                b = b.with_requested_room_type(RoomType::Deluxe);
            }
            b.guest.vip = i % 13 == 0;
            b.guest.loyalty_tier = (i % 4) as u8;
            b.guest.preferences.high_floor = i % 3 == 0;
            b.guest.preferences.quiet = i % 5 == 0;
            b.guest.preferences.pets = i % 8 == 0;
            b.guest.preferences.smoking = i % 10 == 0;
            b.guest.preferences.accessible = i % 29 == 0;
            if i % 4 == 1 {
                b.guest.budget = Some(price(150));
            }
            b
        })
        .collect();
    (rooms, bookings)
}

fn config(seed: u64) -> SolverConfig {
    SolverConfig::default()
        .with_random_seed(seed)
        .with_unimproved_step_count_limit(250)
}

fn solve(
    config: SolverConfig,
    rooms: Vec<Room>,
    bookings: Vec<GuestBooking>,
) -> hotelforge::SolveResult {
    let solver = Solver::new(Arc::new(InMemoryConstraintSource::builtin())).with_config(config);
    let problem = AllocationProblem::new("hotel-1", rooms, bookings)
        .with_time_limit(Duration::from_secs(120));
    solver.solve(problem).unwrap()
}

fn hotels() -> Vec<(Vec<Room>, Vec<GuestBooking>)> {
    vec![(sample_rooms(), sample_bookings()), busy_hotel()]
}

#[test]
fn test_matches_sum_to_score() {
    for (rooms, bookings) in hotels() {
        for seed in SEEDS {
            let solution = solve(config(seed), rooms.clone(), bookings.clone()).solution;
            assert_eq!(solution.matches_total(), solution.score, "seed {}", seed);
        }
    }
}

#[test]
fn test_no_room_holds_overlapping_stays() {
    for (rooms, bookings) in hotels() {
        for seed in SEEDS {
            let solution = solve(config(seed), rooms.clone(), bookings.clone()).solution;
            for (i, a) in solution.bookings.iter().enumerate() {
                for b in &solution.bookings[i + 1..] {
                    if a.assigned_room.is_some() && a.assigned_room == b.assigned_room {
                        assert!(!a.date_range().overlaps(&b.date_range()), "{} / {}", a.id, b.id);
                    }
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_solution() {
    let (rooms, bookings) = busy_hotel();
    for seed in SEEDS {
        let a = solve(config(seed), rooms.clone(), bookings.clone()).solution;
        let b = solve(config(seed), rooms.clone(), bookings.clone()).solution;
        assert_eq!(a.bookings, b.bookings);
        assert_eq!(a.score, b.score);
        assert_eq!(a.constraint_matches, b.constraint_matches);
    }

    let parallel = config(7).with_worker_count(WorkerCount::Count(2));
    let a = solve(parallel.clone(), rooms.clone(), bookings.clone()).solution;
    let b = solve(parallel, rooms, bookings).solution;
    assert_eq!(a.assignment(), b.assignment());
}

#[test]
fn test_search_never_regresses_hard_score() {
    for (rooms, bookings) in hotels() {
        for seed in SEEDS {
            let result = solve(config(seed), rooms.clone(), bookings.clone());
            assert!(
                result.solution.score.hard() >= result.statistics.construction_score.hard(),
                "seed {}",
                seed
            );
            assert!(result.solution.score >= result.statistics.construction_score);
        }
    }
}

#[test]
fn test_busy_hotel_leaves_overflow_unallocated() {
    let solution = solve(config(0), busy_hotel().0, busy_hotel().1).solution;
    let unassigned = solution.unassigned_bookings().count() as i64;
    let unallocated = solution
        .constraint_matches
        .iter()
        .filter(|m| m.constraint_code == "booking_unallocated")
        .count() as i64;
    assert_eq!(unassigned, unallocated);
    assert!(solution.score.hard() <= -unassigned);
}

#[test]
fn test_incremental_delta_matches_full_rescore_for_sampled_moves() {
    let (rooms, bookings) = busy_hotel();
    let source = InMemoryConstraintSource::builtin();
    let solver = Solver::new(Arc::new(source));
    let constraints = solver.resolver().resolve("hotel-1").unwrap();
    let calculator = ScoreCalculator::new(constraints, rooms);

    let mut seeded = bookings;
    for (i, b) in seeded.iter_mut().enumerate() {
        b.assigned_room = if i % 3 == 0 { None } else { Some(i % 20) };
    }
    let mut director = AllocationScoreDirector::new(calculator.clone(), seeded);
    let selector = MoveSelector::new(&director, 0.5);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..200 {
        let moves = selector.sample(&director, &mut rng, 4);
        let Some(m) = moves.first() else {
            continue;
        };
        let before = director.bookings().to_vec();
        let full_before = calculator.score(&before);
        let changed: Vec<usize> = m.changes(&director).iter().map(|&(b, _)| b).collect();

        let delta = m.do_move(&mut director);
        director.commit();
        let after = director.bookings().to_vec();

        assert_eq!(calculator.score(&after) - full_before, delta, "{}", m);
        assert_eq!(calculator.score_delta(&before, &after, &changed), delta, "{}", m);
        assert_eq!(director.score(), calculator.score(&after));
    }
}
