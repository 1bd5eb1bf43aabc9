//! Booking placement order.

use std::cmp::{Ordering, Reverse};

use hotelforge_core::GuestBooking;
use hotelforge_scoring::AllocationScoreDirector;

/// Queues unassigned bookings by priority: VIP guests first, then loyalty
/// tier descending, then check-in date ascending, then booking id.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueuedBookingPlacer;

impl QueuedBookingPlacer {
    pub fn new() -> Self {
        Self
    }

    /// Indices of the bookings still to place, in placement order.
    pub fn placements(&self, director: &AllocationScoreDirector) -> Vec<usize> {
        let bookings = director.bookings();
        let mut queue: Vec<usize> = (0..bookings.len())
            .filter(|&i| !bookings[i].is_assigned())
            .collect();
        queue.sort_by(|&a, &b| priority_order(&bookings[a], &bookings[b]));
        queue
    }
}

fn priority_order(a: &GuestBooking, b: &GuestBooking) -> Ordering {
    let key = |x: &GuestBooking| (Reverse(x.guest.vip), Reverse(x.guest.loyalty_tier), x.check_in);
    key(a).cmp(&key(b)).then_with(|| a.id.cmp(&b.id))
}
