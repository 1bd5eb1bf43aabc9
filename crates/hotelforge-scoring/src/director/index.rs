use hotelforge_core::GuestBooking;
use smallvec::SmallVec;

/// Bookings currently staying in each room, kept sorted by booking index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomIndex {
    occupants: Vec<SmallVec<[usize; 8]>>,
}

impl RoomIndex {
    /// Builds the index; bookings pointing past `room_count` are ignored.
    pub fn build(room_count: usize, bookings: &[GuestBooking]) -> Self {
        let mut occupants = vec![SmallVec::new(); room_count];
        for (i, booking) in bookings.iter().enumerate() {
            if let Some(slot) = booking.assigned_room.and_then(|r| occupants.get_mut(r)) {
                slot.push(i);
            }
        }
        Self { occupants }
    }

    /// Booking indices assigned to `room`, ascending.
    pub fn occupants(&self, room: usize) -> &[usize] {
        self.occupants
            .get(room)
            .map(|o| o.as_slice())
            .unwrap_or(&[])
    }

    pub fn room_count(&self) -> usize {
        self.occupants.len()
    }

    /// True when no occupant of `room` other than `booking` and `ignore`
    /// overlaps `booking`'s stay.
    pub fn is_free_for(
        &self,
        room: usize,
        bookings: &[GuestBooking],
        booking: usize,
        ignore: Option<usize>,
    ) -> bool {
        let stay = bookings[booking].date_range();
        self.occupants(room).iter().all(|&j| {
            j == booking || Some(j) == ignore || !bookings[j].date_range().overlaps(&stay)
        })
    }

    pub(crate) fn insert(&mut self, room: usize, booking: usize) {
        if let Some(slot) = self.occupants.get_mut(room) {
            if let Err(pos) = slot.binary_search(&booking) {
                slot.insert(pos, booking);
            }
        }
    }

    pub(crate) fn remove(&mut self, room: usize, booking: usize) {
        if let Some(slot) = self.occupants.get_mut(room) {
            if let Ok(pos) = slot.binary_search(&booking) {
                slot.remove(pos);
            }
        }
    }
}
