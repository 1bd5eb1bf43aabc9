//! Full and delta scoring against an ordered list of active constraints.

use std::sync::Arc;

use hotelforge_core::{ConstraintMatch, GuestBooking, HardSoftScore, Justification, Room};
use smallvec::SmallVec;

use crate::analysis::{ConstraintAnalysis, ScoreExplanation};
use crate::constraint::{ActiveConstraint, ConstraintScope, EvalContext, MatchSink};
use crate::director::RoomIndex;

/// Scores allocations for one solve call.
///
/// Cheap to clone: constraints and rooms are shared. `score_full` is the
/// ground truth every incremental computation must agree with.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    constraints: Arc<[ActiveConstraint]>,
    rooms: Arc<[Room]>,
    type_available: [bool; 3],
}

impl ScoreCalculator {
    pub fn new(
        constraints: impl Into<Arc<[ActiveConstraint]>>,
        rooms: impl Into<Arc<[Room]>>,
    ) -> Self {
        let rooms = rooms.into();
        let mut type_available = [false; 3];
        for room in rooms.iter() {
            type_available[room.room_type.rank() as usize] = true;
        }
        Self {
            constraints: constraints.into(),
            rooms,
            type_available,
        }
    }

    pub fn constraints(&self) -> &[ActiveConstraint] {
        &self.constraints
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Scores every booking and returns one explained match per constraint hit.
    ///
    /// The matches always sum exactly to the returned score.
    pub fn score_full(&self, bookings: &[GuestBooking]) -> (HardSoftScore, Vec<ConstraintMatch>) {
        let index = RoomIndex::build(self.room_count(), bookings);
        let mut sink = CollectSink::default();
        self.evaluate_all(bookings, &index, &mut sink);
        let score = sink.matches.iter().map(|m| m.score).sum();
        (score, sink.matches)
    }

    /// Scores every booking without collecting matches.
    pub fn score(&self, bookings: &[GuestBooking]) -> HardSoftScore {
        let index = RoomIndex::build(self.room_count(), bookings);
        self.score_indexed(bookings, &index)
    }

    pub(crate) fn score_indexed(&self, bookings: &[GuestBooking], index: &RoomIndex) -> HardSoftScore {
        let mut sink = ScoreSink::default();
        self.evaluate_all(bookings, index, &mut sink);
        sink.score
    }

    /// Score difference between two assignments that differ only in the
    /// bookings listed in `changed`.
    ///
    /// Only constraint instances touching the changed bookings (or sharing a
    /// room with them) are evaluated. Equals
    /// `score(after) - score(before)` whenever every differing booking is
    /// listed.
    pub fn score_delta(
        &self,
        before: &[GuestBooking],
        after: &[GuestBooking],
        changed: &[usize],
    ) -> HardSoftScore {
        let mut changed: SmallVec<[usize; 4]> = changed.iter().copied().collect();
        changed.sort_unstable();
        changed.dedup();

        let mut rooms: SmallVec<[usize; 4]> = SmallVec::new();
        for &i in &changed {
            rooms.extend(before[i].assigned_room);
            rooms.extend(after[i].assigned_room);
        }
        rooms.retain(|r| *r < self.room_count());
        rooms.sort_unstable();
        rooms.dedup();

        let before_index = RoomIndex::build(self.room_count(), before);
        let after_index = RoomIndex::build(self.room_count(), after);
        self.partial_score(after, &after_index, &changed, &rooms)
            - self.partial_score(before, &before_index, &changed, &rooms)
    }

    /// Per-constraint breakdown of a full scoring pass.
    pub fn explain(&self, bookings: &[GuestBooking]) -> ScoreExplanation {
        let (score, matches) = self.score_full(bookings);
        let analyses = self
            .constraints
            .iter()
            .map(|c| {
                let code = c.code().as_str();
                let own: Vec<ConstraintMatch> = matches
                    .iter()
                    .filter(|m| m.constraint_code == code)
                    .cloned()
                    .collect();
                ConstraintAnalysis::new(c, own)
            })
            .collect();
        ScoreExplanation::new(score, analyses)
    }

    /// Sum of every constraint instance that involves a changed booking, or a
    /// booking staying in one of `rooms`.
    ///
    /// `changed` and `rooms` must be sorted and free of duplicates.
    pub(crate) fn partial_score(
        &self,
        bookings: &[GuestBooking],
        index: &RoomIndex,
        changed: &[usize],
        rooms: &[usize],
    ) -> HardSoftScore {
        let ctx = self.context(bookings, index);
        let mut sink = ScoreSink::default();
        for constraint in self.constraints.iter() {
            match constraint.scope() {
                ConstraintScope::Booking => {
                    for &i in changed {
                        constraint.evaluate_booking(&ctx, i, &mut sink);
                    }
                }
                ConstraintScope::Pair => {
                    for &i in changed {
                        let Some(room) = bookings[i].assigned_room else {
                            continue;
                        };
                        for &j in index.occupants(room) {
                            // Pairs of two changed bookings are counted once.
                            if j == i || (j < i && changed.binary_search(&j).is_ok()) {
                                continue;
                            }
                            constraint.evaluate_pair(&ctx, i, j, &mut sink);
                        }
                    }
                }
                ConstraintScope::Room => {
                    for &room in rooms {
                        for &i in index.occupants(room) {
                            constraint.evaluate_room_context(&ctx, i, &mut sink);
                        }
                    }
                }
            }
        }
        sink.score
    }

    fn evaluate_all<S: MatchSink>(&self, bookings: &[GuestBooking], index: &RoomIndex, sink: &mut S) {
        let ctx = self.context(bookings, index);
        for constraint in self.constraints.iter() {
            match constraint.scope() {
                ConstraintScope::Booking => {
                    for i in 0..bookings.len() {
                        constraint.evaluate_booking(&ctx, i, sink);
                    }
                }
                ConstraintScope::Pair => {
                    for room in 0..self.room_count() {
                        let occupants = index.occupants(room);
                        for (pos, &i) in occupants.iter().enumerate() {
                            for &j in &occupants[pos + 1..] {
                                constraint.evaluate_pair(&ctx, i, j, sink);
                            }
                        }
                    }
                }
                ConstraintScope::Room => {
                    for i in 0..bookings.len() {
                        constraint.evaluate_room_context(&ctx, i, sink);
                    }
                }
            }
        }
    }

    fn context<'a>(&'a self, bookings: &'a [GuestBooking], index: &'a RoomIndex) -> EvalContext<'a> {
        EvalContext {
            rooms: &self.rooms,
            bookings,
            index,
            type_available: &self.type_available,
        }
    }
}

#[derive(Default)]
struct ScoreSink {
    score: HardSoftScore,
}

impl MatchSink for ScoreSink {
    #[inline]
    fn record(
        &mut self,
        constraint: &ActiveConstraint,
        magnitude: i64,
        _justify: impl FnOnce() -> Justification,
    ) {
        self.score += constraint.score_for(magnitude);
    }
}

#[derive(Default)]
struct CollectSink {
    matches: Vec<ConstraintMatch>,
}

impl MatchSink for CollectSink {
    fn record(
        &mut self,
        constraint: &ActiveConstraint,
        magnitude: i64,
        justify: impl FnOnce() -> Justification,
    ) {
        self.matches.push(ConstraintMatch::new(
            constraint.code().as_str(),
            constraint.kind,
            constraint.score_for(magnitude),
            justify(),
        ));
    }
}
