//! Request/response boundary.
//!
//! JSON shapes for a single solve call, and [`handle_request`] mapping one
//! request to an HTTP-equivalent status plus response body. Transport is up
//! to the caller.

use std::time::Duration;

use chrono::NaiveDate;
use hotelforge_core::{
    ConstraintMatch, Guest, GuestBooking, GuestPreferences, HardSoftScore, Room, RoomType,
    Solution, SolverError,
};
use hotelforge_solver::{AllocationProblem, SolveStatistics, Solver, DEFAULT_TIME_LIMIT_SECS};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Body of a solve request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub tenant_id: String,
    pub bookings: Vec<BookingRequest>,
    pub rooms: Vec<Room>,
    /// Seconds. Defaults to 30.
    #[serde(default)]
    pub time_limit: Option<f64>,
}

/// One booking as submitted, with its guest flattened in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Defaults to `booking-<n>`, counting from 1 in request order.
    #[serde(default)]
    pub id: Option<String>,
    pub guest_id: String,
    pub guest_name: String,
    #[serde(default)]
    pub vip: bool,
    #[serde(default)]
    pub loyalty_tier: u8,
    #[serde(default)]
    pub preferences: GuestPreferences,
    #[serde(default)]
    pub budget: Option<Decimal>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub requested_room_type: Option<RoomType>,
    #[serde(default)]
    pub early_checkin: bool,
    #[serde(default)]
    pub late_checkout: bool,
}

impl BookingRequest {
    fn into_booking(self, position: usize) -> GuestBooking {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("booking-{}", position + 1));
        let guest = Guest {
            id: self.guest_id,
            name: self.guest_name,
            vip: self.vip,
            loyalty_tier: self.loyalty_tier,
            preferences: self.preferences,
            budget: self.budget,
        };
        let mut booking = GuestBooking::new(id, guest, self.check_in, self.check_out)
            .with_early_checkin(self.early_checkin)
            .with_late_checkout(self.late_checkout);
        booking.requested_room_type = self.requested_room_type;
        booking
    }
}

impl SolveRequest {
    /// Parses a JSON body.
    ///
    /// # Errors
    ///
    /// Malformed JSON or missing required fields yield a validation error.
    pub fn from_json(body: &str) -> Result<Self, SolverError> {
        serde_json::from_str(body)
            .map_err(|e| SolverError::validation(format!("invalid request body: {}", e)))
    }

    /// Converts the request into a solver problem.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative, non-finite or out of range
    /// `timeLimit`.
    pub fn into_problem(self) -> Result<AllocationProblem, SolverError> {
        let time_limit = match self.time_limit {
            None => Duration::from_secs(DEFAULT_TIME_LIMIT_SECS),
            Some(secs) => Duration::try_from_secs_f64(secs).map_err(|_| {
                SolverError::validation(format!(
                    "timeLimit must be a non-negative, representable number of seconds, got {}",
                    secs
                ))
            })?,
        };
        let bookings = self
            .bookings
            .into_iter()
            .enumerate()
            .map(|(i, b)| b.into_booking(i))
            .collect();
        Ok(AllocationProblem::new(self.tenant_id, self.rooms, bookings).with_time_limit(time_limit))
    }
}

/// Where one booking ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub booking_id: String,
    pub guest_id: String,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// `None` when the booking could not be allocated.
    pub room_id: Option<String>,
    pub room_number: Option<String>,
}

/// The solved allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionBody {
    pub tenant_id: String,
    pub feasible: bool,
    pub score: HardSoftScore,
    pub constraint_matches: Vec<ConstraintMatch>,
    pub unassigned_booking_ids: Vec<String>,
}

/// Body of a solve response.
///
/// Failures carry `success: false` and a message, with the other fields
/// empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    /// True iff the hard score is zero.
    pub success: bool,
    pub solution: Option<SolutionBody>,
    pub assignments: Vec<Assignment>,
    pub score: Option<HardSoftScore>,
    pub constraint_violations: Vec<ConstraintMatch>,
    /// Milliseconds.
    pub solve_time: u64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SolveStatistics>,
}

impl SolveResponse {
    /// The response for a failed call.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            solution: None,
            assignments: Vec::new(),
            score: None,
            constraint_violations: Vec::new(),
            solve_time: 0,
            message: message.into(),
            statistics: None,
        }
    }

    /// The response for a finished solve.
    pub fn from_solution(solution: &Solution, statistics: Option<SolveStatistics>) -> Self {
        let assignments: Vec<Assignment> = solution
            .bookings
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let room = solution.assigned_room(i);
                Assignment {
                    booking_id: b.id.clone(),
                    guest_id: b.guest.id.clone(),
                    guest_name: b.guest.name.clone(),
                    check_in: b.check_in,
                    check_out: b.check_out,
                    room_id: room.map(|r| r.id.clone()),
                    room_number: room.map(|r| r.number.clone()),
                }
            })
            .collect();
        let violations: Vec<ConstraintMatch> =
            solution.constraint_violations().cloned().collect();
        let hard_violations = violations
            .iter()
            .filter(|m| m.score.hard() < 0)
            .count();
        let message = if solution.is_feasible() {
            format!("Allocated {} bookings with no hard violations", solution.bookings.len())
        } else {
            format!(
                "Solved with {} hard constraint violation(s), {} booking(s) unallocated",
                hard_violations,
                solution.unassigned_bookings().count()
            )
        };

        Self {
            success: solution.is_feasible(),
            solution: Some(SolutionBody {
                tenant_id: solution.tenant_id.clone(),
                feasible: solution.is_feasible(),
                score: solution.score,
                constraint_matches: solution.constraint_matches.clone(),
                unassigned_booking_ids: solution
                    .unassigned_bookings()
                    .map(|b| b.id.clone())
                    .collect(),
            }),
            assignments,
            score: Some(solution.score),
            constraint_violations: violations,
            solve_time: solution.solve_time_ms(),
            message,
            statistics,
        }
    }
}

/// Runs one request through the solver.
///
/// Returns 200 with the solution (even an infeasible one), 400 for
/// validation and configuration errors, and 500 for internal errors.
pub fn handle_request(solver: &Solver, request: SolveRequest) -> (u16, SolveResponse) {
    let tenant_id = request.tenant_id.clone();
    match request.into_problem().and_then(|p| solver.solve(p)) {
        Ok(result) => (
            200,
            SolveResponse::from_solution(&result.solution, Some(result.statistics)),
        ),
        Err(err) => error_response(&tenant_id, err),
    }
}

/// Parses a JSON body and runs it through the solver.
pub fn handle_json(solver: &Solver, body: &str) -> (u16, SolveResponse) {
    match SolveRequest::from_json(body) {
        Ok(request) => handle_request(solver, request),
        Err(err) => error_response("", err),
    }
}

fn error_response(tenant_id: &str, err: SolverError) -> (u16, SolveResponse) {
    let status = err.http_status();
    warn!(event = "request_failed", tenant_id = tenant_id, status = status, error = %err);
    (status, SolveResponse::failure(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "tenantId": "hotel-1",
        "bookings": [
            {
                "guestId": "g1",
                "guestName": "Ada",
                "vip": true,
                "preferences": { "accessible": true, "view": "OCEAN" },
                "budget": 300,
                "checkIn": "2026-06-01",
                "checkOut": "2026-06-03",
                "requestedRoomType": "Deluxe"
            },
            {
                "id": "B2",
                "guestId": "g2",
                "guestName": "Grace",
                "checkIn": "2026-06-02",
                "checkOut": "2026-06-04",
                "lateCheckout": true
            }
        ],
        "rooms": [
            {
                "id": "room-101",
                "number": 101,
                "type": "standard",
                "floor": 1,
                "view": "courtyard",
                "pricePerNight": 120
            }
        ]
    }"#;

    #[test]
    fn test_parse_request() {
        let request = SolveRequest::from_json(BODY).unwrap();
        assert_eq!(request.tenant_id, "hotel-1");
        assert_eq!(request.time_limit, None);
        assert_eq!(request.rooms[0].number, "101");
        assert_eq!(request.bookings[0].requested_room_type, Some(RoomType::Deluxe));
        assert_eq!(request.bookings[0].budget, Some(Decimal::from(300)));
        assert!(request.bookings[1].late_checkout);
    }

    #[test]
    fn test_into_problem_defaults() {
        let problem = SolveRequest::from_json(BODY).unwrap().into_problem().unwrap();
        assert_eq!(problem.time_limit, Some(Duration::from_secs(30)));
        assert_eq!(problem.bookings[0].id, "booking-1");
        assert_eq!(problem.bookings[1].id, "B2");
        assert!(problem.bookings[0].guest.vip);
        assert!(problem.bookings[0].guest.preferences.accessible);
        assert_eq!(problem.bookings[0].guest.name, "Ada");
    }

    #[test]
    fn test_into_problem_rejects_negative_time_limit() {
        let mut request = SolveRequest::from_json(BODY).unwrap();
        request.time_limit = Some(-1.0);
        let err = request.into_problem().unwrap_err();
        assert_eq!(err.http_status(), 400);

        let mut request = SolveRequest::from_json(BODY).unwrap();
        request.time_limit = Some(0.5);
        let problem = request.into_problem().unwrap();
        assert_eq!(problem.time_limit, Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_huge_time_limit_is_rejected() {
        let solver = Solver::new(std::sync::Arc::new(
            hotelforge_scoring::InMemoryConstraintSource::builtin(),
        ));
        let body = BODY.replacen("\"tenantId\"", "\"timeLimit\": 1e30, \"tenantId\"", 1);
        let (status, response) = handle_json(&solver, &body);
        assert_eq!(status, 400);
        assert!(!response.success);
        assert!(response.message.contains("timeLimit"), "{}", response.message);
    }

    #[test]
    fn test_malformed_body_is_validation_error() {
        let err = SolveRequest::from_json(r#"{"tenantId": "x"}"#).unwrap_err();
        assert!(matches!(err, SolverError::Validation(_)));

        let err = SolveRequest::from_json(&BODY.replace("standard", "penthouse")).unwrap_err();
        assert!(err.to_string().contains("penthouse"));
    }

    #[test]
    fn test_failure_shape() {
        let value = serde_json::to_value(SolveResponse::failure("rooms must not be empty")).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "rooms must not be empty");
        assert!(value["solution"].is_null());
        assert!(value.get("statistics").is_none());
    }
}
