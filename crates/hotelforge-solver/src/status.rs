//! Lifecycle of one solve call.

use std::fmt;

use serde::Serialize;
use tracing::info;

/// Where a solve call is in its lifecycle.
///
/// `Init → LoadingConstraints → Constructing → Improving → Done`, with
/// `Failed` reachable from `Init` and `LoadingConstraints`, and from the
/// search phases when an internal error is caught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolverStatus {
    Init,
    LoadingConstraints,
    Constructing,
    Improving,
    Done,
    Failed,
}

impl SolverStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SolverStatus::Init => "INIT",
            SolverStatus::LoadingConstraints => "LOADING_CONSTRAINTS",
            SolverStatus::Constructing => "CONSTRUCTING",
            SolverStatus::Improving => "IMPROVING",
            SolverStatus::Done => "DONE",
            SolverStatus::Failed => "FAILED",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SolverStatus::Done | SolverStatus::Failed)
    }

    /// Whether `next` may follow `self`.
    pub fn can_transition_to(self, next: SolverStatus) -> bool {
        use SolverStatus::*;
        matches!(
            (self, next),
            (Init, LoadingConstraints)
                | (LoadingConstraints, Constructing)
                | (Constructing, Improving)
                | (Improving, Done)
                | (Init | LoadingConstraints | Constructing | Improving, Failed)
        )
    }
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks and logs the status of one call.
#[derive(Debug)]
pub(crate) struct StatusTracker {
    tenant_id: String,
    status: SolverStatus,
    history: Vec<SolverStatus>,
}

impl StatusTracker {
    pub(crate) fn new(tenant_id: &str) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            status: SolverStatus::Init,
            history: vec![SolverStatus::Init],
        }
    }

    pub(crate) fn status(&self) -> SolverStatus {
        self.status
    }

    pub(crate) fn history(&self) -> &[SolverStatus] {
        &self.history
    }

    /// Moves to `next`. Illegal transitions are ignored and logged.
    pub(crate) fn transition(&mut self, next: SolverStatus) {
        if !self.status.can_transition_to(next) {
            tracing::warn!(
                event = "illegal_state_transition",
                tenant_id = %self.tenant_id,
                from = %self.status,
                to = %next
            );
            return;
        }
        info!(
            event = "state_transition",
            tenant_id = %self.tenant_id,
            from = %self.status,
            to = %next
        );
        self.status = next;
        self.history.push(next);
    }
}
