//! Single-flight transition controller.
//!
//! A small state machine that gates transition submission for one content
//! item. The controller owns the selected target state and the submission
//! phase; the network call itself goes through
//! [`ApiClient::transition`](crate::http::ApiClient) and is driven either
//! by [`TransitionController::submit`] or manually via
//! [`begin_submit`](TransitionController::begin_submit) /
//! [`complete_success`](TransitionController::complete_success) /
//! [`complete_failure`](TransitionController::complete_failure).
//!
//! Invariant: at most one transition request per controller instance is in
//! flight at any time. Repeated submissions while one is pending are
//! no-ops, and the controller never submits without a selected target.

use steward_core::model::{AllowedTransitions, TransitionOutcome, TransitionRequest};

use crate::http::ApiClient;

/// Submission phase of a [`TransitionController`].
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionPhase {
    /// Nothing submitted yet, or the last result was acknowledged.
    Idle,
    /// A transition request is in flight.
    Submitting,
    /// The last submission succeeded; dependent views are stale.
    Succeeded(TransitionOutcome),
    /// The last submission failed with this detail string. A new attempt
    /// is allowed without re-selecting the target.
    Failed(String),
}

/// Gates lifecycle transition submission for one content item.
///
/// Built from the last fetched [`AllowedTransitions`]; the first allowed
/// state is pre-selected. With an empty allowed-set the record is terminal:
/// there is nothing to select and the controller never submits, so callers
/// render a "no transitions available" affordance instead of a submit
/// control.
#[derive(Debug)]
pub struct TransitionController {
    content_id: String,
    options: Vec<String>,
    selected: Option<String>,
    phase: TransitionPhase,
}

impl TransitionController {
    /// Create a controller from the server-declared allowed-set.
    pub fn new(allowed: &AllowedTransitions) -> Self {
        Self {
            content_id: allowed.content_id.clone(),
            selected: allowed.allowed.first().cloned(),
            options: allowed.allowed.clone(),
            phase: TransitionPhase::Idle,
        }
    }

    /// Id of the content item this controller drives.
    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    /// The candidate next states offered for selection.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether any target state can be offered at all.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// The currently selected target state.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Current submission phase.
    pub fn phase(&self) -> &TransitionPhase {
        &self.phase
    }

    /// Select a target state and return to `Idle`.
    ///
    /// The target does not have to be a member of the offered options:
    /// the backend is the sole authority on legality and rejections come
    /// back through the normal error path. With an empty allowed-set the
    /// call is ignored, since a terminal record offers nothing to select.
    ///
    /// No-op while a submission is in flight.
    pub fn select(&mut self, to_state: &str) {
        if !self.has_options() || self.phase == TransitionPhase::Submitting {
            return;
        }
        self.selected = Some(to_state.to_string());
        self.phase = TransitionPhase::Idle;
    }

    /// Acknowledge the last outcome and return to `Idle`, keeping the
    /// selection so the operator can retry without re-selecting.
    pub fn reset(&mut self) {
        if self.phase != TransitionPhase::Submitting {
            self.phase = TransitionPhase::Idle;
        }
    }

    /// Try to start a submission.
    ///
    /// Returns the request to send, or `None` (a no-op) when no target is
    /// selected or a submission is already in flight. A `Some` return moves
    /// the controller to `Submitting`, so a second call before
    /// [`complete_success`](Self::complete_success) /
    /// [`complete_failure`](Self::complete_failure) always returns `None`;
    /// this is what keeps double-clicks down to one network request.
    pub fn begin_submit(&mut self) -> Option<TransitionRequest> {
        if self.phase == TransitionPhase::Submitting {
            return None;
        }
        let to_state = self.selected.clone()?;

        self.phase = TransitionPhase::Submitting;
        Some(TransitionRequest { to_state })
    }

    /// Record a successful outcome.
    ///
    /// After this, [`needs_refresh`](Self::needs_refresh) reports `true`:
    /// the allowed-set and the audit trail are stale and the caller is
    /// expected to re-fetch them. The controller itself never re-fetches.
    pub fn complete_success(&mut self, outcome: TransitionOutcome) {
        self.phase = TransitionPhase::Succeeded(outcome);
    }

    /// Record a failed submission, keeping the selection for a retry.
    pub fn complete_failure(&mut self, detail: String) {
        self.phase = TransitionPhase::Failed(detail);
    }

    /// Whether dependent views (allowed transitions, events) should be
    /// re-fetched because a transition went through.
    pub fn needs_refresh(&self) -> bool {
        matches!(self.phase, TransitionPhase::Succeeded(_))
    }

    /// Detail string of the last failure, if the controller is in `Failed`.
    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            TransitionPhase::Failed(detail) => Some(detail),
            _ => None,
        }
    }

    /// Submit the selected transition through the API client.
    ///
    /// Returns `false` without touching the network when the guard refuses
    /// (nothing selected, or already submitting). Otherwise performs exactly
    /// one request and records the outcome in [`phase`](Self::phase).
    /// Submissions on one controller are strictly serialized: the next one
    /// cannot start before this one resolves.
    pub async fn submit(&mut self, api: &ApiClient) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };

        match api.transition(&self.content_id, &request.to_state).await {
            Ok(outcome) => {
                tracing::info!(
                    content_id = %self.content_id,
                    from_state = %outcome.from_state,
                    to_state = %outcome.to_state,
                    "Transition applied"
                );
                self.complete_success(outcome);
            }
            Err(err) => {
                tracing::warn!(content_id = %self.content_id, error = %err, "Transition failed");
                self.complete_failure(err.to_string());
            }
        }
        true
    }
}
