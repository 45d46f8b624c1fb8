//! Well-known content lifecycle state constants.
//!
//! These match the values of the backend's `content_state` enum. The backend
//! is the sole authority on which transitions between them are legal; this
//! client only renders whatever the server reports, so `state` fields stay
//! open strings and these constants exist for display and test fixtures.

/// Initial state of a freshly created content item.
pub const STATE_INGESTED: &str = "INGESTED";

/// Item has been categorized.
pub const STATE_CLASSIFIED: &str = "CLASSIFIED";

/// Item was set aside for later reconsideration.
pub const STATE_DEFERRED: &str = "DEFERRED";

/// Terminal state; the item is withdrawn from the pipeline.
pub const STATE_RETIRED: &str = "RETIRED";

/// A draft exists for the item.
pub const STATE_DRAFTED: &str = "DRAFTED";

/// The draft passed validation.
pub const STATE_VALIDATED: &str = "VALIDATED";

/// The item was approved for publication.
pub const STATE_APPROVED: &str = "APPROVED";

/// The item is live.
pub const STATE_PUBLISHED: &str = "PUBLISHED";

/// All state values this client knows how to label.
pub const KNOWN_STATES: &[&str] = &[
    STATE_INGESTED,
    STATE_CLASSIFIED,
    STATE_DEFERRED,
    STATE_RETIRED,
    STATE_DRAFTED,
    STATE_VALIDATED,
    STATE_APPROVED,
    STATE_PUBLISHED,
];

/// Check whether a state string is one of the known values.
///
/// Unknown states are still rendered verbatim; this is only used to pick
/// display affordances, never to reject a server response.
pub fn is_known_state(state: &str) -> bool {
    KNOWN_STATES.contains(&state)
}
