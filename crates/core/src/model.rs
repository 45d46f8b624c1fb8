//! Wire models for the content governance API.
//!
//! Every response body decodes into one of these types at the network
//! boundary; nothing downstream handles untyped JSON except the opaque
//! event `payload`, which is recorded verbatim by the backend.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// A single content record as returned by `GET /content/{id}` and inside
/// list pages.
///
/// `state` is kept as an open string for forward compatibility: the server
/// may introduce states this client build does not know yet, and they must
/// still render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: EntityId,
    pub title: String,
    pub state: String,
    pub risk_tier: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One page of a content listing (`GET /content`).
///
/// For a consistent snapshot the server guarantees `items.len() <= limit`
/// and `offset + items.len() <= total`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentListPage {
    pub items: Vec<ContentItem>,
    pub limit: i64,
    pub offset: i64,
    pub total: i64,
}

/// Server-declared set of legal next states for a content item
/// (`GET /content/{id}/allowed`).
///
/// `allowed` may be empty: the record is terminal or transitions are
/// currently suppressed. This value is always re-derived by the backend;
/// the client never computes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowedTransitions {
    pub content_id: EntityId,
    pub from_state: String,
    pub risk_tier: i64,
    pub allowed: Vec<String>,
}

/// One entry of a content item's append-only audit log
/// (`GET /content/{id}/events`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEvent {
    pub id: EntityId,
    pub entity_type: String,
    pub entity_id: EntityId,
    pub event_type: String,
    pub actor_type: String,
    pub actor_id: Option<String>,
    /// Opaque structured data recorded verbatim by the backend.
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
}

/// Body of `POST /content/{id}/transition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub to_state: String,
}

/// Result of a successful transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub content_id: EntityId,
    pub from_state: String,
    pub to_state: String,
    pub risk_tier: i64,
}

/// Body of `POST /content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContent {
    pub title: String,
    pub risk_tier: i64,
}

/// Response of `GET /workflow/states`: every state the backend's lifecycle
/// policy knows about, in pipeline order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStates {
    pub states: Vec<String>,
}

/// Response of `GET /healthz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
    pub version: String,
}
