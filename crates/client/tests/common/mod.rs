//! In-process stub backend for client integration tests.
//!
//! Serves the same REST surface as the real content governance API on an
//! ephemeral port, with a small fixed dataset: 45 content items, a known
//! item `abc123` in state `APPROVED`, a `terminal` item with an empty
//! allowed-set, a `fresh` item with no events, and ids `missing`,
//! `broken`, `mangled` that exercise the error paths. Transition calls are
//! counted so tests can observe how many requests actually hit the wire.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use steward_client::{ApiClient, ClientConfig};

/// Title of the one dataset item with characters that need URL escaping.
pub const EXOTIC_TITLE: &str = "Säule & Fundament 100%";

#[derive(Default)]
pub struct StubState {
    /// Number of transition requests that reached the backend.
    pub transition_calls: AtomicUsize,
    /// Tenant slug seen on the most recent scoped request.
    pub last_tenant: Mutex<Option<String>>,
}

/// Spawn the stub backend, returning a client pointed at it plus the
/// shared state for assertions.
pub async fn spawn_stub(tenant: &str) -> (ApiClient, Arc<StubState>) {
    let state = Arc::new(StubState::default());
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend");
    });

    let config = ClientConfig::new(format!("http://{addr}"), tenant);
    (ApiClient::new(config), state)
}

fn router(state: Arc<StubState>) -> Router {
    let content = Router::new()
        .route("/content", get(list_content).post(create_content))
        .route("/content/{id}", get(get_content))
        .route("/content/{id}/allowed", get(get_allowed))
        .route("/content/{id}/events", get(get_events))
        .route("/content/{id}/transition", post(transition))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_tenant,
        ));

    Router::new()
        .merge(content)
        .route("/workflow/states", get(workflow_states))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Reject scoped requests without a tenant header, recording the slug
/// otherwise (mirrors the real backend's header dependency).
async fn require_tenant(
    State(state): State<Arc<StubState>>,
    request: Request,
    next: Next,
) -> Response {
    let slug = request
        .headers()
        .get("x-tenant-slug")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty());

    match slug {
        Some(slug) => {
            *state.last_tenant.lock().unwrap() = Some(slug.to_string());
            next.run(request).await
        }
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "X-Tenant-Slug header is required"})),
        )
            .into_response(),
    }
}

fn item(id: &str, title: &str, state: &str, risk_tier: i64) -> Value {
    json!({
        "id": id,
        "title": title,
        "state": state,
        "risk_tier": risk_tier,
        "created_at": "2026-01-06T12:00:00+00:00",
        "updated_at": "2026-01-06T12:30:00+00:00",
    })
}

fn dataset() -> Vec<Value> {
    (1..=45)
        .map(|n| {
            let title = if n == 7 {
                EXOTIC_TITLE.to_string()
            } else {
                format!("Item {n:02}")
            };
            let state = if n % 9 == 0 { "PUBLISHED" } else { "INGESTED" };
            item(&format!("c{n:02}"), &title, state, (n % 3) + 1)
        })
        .collect()
}

async fn list_content(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let limit: usize = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);
    let offset: usize = params
        .get("offset")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let mut items = dataset();
    if let Some(q) = params.get("q") {
        items.retain(|it| it["title"].as_str().is_some_and(|t| t.contains(q.as_str())));
    }

    let total = items.len();
    let page: Vec<Value> = items.into_iter().skip(offset).take(limit).collect();

    Json(json!({
        "items": page,
        "limit": limit,
        "offset": offset,
        "total": total,
    }))
}

async fn create_content(Json(body): Json<Value>) -> Json<Value> {
    Json(item(
        "created-01",
        body["title"].as_str().unwrap_or(""),
        "INGESTED",
        body["risk_tier"].as_i64().unwrap_or(1),
    ))
}

async fn get_content(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "content not found"})),
        )
            .into_response(),
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "mangled" => Json(json!({"nope": true})).into_response(),
        _ => Json(item(&id, "Quarterly governance report", "APPROVED", 1)).into_response(),
    }
}

async fn get_allowed(Path(id): Path<String>) -> Response {
    let allowed: Vec<&str> = match id.as_str() {
        "terminal" => vec![],
        _ => vec!["PUBLISHED", "RETIRED"],
    };

    Json(json!({
        "content_id": id,
        "from_state": if id == "terminal" { "RETIRED" } else { "APPROVED" },
        "risk_tier": 1,
        "allowed": allowed,
    }))
    .into_response()
}

async fn get_events(Path(id): Path<String>) -> Json<Value> {
    if id == "fresh" {
        return Json(json!([]));
    }

    Json(json!([
        {
            "id": "ev1",
            "entity_type": "content",
            "entity_id": id,
            "event_type": "content.created",
            "actor_type": "system",
            "actor_id": null,
            "payload": {"state": "INGESTED"},
            "created_at": "2026-01-06T12:00:00+00:00",
        },
        {
            "id": "ev2",
            "entity_type": "content",
            "entity_id": id,
            "event_type": "content.transitioned",
            "actor_type": "user",
            "actor_id": "op-1",
            "payload": {"from_state": "VALIDATED", "to_state": "APPROVED"},
            "created_at": "2026-01-06T12:30:00+00:00",
        },
    ]))
}

async fn transition(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.transition_calls.fetch_add(1, Ordering::SeqCst);

    match body["to_state"].as_str() {
        Some("PUBLISHED") => Json(json!({
            "content_id": id,
            "from_state": "APPROVED",
            "to_state": "PUBLISHED",
            "risk_tier": 1,
        }))
        .into_response(),
        _ => (
            StatusCode::CONFLICT,
            Json(json!({"detail": "invalid transition"})),
        )
            .into_response(),
    }
}

async fn workflow_states() -> Json<Value> {
    Json(json!({"states": steward_core::state::KNOWN_STATES}))
}

async fn healthz() -> Json<Value> {
    Json(json!({"ok": true, "version": "0.3.4"}))
}
