//! Composite detail-view loader.
//!
//! A detail view needs the item, its allowed transitions, and its audit
//! trail together. The three fetches fan out concurrently and the view is
//! all-or-nothing: if any one fails, the whole load fails and nothing
//! half-loaded is handed to the renderer.

use serde::Serialize;
use steward_core::model::{AllowedTransitions, ContentEvent, ContentItem};

use crate::error::ApiError;
use crate::http::ApiClient;

/// Everything a content detail view renders.
#[derive(Debug, Clone, Serialize)]
pub struct ContentDetailView {
    pub item: ContentItem,
    pub allowed: AllowedTransitions,
    pub events: Vec<ContentEvent>,
}

/// Load a full detail view with one concurrent fan-out.
///
/// This is also the explicit "invalidate and refetch" step after a
/// successful transition: when the
/// [`TransitionController`](crate::transition::TransitionController)
/// reports [`needs_refresh`](crate::transition::TransitionController::needs_refresh),
/// call this again instead of reloading any surrounding page.
pub async fn load_detail(api: &ApiClient, content_id: &str) -> Result<ContentDetailView, ApiError> {
    let (item, allowed, events) = tokio::try_join!(
        api.get_content(content_id),
        api.get_allowed(content_id),
        api.get_events(content_id),
    )?;

    Ok(ContentDetailView {
        item,
        allowed,
        events,
    })
}
