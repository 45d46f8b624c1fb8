//! Typed accessors for the content resource endpoints.
//!
//! Thin wrappers over [`ApiClient`]: one network request per call, one
//! decode step per response, errors propagated untouched.

use steward_core::model::{
    AllowedTransitions, ContentEvent, ContentItem, ContentListPage, CreateContent, Health,
    TransitionOutcome, TransitionRequest, WorkflowStates,
};
use steward_core::query::ListQuery;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// List content for the tenant: `GET /content?limit=&offset=&sort=&q=`.
    pub async fn list_content(&self, query: &ListQuery) -> Result<ContentListPage, ApiError> {
        self.get_json(&format!("/content?{}", query.encode())).await
    }

    /// Fetch one content item by id: `GET /content/{id}`.
    pub async fn get_content(&self, content_id: &str) -> Result<ContentItem, ApiError> {
        self.get_json(&format!("/content/{content_id}")).await
    }

    /// Fetch the server-declared set of legal next states:
    /// `GET /content/{id}/allowed`.
    ///
    /// An unknown id surfaces as a plain [`ApiError::Http`] with a 404
    /// status, like any other HTTP failure.
    pub async fn get_allowed(&self, content_id: &str) -> Result<AllowedTransitions, ApiError> {
        self.get_json(&format!("/content/{content_id}/allowed"))
            .await
    }

    /// Fetch the item's audit trail: `GET /content/{id}/events`.
    ///
    /// The returned order is the backend's; a freshly created item may
    /// legitimately have no events at all.
    pub async fn get_events(&self, content_id: &str) -> Result<Vec<ContentEvent>, ApiError> {
        self.get_json(&format!("/content/{content_id}/events"))
            .await
    }

    /// Execute a lifecycle transition: `POST /content/{id}/transition`.
    ///
    /// `to_state` is sent as-is. The backend is the sole authority on
    /// legality; a target outside the last fetched allowed-set is still
    /// sent, and the resulting rejection comes back as a normal
    /// [`ApiError::Http`].
    pub async fn transition(
        &self,
        content_id: &str,
        to_state: &str,
    ) -> Result<TransitionOutcome, ApiError> {
        let body = TransitionRequest {
            to_state: to_state.to_string(),
        };
        self.post_json(&format!("/content/{content_id}/transition"), &body)
            .await
    }

    /// Create a content item: `POST /content`.
    pub async fn create_content(&self, request: &CreateContent) -> Result<ContentItem, ApiError> {
        self.post_json("/content", request).await
    }

    /// Fetch every state the backend's lifecycle policy knows about:
    /// `GET /workflow/states`.
    pub async fn workflow_states(&self) -> Result<WorkflowStates, ApiError> {
        self.get_json("/workflow/states").await
    }

    /// Backend liveness probe: `GET /healthz`.
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.get_json("/healthz").await
    }
}
