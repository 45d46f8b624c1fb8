//! List-query codec and pagination bounds.
//!
//! The backend's `GET /content` endpoint takes `limit`, `offset`, `sort`
//! and an optional free-text `q`. This module owns the encoding rules for
//! those parameters and the pure pagination arithmetic the console uses to
//! build prev/next navigation. Values arriving from the outside (CLI args,
//! saved query strings) are clamped via [`clamp_limit`] / [`clamp_offset`].

use serde::{Deserialize, Serialize};

/// Default page size when none is supplied.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Maximum page size the client will request.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Default sort key (newest first).
pub const DEFAULT_SORT: &str = "created_at_desc";

/// Query parameters for a content listing.
///
/// `q` is omitted entirely from the encoded string when empty so the server
/// never sees an empty filter and treats it as "match nothing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub limit: i64,
    pub offset: i64,
    pub sort: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
            sort: DEFAULT_SORT.to_string(),
            q: None,
        }
    }
}

/// Lenient mirror of [`ListQuery`] used by [`ListQuery::parse`]: every
/// field comes in as an optional string so one malformed value cannot
/// poison the rest of the query.
#[derive(Debug, Default, Deserialize)]
struct RawListQuery {
    limit: Option<String>,
    offset: Option<String>,
    sort: Option<String>,
    q: Option<String>,
}

impl ListQuery {
    /// Encode into a URL query string (without the leading `?`).
    ///
    /// An empty `q` is dropped before encoding; everything else is
    /// percent-escaped by the urlencoded serializer.
    pub fn encode(&self) -> String {
        let mut query = self.clone();
        if query.q.as_deref().is_some_and(str::is_empty) {
            query.q = None;
        }
        serde_urlencoded::to_string(&query).expect("ListQuery is always serialisable")
    }

    /// Decode a query string back into a [`ListQuery`].
    ///
    /// Absent or non-numeric `limit`/`offset` fall back to the defaults,
    /// an absent `sort` falls back to [`DEFAULT_SORT`], and an empty `q`
    /// is treated as no filter. Any non-empty `q` round-trips through
    /// [`encode`](Self::encode) unchanged.
    pub fn parse(query: &str) -> Self {
        let raw: RawListQuery = serde_urlencoded::from_str(query).unwrap_or_default();

        Self {
            limit: clamp_limit(raw.limit.and_then(|v| v.parse().ok())),
            offset: clamp_offset(raw.offset.and_then(|v| v.parse().ok())),
            sort: raw
                .sort
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SORT.to_string()),
            q: raw.q.filter(|q| !q.is_empty()),
        }
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .max(1)
        .min(MAX_LIST_LIMIT)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Bound a candidate navigation offset to `[0, max(0, total - 1)]`.
///
/// Advisory only: this derives prev/next targets and never rewrites an
/// offset the caller supplied explicitly.
pub fn clamp_nav_offset(candidate: i64, total: i64) -> i64 {
    candidate.clamp(0, (total - 1).max(0))
}

/// Whether a "previous page" navigation target exists.
pub fn has_prev(offset: i64) -> bool {
    offset > 0
}

/// Whether a "next page" navigation target exists.
pub fn has_next(offset: i64, limit: i64, total: i64) -> bool {
    offset + limit < total
}

/// Offset of the previous page, bounded to the collection.
pub fn prev_offset(offset: i64, limit: i64, total: i64) -> i64 {
    clamp_nav_offset(offset - limit, total)
}

/// Offset of the next page, bounded to the collection.
pub fn next_offset(offset: i64, limit: i64, total: i64) -> i64 {
    clamp_nav_offset(offset + limit, total)
}
