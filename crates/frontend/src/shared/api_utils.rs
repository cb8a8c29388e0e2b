//! API utilities for frontend-backend communication
//!
//! The backend is mounted under a base path (`/api` by default, same origin).
//! For development the base can be pointed elsewhere with a query parameter:
//! `?api_base=http://127.0.0.1:8000/api`.

use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Default, Deserialize)]
struct ApiQuery {
    api_base: Option<String>,
}

/// Resolve the API base from a `location.search` string.
pub fn resolve_api_base(search: &str) -> String {
    let query: ApiQuery =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query
        .api_base
        .map(|b| b.trim().trim_end_matches('/').to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Get the base URL for API requests
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/ask", api_base());
/// ```
pub fn api_base() -> String {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    resolve_api_base(&search)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The endpoint path (should start with "/")
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
