//! `/api/*` passthrough to the trips API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Trips, joins and sessions live in an external service. The browser talks
//! to this host only, so every `/api/*` request is replayed upstream with
//! the same method, path, query and body. Only an allowlist of headers
//! crosses in either direction.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Request headers copied from the browser to the trips API.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION, header::COOKIE];

/// Response headers copied from the trips API back to the browser.
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 3] = [header::CONTENT_TYPE, header::CACHE_CONTROL, header::SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The trips API could not be reached or its body could not be read.
    #[error("trips service unavailable: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "message": self.to_string() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Catch-all handler for `/api/{*rest}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);
    let result = state
        .http
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await;

    let upstream = match result {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(error = %e, %method, path = uri.path(), "trips API request failed");
            return Err(ProxyError::Upstream(e.to_string()));
        }
    };

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, %method, path = uri.path(), "trips API body read failed");
        ProxyError::Upstream(e.to_string())
    })?;

    if status.is_server_error() {
        tracing::warn!(%status, %method, path = uri.path(), "trips API returned server error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().extend(response_headers);
    Ok(response)
}

/// Join the upstream base with the incoming path and query.
fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

fn filter_headers(headers: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in headers.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
