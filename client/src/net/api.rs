//! REST helpers for the trips API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable`, since
//! these calls are only made from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure carries a human-readable message. Non-OK responses use the
//! API's `{"message": ...}` body when present and fall back to
//! `"<action> failed: <status>"`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Trip, TripUpdate, User};
use crate::state::search::SearchCriteria;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::dates;

#[cfg(any(test, feature = "hydrate"))]
const TRIPS_ENDPOINT: &str = "/api/trips";

/// Errors surfaced to the user when an API call fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn trip_endpoint(trip_id: &str) -> String {
    format!("{TRIPS_ENDPOINT}/{trip_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn trip_join_endpoint(trip_id: &str) -> String {
    format!("{TRIPS_ENDPOINT}/{trip_id}/join")
}

/// Query string for the list endpoint, including the leading `?`.
/// Blank places, a missing date and a zero max price are left out.
#[cfg(any(test, feature = "hydrate"))]
fn search_query(criteria: &SearchCriteria) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in [("from", criteria.from.trim()), ("to", criteria.to.trim())] {
        if !value.is_empty() {
            query.append_pair(key, value);
            any = true;
        }
    }
    if let Some(date) = criteria.departure_date {
        query.append_pair("date", &dates::format_input_date(date));
        any = true;
    }
    if criteria.max_price > 0 {
        query.append_pair("maxPrice", &criteria.max_price.to_string());
        any = true;
    }
    if any { format!("?{}", query.finish()) } else { String::new() }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(action: &str, status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("{action} failed: {status}"));
    ApiError::Status { status, message }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response, action: &str) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(action, status, &body))
}

/// Fetch the signed-in user from `/api/auth/me`.
/// Returns `None` when signed out or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// List trips matching `criteria` via `GET /api/trips`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a trip list.
pub async fn search_trips(criteria: &SearchCriteria) -> Result<Vec<Trip>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{TRIPS_ENDPOINT}{}", search_query(criteria));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(network_error)?;
        let resp = ensure_ok(resp, "search trips").await?;
        resp.json::<Vec<Trip>>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = criteria;
        Err(ApiError::Unavailable)
    }
}

/// Save edited trip fields via `PUT /api/trips/{id}` and return the server's
/// copy of the trip.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a trip.
pub async fn update_trip(trip_id: &str, fields: &TripUpdate) -> Result<Trip, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&trip_endpoint(trip_id))
            .json(fields)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let resp = ensure_ok(resp, "update trip").await?;
        resp.json::<Trip>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (trip_id, fields);
        Err(ApiError::Unavailable)
    }
}

/// Delete a trip via `DELETE /api/trips/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server responds with a
/// non-OK status.
pub async fn delete_trip(trip_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&trip_endpoint(trip_id))
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp, "delete trip").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = trip_id;
        Err(ApiError::Unavailable)
    }
}

/// Join a trip as a passenger via `POST /api/trips/{id}/join`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server responds with a
/// non-OK status.
pub async fn join_trip(trip_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&trip_join_endpoint(trip_id))
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp, "join trip").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = trip_id;
        Err(ApiError::Unavailable)
    }
}
