use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    auth::verify_admin,
    database::{insert_rsvp, list_rsvps, NewRsvp, Rsvp},
    error::AppError,
    state::AppState,
};

/// Submission payload. Missing or mistyped fields are rejected by the JSON
/// extractor before the handler runs.
#[derive(Deserialize)]
pub struct RsvpRequest {
    pub name: String,
    pub dinner_confirmed: bool,
    pub party_confirmed: Option<bool>,
}

pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "API is running" }))
}

pub async fn rsvp_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RsvpRequest>,
) -> Result<Json<Value>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::EmptyName);
    }

    let rsvp = NewRsvp {
        name: name.to_string(),
        dinner_confirmed: payload.dinner_confirmed,
        party_confirmed: payload.party_confirmed,
        timestamp: Utc::now(),
    };

    let id = insert_rsvp(&state.pool, &rsvp).await?;
    info!("Stored RSVP {id}");

    Ok(Json(json!({ "message": "RSVP submitted successfully" })))
}

pub async fn admin_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Rsvp>>, AppError> {
    verify_admin(&headers, &state.config.admin_password)?;

    let rsvps = list_rsvps(&state.pool).await?;

    Ok(Json(rsvps))
}
