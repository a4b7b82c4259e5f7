use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Event, Recommendation};
use crate::services::{backfill, recommendations};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub embedding: Option<Vec<f32>>,
    #[serde(default)]
    pub interested_users: Vec<String>,
    #[serde(default)]
    pub booked_seats: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateEmbeddingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateEmbeddingResponse {
    pub embedding: Vec<f32>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get all events
pub async fn get_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = state.store.all_events().await?;
    Ok(Json(events))
}

/// Create a new event
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let mut event = Event::new(request.title, request.description);
    event.category = request.category;
    event.image = request.image;
    event.date = request.date;
    event.location = request.location;
    event.embedding = request.embedding;
    event.interested_users = request.interested_users;
    event.booked_seats = request.booked_seats;

    state.store.insert(event.clone()).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Produce recommendations for a user, falling back to popular events when
/// no personalization signal exists
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    // A blank user id is the same as no user id.
    let user_id = request
        .user_id
        .as_deref()
        .filter(|id| !id.trim().is_empty());

    let outcome = recommendations::recommend(
        state.store.as_ref(),
        user_id,
        state.popular_limit,
        state.candidate_limit,
    )
    .await?;

    Ok(Json(RecommendResponse {
        recommendations: outcome.recommendations,
        message: outcome.message,
    }))
}

/// Embed free text built from an event's title and description
pub async fn generate_embedding(
    State(state): State<AppState>,
    Json(request): Json<GenerateEmbeddingRequest>,
) -> AppResult<Json<GenerateEmbeddingResponse>> {
    let text = format!(
        "{} {}",
        request.title.unwrap_or_default(),
        request.description.unwrap_or_default()
    );
    let text = text.trim();

    if text.is_empty() {
        return Err(AppError::InvalidInput("No text provided".to_string()));
    }

    let embedding = state.embedder.embed(text).await?;
    Ok(Json(GenerateEmbeddingResponse { embedding }))
}

/// Run the backfill sweep over the store
pub async fn run_backfill(
    State(state): State<AppState>,
) -> AppResult<Json<backfill::BackfillReport>> {
    let report = backfill::run(state.store.as_ref(), state.embedder.as_ref()).await?;
    Ok(Json(report))
}
