//! Recommendation core: similarity scoring, profile building, candidate
//! ranking and the popularity fallback.
//!
//! Personalization works on embeddings only: the user's profile vector is
//! the mean of the embeddings of events they marked interest in, and every
//! other embedded event is ranked by cosine similarity to that profile.
//! Whenever no personalization signal exists the request falls back to a
//! plain engagement-count ranking, so the endpoint never returns an empty
//! list while the store holds at least one event.

use std::collections::HashSet;

use crate::{
    error::AppResult,
    models::{Event, Recommendation},
    store::EventStore,
};

/// Fallback explanation when no profile could be built.
pub const POPULAR_FALLBACK: &str = "Popular events fallback";

/// Fallback explanation when a profile existed but ranking found nothing.
pub const NO_SIMILAR_FALLBACK: &str = "Popular events fallback (no similar found)";

/// Outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub recommendations: Vec<Recommendation>,
    /// Present only on fallback responses.
    pub message: Option<String>,
}

/// Cosine similarity between two embedding vectors.
///
/// Mismatched or empty dimensions and zero-norm inputs yield 0.0 rather
/// than NaN; well-behaved embeddings never hit either case.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Builds the user profile vector: the coordinate-wise mean of the supplied
/// events' embeddings.
///
/// Returns `None` when `events` is empty; the orchestrator checks for this
/// before ranking. Callers supply only events that carry an embedding (the
/// store query enforces it); an event slipping through without one is
/// skipped.
pub fn build_profile(events: &[Event]) -> Option<Vec<f32>> {
    let embeddings: Vec<&Vec<f32>> = events
        .iter()
        .filter_map(|e| e.embedding.as_ref().filter(|v| !v.is_empty()))
        .collect();

    let first = embeddings.first()?;
    let mut profile = vec![0.0f32; first.len()];
    for embedding in &embeddings {
        for (slot, value) in profile.iter_mut().zip(embedding.iter()) {
            *slot += value;
        }
    }

    let n = embeddings.len() as f32;
    for slot in &mut profile {
        *slot /= n;
    }

    Some(profile)
}

/// Ranks candidates by similarity to the profile vector, descending.
///
/// The sort is stable, so candidates with equal scores keep the store's
/// iteration order. Candidates are assumed pre-filtered: embedded, and not
/// already interacted with by the user.
pub fn rank_candidates(
    profile: &[f32],
    candidates: &[Event],
    limit: usize,
) -> Vec<Recommendation> {
    let mut scored: Vec<Recommendation> = candidates
        .iter()
        .filter_map(|event| {
            let embedding = event.embedding.as_ref()?;
            Some(Recommendation::scored(event, cosine_similarity(profile, embedding)))
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored
}

/// Ranks events by raw engagement count, descending.
///
/// The non-personalized fallback: no embeddings required, every result is
/// flagged popular. Stable sort keeps store order on ties.
pub fn popular_events(events: &[Event], limit: usize) -> Vec<Recommendation> {
    let mut scored: Vec<Recommendation> = events
        .iter()
        .map(|event| Recommendation::popular(event, event.engagement() as f32))
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored
}

/// Produces recommendations for a request.
///
/// Branches: no user id, or no embedded interested events, falls back to
/// popularity; otherwise builds the profile, ranks all embedded events the
/// user has not interacted with, and falls back to popularity again if that
/// ranking comes back empty. Store failures propagate to the caller.
pub async fn recommend(
    store: &dyn EventStore,
    user_id: Option<&str>,
    popular_limit: usize,
    candidate_limit: usize,
) -> AppResult<Recommendations> {
    let interests = match user_id {
        Some(id) => store.interested_with_embedding(id).await?,
        None => Vec::new(),
    };

    let Some(profile) = build_profile(&interests) else {
        tracing::debug!(user_id = ?user_id, "no personalization signal, using popularity fallback");
        return popularity_fallback(store, popular_limit, POPULAR_FALLBACK).await;
    };

    let interested_ids: HashSet<String> = interests.iter().map(|e| e.id.clone()).collect();
    let candidates = store.embedded_excluding(&interested_ids).await?;
    let ranked = rank_candidates(&profile, &candidates, candidate_limit);

    if ranked.is_empty() {
        tracing::debug!(user_id = ?user_id, "no similar events, using popularity fallback");
        return popularity_fallback(store, popular_limit, NO_SIMILAR_FALLBACK).await;
    }

    tracing::debug!(
        user_id = ?user_id,
        interests = interests.len(),
        results = ranked.len(),
        "personalized recommendations"
    );

    Ok(Recommendations {
        recommendations: ranked,
        message: None,
    })
}

async fn popularity_fallback(
    store: &dyn EventStore,
    limit: usize,
    message: &str,
) -> AppResult<Recommendations> {
    let all = store.all_events().await?;
    Ok(Recommendations {
        recommendations: popular_events(&all, limit),
        message: Some(message.to_string()),
    })
}
