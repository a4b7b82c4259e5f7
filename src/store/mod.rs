//! Event store capability interface.
//!
//! The recommendation core does not depend on a specific store's query
//! language; it needs only the field-membership, field-existence and
//! exclusion filters below, plus a single-field write for backfill. Any
//! document store can sit behind this trait; [`memory::InMemoryEventStore`]
//! is the shipped backend.

use std::collections::HashSet;

use crate::{error::AppResult, models::Event};

pub mod memory;

pub use memory::InMemoryEventStore;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait EventStore: Send + Sync {
    /// Events where `interested_users` contains `user_id` and an embedding
    /// is present. Input to the profile builder.
    async fn interested_with_embedding(&self, user_id: &str) -> AppResult<Vec<Event>>;

    /// Events carrying an embedding whose id is not in `exclude`. The
    /// candidate set for personalized ranking.
    async fn embedded_excluding(&self, exclude: &HashSet<String>) -> AppResult<Vec<Event>>;

    /// Every stored event, in the store's natural iteration order.
    async fn all_events(&self) -> AppResult<Vec<Event>>;

    /// Events whose embedding is missing, null or empty. Backfill input.
    async fn missing_embedding(&self) -> AppResult<Vec<Event>>;

    /// Persists an embedding onto the event with the given id.
    async fn set_embedding(&self, id: &str, embedding: Vec<f32>) -> AppResult<()>;

    /// Adds an event to the store.
    async fn insert(&self, event: Event) -> AppResult<()>;
}
