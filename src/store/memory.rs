use std::collections::HashSet;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Event,
};

use super::EventStore;

/// In-memory event store.
///
/// Events live in a Vec behind an async RwLock, so iteration order is
/// insertion order. Requests only read event data; the write path is
/// event creation and the backfill sweep.
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given events
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn interested_with_embedding(&self, user_id: &str) -> AppResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .filter(|e| e.has_embedding() && e.interested_users.iter().any(|u| u == user_id))
            .cloned()
            .collect())
    }

    async fn embedded_excluding(&self, exclude: &HashSet<String>) -> AppResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .filter(|e| e.has_embedding() && !exclude.contains(&e.id))
            .cloned()
            .collect())
    }

    async fn all_events(&self) -> AppResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.clone())
    }

    async fn missing_embedding(&self) -> AppResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().filter(|e| !e.has_embedding()).cloned().collect())
    }

    async fn set_embedding(&self, id: &str, embedding: Vec<f32>) -> AppResult<()> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("event {}", id)))?;
        event.embedding = Some(embedding);
        Ok(())
    }

    async fn insert(&self, event: Event) -> AppResult<()> {
        let mut events = self.events.write().await;
        events.push(event);
        Ok(())
    }
}
