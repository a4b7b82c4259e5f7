//! One-shot backfill sweep: embed every stored event that does not have an
//! embedding yet.
//!
//! No cross-event transactionality. A failure on one event is logged and
//! counted, and the sweep moves on; rerunning the job finds only the
//! still-unembedded remainder, so partial completion is safe.

use serde::Serialize;

use crate::{embed::Embedder, error::AppResult, store::EventStore};

/// Counters reported after a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackfillReport {
    /// Events that received a new embedding.
    pub updated: usize,
    /// Events skipped for having no usable text.
    pub skipped: usize,
    /// Events where embedding or the store write failed.
    pub failed: usize,
}

/// Embeds all events whose embedding is missing, null or empty.
///
/// Text is the event's title and description joined by a space; events
/// whose text is empty or whitespace-only stay unembedded until their text
/// changes and the job is rerun.
pub async fn run(store: &dyn EventStore, embedder: &dyn Embedder) -> AppResult<BackfillReport> {
    let pending = store.missing_embedding().await?;
    tracing::info!(count = pending.len(), "events to backfill");

    let mut report = BackfillReport::default();
    for event in pending {
        let text = event.embedding_text();
        if text.trim().is_empty() {
            tracing::warn!(event_id = %event.id, "skipping event with no text");
            report.skipped += 1;
            continue;
        }

        let result = match embedder.embed(&text).await {
            Ok(embedding) => store.set_embedding(&event.id, embedding).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                tracing::debug!(event_id = %event.id, title = %event.title, "embedded event");
                report.updated += 1;
            }
            Err(e) => {
                tracing::error!(event_id = %event.id, error = %e, "backfill failed for event");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        updated = report.updated,
        skipped = report.skipped,
        failed = report.failed,
        "backfill complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::{HashEmbedder, MockEmbedder};
    use crate::error::AppError;
    use crate::models::Event;
    use crate::store::InMemoryEventStore;

    fn store_with_mixed_events() -> InMemoryEventStore {
        let mut indexed = Event::new("Indexed", "already embedded");
        indexed.embedding = Some(vec![9.0, 9.0]);

        InMemoryEventStore::with_events(vec![
            Event::new("One", "first un-embedded event"),
            Event::new("Two", "second un-embedded event"),
            Event::new("Three", "third un-embedded event"),
            indexed,
        ])
    }

    #[tokio::test]
    async fn test_backfill_updates_only_unembedded_events() {
        let store = store_with_mixed_events();
        let embedder = HashEmbedder::new(8);

        let report = run(&store, &embedder).await.unwrap();
        assert_eq!(report.updated, 3);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.failed, 0);

        let all = store.all_events().await.unwrap();
        assert!(all.iter().all(|e| e.has_embedding()));
        // The pre-embedded event keeps its original vector.
        let indexed = all.iter().find(|e| e.title == "Indexed").unwrap();
        assert_eq!(indexed.embedding, Some(vec![9.0, 9.0]));
    }

    #[tokio::test]
    async fn test_backfill_is_idempotent() {
        let store = store_with_mixed_events();
        let embedder = HashEmbedder::new(8);

        run(&store, &embedder).await.unwrap();
        let before = store.all_events().await.unwrap();

        let second = run(&store, &embedder).await.unwrap();
        assert_eq!(second, BackfillReport::default());
        assert_eq!(store.all_events().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_backfill_counts_embed_failures_and_continues() {
        let store = InMemoryEventStore::with_events(vec![
            Event::new("One", "text"),
            Event::new("Two", "text"),
        ]);

        let mut embedder = MockEmbedder::new();
        embedder
            .expect_embed()
            .returning(|_| Err(AppError::Embedding("model server down".to_string())));

        let report = run(&store, &embedder).await.unwrap();
        assert_eq!(report.failed, 2);
        assert_eq!(report.updated, 0);
        // Nothing was written; a rerun can retry both events.
        assert!(store.all_events().await.unwrap().iter().all(|e| !e.has_embedding()));
    }

    #[tokio::test]
    async fn test_backfill_skips_events_without_text() {
        let store = InMemoryEventStore::with_events(vec![
            Event::new("", ""),
            Event::new("Named", "with text"),
        ]);
        let embedder = HashEmbedder::new(8);

        let report = run(&store, &embedder).await.unwrap();
        assert_eq!(report.updated, 1);
        assert_eq!(report.skipped, 1);

        let all = store.all_events().await.unwrap();
        let blank = all.iter().find(|e| e.title.is_empty()).unwrap();
        assert!(!blank.has_embedding());
    }
}
