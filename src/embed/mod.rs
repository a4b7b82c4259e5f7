//! Embedding function boundary.
//!
//! The model itself is opaque: the core only needs `embed(text) -> vector`.
//! [`RemoteEmbedder`] calls a model server over HTTP; [`HashEmbedder`] is a
//! deterministic stand-in for tests and local runs. Re-embedding identical
//! text is treated as idempotent, and callers never pass empty or
//! whitespace-only text.

use crate::error::AppResult;

pub mod hash;
pub mod remote;

pub use hash::HashEmbedder;
pub use remote::RemoteEmbedder;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Embedder: Send + Sync {
    /// Embeds text into a fixed-dimension vector.
    async fn embed(&self, text: &str) -> AppResult<Vec<f32>>;
}
