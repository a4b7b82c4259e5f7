//! Event recommendation service.
//!
//! Builds a per-request user profile vector from the embeddings of events
//! the user marked interest in, ranks every other embedded event by cosine
//! similarity to it, and falls back to an engagement-count ranking whenever
//! no personalization signal exists.

pub mod api;
pub mod config;
pub mod embed;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
