use serde::{Deserialize, Serialize};

use super::Event;

/// A scored event returned to the client.
///
/// Transient: built during ranking and dropped after serialization. The
/// `is_popular` flag is serialized (as `isPopular`) only on
/// popularity-fallback results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub score: f32,
    #[serde(rename = "isPopular", skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
}

impl Recommendation {
    /// Projects an event into a scored result.
    pub fn scored(event: &Event, score: f32) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            category: event.category.clone(),
            image: event.image.clone(),
            date: event.date.clone(),
            location: event.location.clone(),
            score,
            is_popular: None,
        }
    }

    /// Projects an event into a popularity-fallback result.
    pub fn popular(event: &Event, score: f32) -> Self {
        Self {
            is_popular: Some(true),
            ..Self::scored(event, score)
        }
    }
}
