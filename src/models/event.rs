use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event as stored in the event collection.
///
/// `title` and `description` feed the embedding; `category`, `image`,
/// `date` and `location` are display metadata passed through unmodified.
/// `date` is a display string, not a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    /// Absent or empty means "not yet indexed".
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
    /// User ids that expressed interest in this event.
    #[serde(default)]
    pub interested_users: Vec<String>,
    /// Seat labels; only the count matters here.
    #[serde(default)]
    pub booked_seats: Vec<String>,
}

impl Event {
    /// Creates a new event with a generated id and no engagement
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            category: None,
            image: None,
            date: None,
            location: None,
            embedding: None,
            interested_users: Vec::new(),
            booked_seats: Vec::new(),
        }
    }

    /// True when the event carries a non-empty embedding and can be ranked
    /// by similarity.
    pub fn has_embedding(&self) -> bool {
        self.embedding.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Engagement count used by the popularity fallback.
    pub fn engagement(&self) -> usize {
        self.interested_users.len() + self.booked_seats.len()
    }

    /// Text fed to the embedding function: title and description joined by
    /// a space. May be whitespace-only when both fields are empty.
    pub fn embedding_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_embedding_excludes_empty_vector() {
        let mut event = Event::new("Jazz Night", "Live quartet");
        assert!(!event.has_embedding());

        event.embedding = Some(vec![]);
        assert!(!event.has_embedding());

        event.embedding = Some(vec![0.1, 0.2]);
        assert!(event.has_embedding());
    }

    #[test]
    fn test_engagement_counts_interest_and_bookings() {
        let mut event = Event::new("Jazz Night", "Live quartet");
        event.interested_users = vec!["u1".into(), "u2".into()];
        event.booked_seats = vec!["A1".into(), "A2".into(), "A3".into()];
        assert_eq!(event.engagement(), 5);
    }

    #[test]
    fn test_embedding_text_joins_title_and_description() {
        let event = Event::new("Jazz Night", "Live quartet");
        assert_eq!(event.embedding_text(), "Jazz Night Live quartet");

        let empty = Event::new("", "");
        assert!(empty.embedding_text().trim().is_empty());
    }
}
