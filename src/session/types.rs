use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-text feedback on a book, as entered by the user.
///
/// The title is not validated against the catalog; readers may comment on
/// anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub title: String,
    pub comment: String,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackEntry {
    pub fn new(title: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            comment: comment.into(),
            submitted_at: Utc::now(),
        }
    }
}

/// A star rating with optional review text for a catalog book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub title: String,
    /// 1 through 5 inclusive, validated at submission.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Review {
    pub fn new(title: impl Into<String>, rating: u8, text: Option<String>) -> Self {
        Self {
            title: title.into(),
            rating,
            text,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_feedback_entry_captures_text() {
        let entry = FeedbackEntry::new("Dune", "Slow start, great finish.");
        assert_eq!(entry.title, "Dune");
        assert_eq!(entry.comment, "Slow start, great finish.");
    }

    #[test]
    fn test_review_serialization_omits_absent_text() {
        let review = Review::new("Dune", 5, None);
        let json = serde_json::to_string(&review).unwrap();
        assert!(!json.contains("\"text\""));

        let review = Review::new("Dune", 4, Some("Worth it.".to_string()));
        let json = serde_json::to_string(&review).unwrap();
        assert!(json.contains("Worth it."));
    }
}
