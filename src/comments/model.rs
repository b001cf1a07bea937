use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor comment as kept in memory and in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Creation time in epoch milliseconds, as a string.
    pub id: String,
    pub user_name: String,
    pub content: String,
    /// Data URI of the avatar, if one was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

impl CommentRecord {
    /// First character of the author's name, for the avatar placeholder.
    pub fn initial(&self) -> String {
        self.user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Form contents before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub user_name: String,
    pub content: String,
    pub profile_image: Option<String>,
}

impl CommentDraft {
    pub fn new(user_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            content: content.into(),
            profile_image: None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
