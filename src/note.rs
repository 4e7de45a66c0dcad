//! The note entity and its creation input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{FieldError, NotePriority, ValidationError};

/// Represents a single note in our system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for the note
    pub id: u64,
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
    /// Priority of the note
    pub priority: NotePriority,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    /// Tags for organization
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Builds a note from a validated creation input, stamping both
    /// timestamps with `now`.
    pub fn from_input(id: u64, input: NewNote, now: DateTime<Utc>) -> Self {
        Note {
            id,
            title: input.title,
            content: input.content,
            priority: input.priority,
            created_at: now,
            updated_at: now,
            tags: input.tags,
        }
    }
}

/// Input for creating a note.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub priority: NotePriority,
    pub tags: Vec<String>,
}

impl NewNote {
    /// Checks the input, collecting every field problem before failing.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "must not be empty"));
        }
        if self.tags.iter().any(|t| t.trim().is_empty()) {
            errors.push(FieldError::new("tags", "tags must not be empty strings"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}
