//! The assignment entity and its creation input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AssignmentStatus, FieldError, Subject, ValidationError};

/// Represents an assignment with a deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier for the assignment
    pub id: u64,
    /// Assignment title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Subject the assignment belongs to
    pub subject: Subject,
    /// When the assignment is due
    pub due_date: DateTime<Utc>,
    /// Completion status
    pub status: AssignmentStatus,
    /// Priority from 1 (lowest) to 10 (highest)
    pub priority: u8,
    /// Estimated hours of work
    pub estimated_hours: f64,
    /// When the assignment was created
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    /// Whole days remaining before the due date, clamped to zero.
    ///
    /// Overdue assignments report 0, the same as assignments due today.
    pub fn days_until_due(&self, now: DateTime<Utc>) -> i64 {
        (self.due_date - now).num_days().max(0)
    }

    /// Builds an assignment from a validated creation input.
    pub fn from_input(id: u64, input: NewAssignment, now: DateTime<Utc>) -> Self {
        Assignment {
            id,
            title: input.title,
            description: input.description,
            subject: input.subject,
            due_date: input.due_date,
            status: input.status,
            priority: input.priority,
            estimated_hours: input.estimated_hours,
            created_at: now,
        }
    }
}

/// Input for creating an assignment.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub description: String,
    pub subject: Subject,
    pub due_date: DateTime<Utc>,
    pub status: AssignmentStatus,
    pub priority: u8,
    pub estimated_hours: f64,
}

impl NewAssignment {
    /// A minimal input carrying the defaults for all optional fields.
    pub fn new(title: impl Into<String>, due_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            subject: Subject::Other,
            due_date,
            status: AssignmentStatus::NotStarted,
            priority: 5,
            estimated_hours: 1.0,
        }
    }

    /// Checks the input, collecting every field problem before failing.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "must not be empty"));
        }
        if !(1..=10).contains(&self.priority) {
            errors.push(FieldError::new(
                "priority",
                format!("must be between 1 and 10, got {}", self.priority),
            ));
        }
        if !self.estimated_hours.is_finite() || self.estimated_hours < 0.0 {
            errors.push(FieldError::new(
                "estimated_hours",
                format!("must be a non-negative number, got {}", self.estimated_hours),
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}
