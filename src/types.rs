//! Core shared types for the dltracker application.
//!
//! This module contains the closed enum sets persisted to the JSON stores,
//! the crate-wide `Result` alias, and the CLI command definitions.

use clap::{Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::TrackerError;

/// A specialized Result type for dltracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Priority of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum NotePriority {
    Low,
    #[default]
    Medium,
    High,
}

impl NotePriority {
    /// The string form used in the JSON stores.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotePriority::Low => "low",
            NotePriority::Medium => "medium",
            NotePriority::High => "high",
        }
    }
}

/// Subject area an assignment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Science,
    ComputerScience,
    #[default]
    Other,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::ComputerScience => "computer_science",
            Subject::Other => "other",
        }
    }
}

/// Completion status of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::NotStarted => "not_started",
            AssignmentStatus::InProgress => "in_progress",
            AssignmentStatus::Completed => "completed",
        }
    }
}

/// Available subcommands for the dltracker application
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new note
    CreateNote {
        /// Title of the note
        #[clap(short = 'T', long)]
        title: String,

        /// Content of the note
        #[clap(short, long, default_value = "")]
        content: String,

        /// Priority of the note
        #[clap(short, long, value_enum, default_value_t = NotePriority::Medium)]
        priority: NotePriority,

        /// Tags to associate with the note (comma-separated)
        #[clap(short, long)]
        tags: Option<String>,
    },

    /// List all notes
    ListNotes,

    /// Create a new assignment
    CreateAssignment {
        /// Title of the assignment
        #[clap(short = 'T', long)]
        title: String,

        /// Free-form description
        #[clap(short = 'D', long, default_value = "")]
        description: String,

        /// Subject the assignment belongs to
        #[clap(short, long, value_enum, default_value_t = Subject::Other)]
        subject: Subject,

        /// Due date in YYYY-MM-DD format
        #[clap(short = 'd', long)]
        due: String,

        /// Priority from 1 (lowest) to 10 (highest)
        #[clap(short, long, default_value_t = 5)]
        priority: u8,

        /// Estimated hours of work
        #[clap(short = 'e', long, default_value_t = 1.0)]
        estimated_hours: f64,
    },

    /// List all assignments
    ListAssignments,

    /// Mark an assignment as completed
    Complete {
        /// ID of the assignment to mark completed
        id: u64,
    },

    /// Show completion risk for every pending assignment
    Analyze,

    /// Recommend a work schedule for pending assignments
    Schedule {
        /// Hours available for allocation
        #[clap(long, default_value_t = 8.0)]
        hours: f64,
    },

    /// Show aggregate counts across both stores
    Summary,
}
