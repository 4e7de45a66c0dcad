//! Personal notes and assignment deadline tracker library
//!
//! This library provides typed repositories over flat JSON stores for notes
//! and assignments, plus a heuristic risk/scheduling engine for pending
//! assignments.

mod assignment;
mod cli;
mod config;
mod errors;
mod helper;
mod note;
mod repository;
mod risk;
mod storage;
mod types;

// Re-export key components
pub use assignment::*;
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use helper::*;
pub use note::*;
pub use repository::*;
pub use risk::*;
pub use storage::*;
pub use types::*;
