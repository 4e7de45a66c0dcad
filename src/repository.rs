//! Typed repositories over the flat-file JSON stores.
//!
//! Both repositories follow the same pattern: `get_all` decodes every raw
//! record it can and skips the rest with a warning, `create` assigns the
//! next monotonic ID and rewrites the whole collection, and mutations
//! always persist a full snapshot of the validated in-memory view. A record
//! that fails to decode therefore survives in the file only until the next
//! save of its collection.

use chrono::Utc;
use log::{info, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{Assignment, AssignmentStatus, JsonStore, NewAssignment, NewNote, Note, Result};

/// Decodes each raw record to an entity, skipping records that are missing
/// required fields or hold values outside their closed sets.
fn decode_records<T: DeserializeOwned>(kind: &str, raw: Vec<Value>) -> Vec<T> {
    raw.into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!("Skipping invalid {kind} record: {e}");
                None
            }
        })
        .collect()
}

fn encode_records<T: Serialize>(entities: &[T]) -> Result<Vec<Value>> {
    entities
        .iter()
        .map(|entity| serde_json::to_value(entity).map_err(Into::into))
        .collect()
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

/// Repository for notes, backed by a single JSON store.
pub struct NoteRepository {
    store: JsonStore,
}

impl NoteRepository {
    /// Opens the repository, making sure the backing store exists.
    pub fn new(store: JsonStore) -> Result<Self> {
        store.ensure()?;
        Ok(Self { store })
    }

    /// All decodable notes, in file order.
    pub fn get_all(&self) -> Vec<Note> {
        decode_records("note", self.store.load())
    }

    /// Validates the input, assigns the next ID, stamps both timestamps,
    /// and persists the whole collection.
    pub fn create(&self, input: NewNote) -> Result<Note> {
        input.validate()?;

        let mut notes = self.get_all();
        let id = next_id(notes.iter().map(|n| n.id));
        let note = Note::from_input(id, input, Utc::now());

        notes.push(note.clone());
        self.store.save(&encode_records(&notes)?)?;
        info!("Created note with ID: {id}");
        Ok(note)
    }
}

/// Repository for assignments, backed by a single JSON store.
pub struct AssignmentRepository {
    store: JsonStore,
}

impl AssignmentRepository {
    /// Opens the repository, making sure the backing store exists.
    pub fn new(store: JsonStore) -> Result<Self> {
        store.ensure()?;
        Ok(Self { store })
    }

    /// All decodable assignments, in file order.
    pub fn get_all(&self) -> Vec<Assignment> {
        decode_records("assignment", self.store.load())
    }

    /// Validates the input, assigns the next ID, stamps the creation
    /// timestamp, and persists the whole collection.
    pub fn create(&self, input: NewAssignment) -> Result<Assignment> {
        input.validate()?;

        let mut assignments = self.get_all();
        let id = next_id(assignments.iter().map(|a| a.id));
        let assignment = Assignment::from_input(id, input, Utc::now());

        assignments.push(assignment.clone());
        self.store.save(&encode_records(&assignments)?)?;
        info!("Created assignment with ID: {id}");
        Ok(assignment)
    }

    /// Sets the status of the assignment with the given ID and persists the
    /// collection. Returns `Ok(false)` without writing when no assignment
    /// matches.
    pub fn update_status(&self, id: u64, status: AssignmentStatus) -> Result<bool> {
        let mut assignments = self.get_all();
        let Some(assignment) = assignments.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };

        assignment.status = status;
        self.store.save(&encode_records(&assignments)?)?;
        info!("Updated status of assignment {id} to {}", status.as_str());
        Ok(true)
    }
}
