//! Integration tests for the note and assignment repositories against real
//! on-disk JSON stores.

use std::fs;

use chrono::{Duration, Utc};
use serde_json::json;
use tempfile::{tempdir, TempDir};

use dltracker::{
    AssignmentRepository, AssignmentStatus, JsonStore, NewAssignment, NewNote, NotePriority,
    NoteRepository, Subject, TrackerError,
};

fn note_repo() -> (TempDir, NoteRepository) {
    let dir = tempdir().unwrap();
    let repo = NoteRepository::new(JsonStore::new(dir.path().join("notes.json"))).unwrap();
    (dir, repo)
}

fn assignment_repo() -> (TempDir, AssignmentRepository) {
    let dir = tempdir().unwrap();
    let repo =
        AssignmentRepository::new(JsonStore::new(dir.path().join("assignments.json"))).unwrap();
    (dir, repo)
}

fn sample_note(title: &str) -> NewNote {
    NewNote {
        title: title.to_string(),
        content: "remember this".to_string(),
        priority: NotePriority::High,
        tags: vec!["school".to_string(), "exam".to_string()],
    }
}

fn sample_assignment(title: &str) -> NewAssignment {
    let mut input = NewAssignment::new(title, Utc::now() + Duration::days(4));
    input.description = "chapter 3 problems".to_string();
    input.subject = Subject::Math;
    input.priority = 7;
    input.estimated_hours = 3.5;
    input
}

#[test]
fn create_note_assigns_monotonic_ids_starting_at_one() {
    let (_dir, repo) = note_repo();

    let first = repo.create(sample_note("first")).unwrap();
    let second = repo.create(sample_note("second")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[test]
fn created_note_round_trips_through_the_store() {
    let (_dir, repo) = note_repo();

    let created = repo.create(sample_note("round trip")).unwrap();
    let loaded = repo.get_all();

    assert_eq!(loaded, vec![created]);
}

#[test]
fn create_note_rejects_empty_title_and_writes_nothing() {
    let (_dir, repo) = note_repo();

    let err = repo
        .create(NewNote {
            title: "   ".to_string(),
            ..NewNote::default()
        })
        .unwrap_err();

    assert!(matches!(err, TrackerError::Validation(_)));
    assert!(repo.get_all().is_empty());
}

#[test]
fn note_with_missing_tags_field_defaults_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(
        &path,
        json!([{
            "id": 1,
            "title": "no tags",
            "content": "",
            "priority": "medium",
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z"
        }])
        .to_string(),
    )
    .unwrap();

    let repo = NoteRepository::new(JsonStore::new(path)).unwrap();
    let notes = repo.get_all();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].tags.is_empty());
}

#[test]
fn invalid_note_record_is_skipped_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(
        &path,
        json!([
            {
                "id": 1,
                "title": "valid",
                "content": "",
                "priority": "low",
                "created_at": "2026-01-01T00:00:00Z",
                "updated_at": "2026-01-01T00:00:00Z",
                "tags": []
            },
            {
                "id": 2,
                "title": "bad priority",
                "content": "",
                "priority": "urgent",
                "created_at": "2026-01-01T00:00:00Z",
                "updated_at": "2026-01-01T00:00:00Z",
                "tags": []
            }
        ])
        .to_string(),
    )
    .unwrap();

    let repo = NoteRepository::new(JsonStore::new(path)).unwrap();
    let notes = repo.get_all();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "valid");
}

#[test]
fn invalid_record_is_dropped_permanently_on_next_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(
        &path,
        json!([{
            "id": 7,
            "title": "bad",
            "content": "",
            "priority": "urgent",
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z",
            "tags": []
        }])
        .to_string(),
    )
    .unwrap();

    let repo = NoteRepository::new(JsonStore::new(path.clone())).unwrap();
    // Invalid record still sits in the file until a save happens.
    assert!(fs::read_to_string(&path).unwrap().contains("urgent"));

    repo.create(sample_note("triggers save")).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("urgent"));
    // Only validated records were persisted, so IDs restart from 1.
    assert_eq!(repo.get_all().len(), 1);
    assert_eq!(repo.get_all()[0].id, 1);
}

#[test]
fn create_assignment_assigns_next_id_after_existing_max() {
    let (_dir, repo) = assignment_repo();

    repo.create(sample_assignment("one")).unwrap();
    repo.create(sample_assignment("two")).unwrap();
    let third = repo.create(sample_assignment("three")).unwrap();

    assert_eq!(third.id, 3);
}

#[test]
fn created_assignment_round_trips_with_identical_fields() {
    let (_dir, repo) = assignment_repo();

    let created = repo.create(sample_assignment("round trip")).unwrap();
    let loaded = repo.get_all();

    assert_eq!(loaded, vec![created]);
}

#[test]
fn create_assignment_collects_all_validation_errors() {
    let (_dir, repo) = assignment_repo();

    let mut input = sample_assignment("bad input");
    input.title = String::new();
    input.priority = 0;
    input.estimated_hours = -2.0;

    match repo.create(input).unwrap_err() {
        TrackerError::Validation(err) => assert_eq!(err.errors.len(), 3),
        other => panic!("expected validation error, got {other}"),
    }
    assert!(repo.get_all().is_empty());
}

#[test]
fn update_status_persists_the_new_status() {
    let (_dir, repo) = assignment_repo();

    let created = repo.create(sample_assignment("finish me")).unwrap();
    let found = repo
        .update_status(created.id, AssignmentStatus::Completed)
        .unwrap();

    assert!(found);
    assert_eq!(repo.get_all()[0].status, AssignmentStatus::Completed);
}

#[test]
fn update_status_on_unknown_id_reports_not_found_and_leaves_store_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments.json");
    let repo = AssignmentRepository::new(JsonStore::new(path.clone())).unwrap();
    repo.create(sample_assignment("untouched")).unwrap();

    let before = fs::read_to_string(&path).unwrap();
    let found = repo.update_status(99, AssignmentStatus::Completed).unwrap();
    let after = fs::read_to_string(&path).unwrap();

    assert!(!found);
    assert_eq!(before, after);
}

#[test]
fn invalid_assignment_record_is_skipped_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assignments.json");
    fs::write(
        &path,
        json!([
            {
                "id": 1,
                "title": "valid",
                "description": "",
                "subject": "science",
                "due_date": "2026-04-01T00:00:00Z",
                "status": "in_progress",
                "priority": 5,
                "estimated_hours": 2.0,
                "created_at": "2026-03-01T00:00:00Z"
            },
            {
                "id": 2,
                "title": "unknown subject",
                "description": "",
                "subject": "history",
                "due_date": "2026-04-01T00:00:00Z",
                "status": "not_started",
                "priority": 5,
                "estimated_hours": 2.0,
                "created_at": "2026-03-01T00:00:00Z"
            },
            {
                "id": 3,
                "title": "missing due date",
                "description": "",
                "subject": "math",
                "status": "not_started",
                "priority": 5,
                "estimated_hours": 2.0,
                "created_at": "2026-03-01T00:00:00Z"
            }
        ])
        .to_string(),
    )
    .unwrap();

    let repo = AssignmentRepository::new(JsonStore::new(path)).unwrap();
    let assignments = repo.get_all();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].subject, Subject::Science);
}

#[test]
fn get_all_preserves_file_order() {
    let (_dir, repo) = assignment_repo();

    for title in ["a", "b", "c"] {
        repo.create(sample_assignment(title)).unwrap();
    }

    let titles: Vec<_> = repo.get_all().into_iter().map(|a| a.title).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}
