//! CLI module for the dltracker application
//!
//! This module handles the command-line interface for interacting with the
//! note and assignment repositories and the risk engine.

use chrono::Utc;
use console::style;

use crate::{
    parse_due_date, parse_tags, predict_completion_risk, recommend_work_schedule, Assignment,
    AssignmentRepository, AssignmentStatus, Commands, Config, JsonStore, NewAssignment, NewNote,
    NotePriority, NoteRepository, Result, RiskLevel, Subject,
};

/// CLI application handler - dispatches commands to the repositories and
/// the risk engine.
pub struct App {
    note_repo: NoteRepository,
    assignment_repo: AssignmentRepository,
}

impl App {
    /// Opens both repositories under the configured data directory.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            note_repo: NoteRepository::new(JsonStore::new(config.notes_file()))?,
            assignment_repo: AssignmentRepository::new(JsonStore::new(config.assignments_file()))?,
        })
    }

    /// Run the CLI application with the given command
    pub fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::CreateNote {
                title,
                content,
                priority,
                tags,
            } => self.create_note(title, content, priority, tags)?,

            Commands::ListNotes => self.list_notes(),

            Commands::CreateAssignment {
                title,
                description,
                subject,
                due,
                priority,
                estimated_hours,
            } => self.create_assignment(
                title,
                description,
                subject,
                due,
                priority,
                estimated_hours,
            )?,

            Commands::ListAssignments => self.list_assignments(),

            Commands::Complete { id } => self.complete_assignment(id)?,

            Commands::Analyze => self.analyze(),

            Commands::Schedule { hours } => self.schedule(hours),

            Commands::Summary => self.summary(),
        }

        Ok(())
    }

    fn create_note(
        &self,
        title: String,
        content: String,
        priority: NotePriority,
        tags: Option<String>,
    ) -> Result<()> {
        let note = self.note_repo.create(NewNote {
            title,
            content,
            priority,
            tags: parse_tags(tags),
        })?;
        println!("{} Note created (ID: {})", style("✓").green(), note.id);
        Ok(())
    }

    fn list_notes(&self) {
        let notes = self.note_repo.get_all();
        if notes.is_empty() {
            println!("No notes found");
            return;
        }

        println!("--- Notes ({} total) ---", notes.len());
        for note in notes {
            println!(
                "ID: {} | {} | {}",
                note.id,
                style(&note.title).bold(),
                note.priority.as_str()
            );
            println!("Created: {}", note.created_at.format("%Y-%m-%d %H:%M"));
            if !note.tags.is_empty() {
                println!("Tags: {}", note.tags.join(", "));
            }
            println!("{}", "-".repeat(30));
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn create_assignment(
        &self,
        title: String,
        description: String,
        subject: Subject,
        due: String,
        priority: u8,
        estimated_hours: f64,
    ) -> Result<()> {
        let assignment = self.assignment_repo.create(NewAssignment {
            title,
            description,
            subject,
            due_date: parse_due_date(&due)?,
            status: AssignmentStatus::NotStarted,
            priority,
            estimated_hours,
        })?;
        println!(
            "{} Assignment created (ID: {})",
            style("✓").green(),
            assignment.id
        );
        Ok(())
    }

    fn list_assignments(&self) {
        let assignments = self.assignment_repo.get_all();
        if assignments.is_empty() {
            println!("No assignments found");
            return;
        }

        println!("--- Assignments ({} total) ---", assignments.len());
        for assignment in assignments {
            let icon = if assignment.status == AssignmentStatus::Completed {
                style("✓").green()
            } else {
                style("○").dim()
            };
            println!("{} ID: {} | {}", icon, assignment.id, assignment.title);
            println!(
                "   Due: {} | Priority: {}/10",
                assignment.due_date.format("%Y-%m-%d"),
                assignment.priority
            );
            println!(
                "   Status: {} | Hours: {}",
                assignment.status.as_str(),
                assignment.estimated_hours
            );
            println!("{}", "-".repeat(40));
        }
    }

    fn complete_assignment(&self, id: u64) -> Result<()> {
        if self
            .assignment_repo
            .update_status(id, AssignmentStatus::Completed)?
        {
            println!("{} Assignment marked as completed", style("✓").green());
        } else {
            println!("{} Assignment not found", style("✗").red());
        }
        Ok(())
    }

    fn analyze(&self) {
        let assignments = self.assignment_repo.get_all();
        let pending = pending_assignments(&assignments);
        if pending.is_empty() {
            println!("No pending assignments for analysis");
            return;
        }

        let now = Utc::now();
        println!("--- Risk Analysis ({} pending) ---", pending.len());
        for assignment in pending {
            let risk = predict_completion_risk(assignment, now);
            println!(
                "{} {}: {} (score: {:.2})",
                risk_marker(risk.level),
                assignment.title,
                risk.level.as_str(),
                risk.score
            );
        }
    }

    fn schedule(&self, hours: f64) {
        let assignments = self.assignment_repo.get_all();
        let schedule = recommend_work_schedule(&assignments, hours, Utc::now());
        if schedule.is_empty() {
            println!("Nothing to schedule");
            return;
        }

        println!("--- Recommended Work Schedule ---");
        for (i, entry) in schedule.iter().enumerate() {
            println!(
                "{}. {}: {:.1}h (risk: {})",
                i + 1,
                entry.assignment.title,
                entry.allocated_hours,
                entry.risk.as_str()
            );
        }
    }

    fn summary(&self) {
        let notes = self.note_repo.get_all();
        let assignments = self.assignment_repo.get_all();

        let completed = assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Completed)
            .count();
        let pending = assignments.len() - completed;

        println!("--- Summary ---");
        println!("Notes: {}", notes.len());
        println!("Assignments: {}", assignments.len());
        println!("Completed assignments: {completed}");
        println!("Pending assignments: {pending}");

        if pending > 0 {
            let total_hours: f64 = pending_assignments(&assignments)
                .iter()
                .map(|a| a.estimated_hours)
                .sum();
            println!("Total estimated work: {total_hours:.1} hours");
        }
    }
}

fn pending_assignments(assignments: &[Assignment]) -> Vec<&Assignment> {
    assignments
        .iter()
        .filter(|a| a.status != AssignmentStatus::Completed)
        .collect()
}

fn risk_marker(level: RiskLevel) -> console::StyledObject<&'static str> {
    match level {
        RiskLevel::Low => style("●").green(),
        RiskLevel::Medium => style("●").yellow(),
        RiskLevel::High => style("●").red(),
    }
}
