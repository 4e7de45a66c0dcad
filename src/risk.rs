//! Completion-risk scoring and work-schedule recommendation.
//!
//! Everything here is a pure function of the assignments and the supplied
//! clock; callers pass `now` explicitly so results are reproducible.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Assignment, AssignmentStatus};

/// Default number of hours the scheduler may allocate.
pub const DEFAULT_AVAILABLE_HOURS: f64 = 8.0;

/// Risk classification for a pending assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classifies a score in [0, 1]. Boundaries are exact: 0.3 is already
    /// medium, 0.7 is already high.
    pub fn from_score(score: f64) -> Self {
        if score < 0.3 {
            RiskLevel::Low
        } else if score < 0.7 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Result of scoring a single assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Heuristic score in [0, 1].
    pub score: f64,
}

/// One allocation in a recommended work schedule.
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    pub assignment: Assignment,
    pub allocated_hours: f64,
    pub risk: RiskLevel,
}

/// Scores how likely an assignment is to slip, from deadline proximity,
/// declared priority, and estimated workload.
///
/// Three factors, each normalized to [0, 1]:
/// - days: grows linearly as the deadline approaches within a 10-day
///   horizon, zero once 10+ days remain
/// - priority: linear in the declared 1-10 priority
/// - hours: linear in the estimate, capped at 20 hours
///
/// Weighted 0.4/0.4/0.2 and clamped to [0, 1].
pub fn predict_completion_risk(assignment: &Assignment, now: DateTime<Utc>) -> RiskAssessment {
    let days_factor = (10 - assignment.days_until_due(now)).max(0) as f64 / 10.0;
    let priority_factor = f64::from(assignment.priority) / 10.0;
    let hours_factor = (assignment.estimated_hours / 20.0).min(1.0);

    let score = (days_factor * 0.4 + priority_factor * 0.4 + hours_factor * 0.2).clamp(0.0, 1.0);

    RiskAssessment {
        level: RiskLevel::from_score(score),
        score,
    }
}

/// Greedily allocates `available_hours` across pending assignments, most
/// urgent first.
///
/// Urgency blends the risk score with inverse days-remaining, so imminent
/// deadlines can outrank higher-risk but farther-off work. Each included
/// assignment receives 60% of its estimate, capped by the remaining budget;
/// allocations of 0.5 hours or less are dropped entirely rather than
/// recorded as slivers. Completed assignments are never scheduled.
pub fn recommend_work_schedule(
    assignments: &[Assignment],
    available_hours: f64,
    now: DateTime<Utc>,
) -> Vec<ScheduleEntry> {
    let mut scored: Vec<(&Assignment, RiskAssessment, f64)> = assignments
        .iter()
        .filter(|a| a.status != AssignmentStatus::Completed)
        .map(|a| {
            let risk = predict_completion_risk(a, now);
            let urgency = 0.7 * risk.score + 0.3 * (1.0 / a.days_until_due(now).max(1) as f64);
            (a, risk, urgency)
        })
        .collect();

    if scored.is_empty() {
        return Vec::new();
    }

    // Stable sort: ties keep their original relative order.
    scored.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    let mut schedule = Vec::new();
    let mut remaining = available_hours;

    for (assignment, risk, _) in scored {
        if remaining <= 0.0 {
            break;
        }

        let allocated = (assignment.estimated_hours * 0.6).min(remaining);
        if allocated > 0.5 {
            schedule.push(ScheduleEntry {
                assignment: assignment.clone(),
                allocated_hours: allocated,
                risk: risk.level,
            });
            remaining -= allocated;
        }
    }

    schedule
}
