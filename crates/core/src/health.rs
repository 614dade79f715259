//! Event health computation against the J-7 deadline.
//!
//! The J-7 rule: all deliverables for an event should be approved seven
//! days before the event date. Health is a pure function of stored state
//! and an explicit `as_of` date; it is never persisted, so it can be
//! re-derived at any point without staleness.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::deliverable::DeliverableStatus;
use crate::types::Date;

/// Days before the event date by which all deliverables must be approved.
pub const DEADLINE_DAYS: i64 = 7;

/// Valid health status strings (API representation).
pub const HEALTH_GREEN: &str = "green";
pub const HEALTH_ORANGE: &str = "orange";
pub const HEALTH_RED: &str = "red";

/// Traffic-light summary of an event's deliverable completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Green,
    Orange,
    Red,
}

impl HealthStatus {
    /// Convert to the API string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => HEALTH_GREEN,
            Self::Orange => HEALTH_ORANGE,
            Self::Red => HEALTH_RED,
        }
    }
}

/// The slice of a deliverable row that health evaluation needs.
///
/// Callers pre-load the event's deliverables and map them into snapshots;
/// this keeps the evaluator free of database dependencies.
#[derive(Debug, Clone, Copy)]
pub struct DeliverableSnapshot {
    pub status: DeliverableStatus,
    pub is_enabled: bool,
}

/// The J-7 deadline for an event.
pub fn deadline(event_date: Date) -> Date {
    event_date - Duration::days(DEADLINE_DAYS)
}

/// Whole days from `as_of` until the J-7 deadline. Negative means overdue.
pub fn days_until_deadline(event_date: Date, as_of: Date) -> i64 {
    (deadline(event_date) - as_of).num_days()
}

/// Whole days from `as_of` until the event itself.
pub fn days_until_event(event_date: Date, as_of: Date) -> i64 {
    (event_date - as_of).num_days()
}

/// Whether `as_of` is strictly past the J-7 deadline.
pub fn is_past_deadline(event_date: Date, as_of: Date) -> bool {
    days_until_deadline(event_date, as_of) < 0
}

/// Whether a single deliverable is late: past J-7 and not approved.
///
/// Disabled deliverables are never late; they are excluded from tracking.
pub fn is_late(event_date: Date, as_of: Date, snapshot: &DeliverableSnapshot) -> bool {
    snapshot.is_enabled
        && is_past_deadline(event_date, as_of)
        && snapshot.status != DeliverableStatus::Approved
}

/// Compute the traffic-light health of an event.
///
/// Only enabled deliverables are considered. The rules, in order:
///
/// 1. Nothing to track => `green`.
/// 2. Everything approved => `green`, regardless of date.
/// 3. Strictly past the J-7 deadline => `red`.
/// 4. Otherwise => `orange`.
pub fn evaluate(
    deliverables: &[DeliverableSnapshot],
    event_date: Date,
    as_of: Date,
) -> HealthStatus {
    let considered: Vec<&DeliverableSnapshot> =
        deliverables.iter().filter(|d| d.is_enabled).collect();

    if considered.is_empty() {
        return HealthStatus::Green;
    }

    let all_approved = considered
        .iter()
        .all(|d| d.status == DeliverableStatus::Approved);
    if all_approved {
        return HealthStatus::Green;
    }

    if is_past_deadline(event_date, as_of) {
        return HealthStatus::Red;
    }

    HealthStatus::Orange
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
