//! Deliverable status workflow and template categories.
//!
//! Statuses and categories are stored as strings in the database (with
//! CHECK constraints) and mapped onto closed enums here so the workflow
//! state machine gets exhaustiveness checking.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid deliverable workflow statuses (stored in `event_deliverables.status`).
pub const STATUS_TODO: &str = "todo";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_REVIEW: &str = "review";
pub const STATUS_CHANGES_REQUESTED: &str = "changes";
pub const STATUS_APPROVED: &str = "approved";

/// All valid status strings.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_TODO,
    STATUS_IN_PROGRESS,
    STATUS_REVIEW,
    STATUS_CHANGES_REQUESTED,
    STATUS_APPROVED,
];

/// Valid template categories (stored in `deliverable_templates.category`).
pub const CATEGORY_SCREEN: &str = "screen";
pub const CATEGORY_PRINT: &str = "print";
pub const CATEGORY_SOCIAL: &str = "social";
pub const CATEGORY_OTHER: &str = "other";

/// All valid category strings.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_SCREEN,
    CATEGORY_PRINT,
    CATEGORY_SOCIAL,
    CATEGORY_OTHER,
];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Workflow status of a single event deliverable.
///
/// ```text
/// todo -> in_progress -> review -> { approved | changes }
///                          ^            |
///                          +-- changes -+  (resubmission loop)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableStatus {
    Todo,
    InProgress,
    Review,
    ChangesRequested,
    Approved,
}

impl DeliverableStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_TODO => Ok(Self::Todo),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_REVIEW => Ok(Self::Review),
            STATUS_CHANGES_REQUESTED => Ok(Self::ChangesRequested),
            STATUS_APPROVED => Ok(Self::Approved),
            _ => Err(format!(
                "Invalid deliverable status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => STATUS_TODO,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Review => STATUS_REVIEW,
            Self::ChangesRequested => STATUS_CHANGES_REQUESTED,
            Self::Approved => STATUS_APPROVED,
        }
    }

    /// Whether the workflow allows moving from `self` to `next`.
    ///
    /// `approved` is terminal; reopening it is an explicit external action
    /// that does not go through the normal workflow.
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Todo, Self::InProgress)
                | (Self::InProgress, Self::Review)
                | (Self::Review, Self::Approved)
                | (Self::Review, Self::ChangesRequested)
                | (Self::ChangesRequested, Self::Review)
        )
    }
}

/// Validate a status transition, producing a human-readable error.
pub fn validate_transition(
    from: DeliverableStatus,
    to: DeliverableStatus,
) -> Result<(), String> {
    if from == to || from.can_transition_to(to) {
        Ok(())
    } else {
        Err(format!(
            "Cannot move deliverable from '{}' to '{}'",
            from.as_str(),
            to.as_str()
        ))
    }
}

/// Category of a deliverable template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Screen,
    Print,
    Social,
    Other,
}

impl Category {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            CATEGORY_SCREEN => Ok(Self::Screen),
            CATEGORY_PRINT => Ok(Self::Print),
            CATEGORY_SOCIAL => Ok(Self::Social),
            CATEGORY_OTHER => Ok(Self::Other),
            _ => Err(format!(
                "Invalid category '{s}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Screen => CATEGORY_SCREEN,
            Self::Print => CATEGORY_PRINT,
            Self::Social => CATEGORY_SOCIAL,
            Self::Other => CATEGORY_OTHER,
        }
    }
}

/// Validate that a category string is valid.
pub fn validate_category(category: &str) -> Result<(), String> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(format!(
            "Invalid category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        ))
    }
}

/// Validate that a status string is valid.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid deliverable status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- DeliverableStatus ----------------------------------------------------

    #[test]
    fn status_round_trip() {
        for status in &[
            DeliverableStatus::Todo,
            DeliverableStatus::InProgress,
            DeliverableStatus::Review,
            DeliverableStatus::ChangesRequested,
            DeliverableStatus::Approved,
        ] {
            assert_eq!(
                DeliverableStatus::from_str_value(status.as_str()).unwrap(),
                *status
            );
        }
    }

    #[test]
    fn status_from_str_invalid() {
        let result = DeliverableStatus::from_str_value("done");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid deliverable status"));
    }

    #[test]
    fn changes_requested_maps_to_short_string() {
        assert_eq!(DeliverableStatus::ChangesRequested.as_str(), "changes");
    }

    // -- Transitions ----------------------------------------------------------

    #[test]
    fn forward_transitions_allowed() {
        use DeliverableStatus::*;
        assert!(Todo.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Review));
        assert!(Review.can_transition_to(Approved));
        assert!(Review.can_transition_to(ChangesRequested));
    }

    #[test]
    fn resubmission_loop_allowed() {
        assert!(DeliverableStatus::ChangesRequested
            .can_transition_to(DeliverableStatus::Review));
    }

    #[test]
    fn skipping_stages_rejected() {
        use DeliverableStatus::*;
        assert!(!Todo.can_transition_to(Review));
        assert!(!Todo.can_transition_to(Approved));
        assert!(!InProgress.can_transition_to(Approved));
    }

    #[test]
    fn approved_is_terminal() {
        use DeliverableStatus::*;
        for next in &[Todo, InProgress, Review, ChangesRequested] {
            assert!(!Approved.can_transition_to(*next));
        }
    }

    #[test]
    fn backwards_transitions_rejected() {
        use DeliverableStatus::*;
        assert!(!Review.can_transition_to(Todo));
        assert!(!InProgress.can_transition_to(Todo));
    }

    #[test]
    fn validate_transition_same_status_is_noop() {
        assert!(validate_transition(
            DeliverableStatus::Review,
            DeliverableStatus::Review
        )
        .is_ok());
    }

    #[test]
    fn validate_transition_illegal_has_message() {
        let result = validate_transition(
            DeliverableStatus::Todo,
            DeliverableStatus::Approved,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("'todo' to 'approved'"));
    }

    // -- Category -------------------------------------------------------------

    #[test]
    fn category_round_trip() {
        for category in &[
            Category::Screen,
            Category::Print,
            Category::Social,
            Category::Other,
        ] {
            assert_eq!(
                Category::from_str_value(category.as_str()).unwrap(),
                *category
            );
        }
    }

    #[test]
    fn invalid_category_rejected() {
        assert!(Category::from_str_value("billboard").is_err());
        assert!(validate_category("billboard").is_err());
    }

    #[test]
    fn category_case_sensitive() {
        assert!(Category::from_str_value("Screen").is_err());
    }

    // -- String validators ----------------------------------------------------

    #[test]
    fn valid_status_strings_accepted() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok());
        }
    }

    #[test]
    fn statuses_complete() {
        assert_eq!(VALID_STATUSES.len(), 5);
    }

    #[test]
    fn categories_complete() {
        assert_eq!(VALID_CATEGORIES.len(), 4);
    }
}
