//! Submission review vocabulary.
//!
//! The music backend owns the submission lifecycle. These helpers only
//! reject decisions that can never succeed, so an admin gets a precise
//! message without a round trip.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Uploaded and waiting for an admin.
pub const STATUS_PENDING: &str = "pending";

/// Accepted by an admin; eligible for ISRC registration and LibreTime.
pub const STATUS_APPROVED: &str = "approved";

/// Declined by an admin, with notes explaining why.
pub const STATUS_REJECTED: &str = "rejected";

/// Pushed to LibreTime and available for airplay.
pub const STATUS_PUBLISHED: &str = "published";

/// All statuses the backend reports.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_PUBLISHED,
];

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// An admin's verdict on a pending submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Whether a submission in `status` can receive a review decision.
pub fn can_review(status: &str) -> bool {
    status == STATUS_PENDING
}

/// Whether a submission in `status` may be sent to LibreTime.
pub fn can_publish(status: &str) -> bool {
    status == STATUS_APPROVED || status == STATUS_PUBLISHED
}

/// Validate that a status filter names a known status.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {VALID_STATUSES:?}"
        )))
    }
}

/// Validate a decision and its notes. Rejections must explain themselves.
pub fn validate_review(decision: ReviewDecision, notes: Option<&str>) -> Result<(), CoreError> {
    let has_notes = notes.is_some_and(|n| !n.trim().is_empty());
    if decision == ReviewDecision::Reject && !has_notes {
        return Err(CoreError::Validation(
            "A rejection requires review notes".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn approve_without_notes_is_valid() {
        assert!(validate_review(ReviewDecision::Approve, None).is_ok());
    }

    #[test]
    fn reject_requires_notes() {
        assert_matches!(
            validate_review(ReviewDecision::Reject, None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_review(ReviewDecision::Reject, Some("   ")),
            Err(CoreError::Validation(_))
        );
        assert!(validate_review(ReviewDecision::Reject, Some("Clipping at 1:32")).is_ok());
    }

    #[test]
    fn only_pending_can_be_reviewed() {
        assert!(can_review(STATUS_PENDING));
        assert!(!can_review(STATUS_APPROVED));
        assert!(!can_review(STATUS_REJECTED));
        assert!(!can_review(STATUS_PUBLISHED));
    }

    #[test]
    fn only_approved_can_be_published() {
        assert!(can_publish(STATUS_APPROVED));
        assert!(can_publish(STATUS_PUBLISHED));
        assert!(!can_publish(STATUS_PENDING));
        assert!(!can_publish(STATUS_REJECTED));
    }

    #[test]
    fn decision_parses_lowercase() {
        let d: ReviewDecision = serde_json::from_str(r#""reject""#).unwrap();
        assert_eq!(d, ReviewDecision::Reject);
    }

    #[test]
    fn unknown_status_filter_is_rejected() {
        assert!(validate_status("pending").is_ok());
        assert_matches!(validate_status("archived"), Err(CoreError::Validation(_)));
    }
}
