//! Manual spot-conflict resolution.
//!
//! The traffic backend detects conflicts (two or more spots colliding on a
//! station). An operator picks how to resolve each one; this module models
//! the choices and checks that a choice refers to a spot in the conflict.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// Conflict is waiting for an operator.
pub const CONFLICT_STATUS_OPEN: &str = "open";

/// Conflict has been resolved or dismissed.
pub const CONFLICT_STATUS_RESOLVED: &str = "resolved";

/// An operator's resolution of a conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ConflictResolution {
    /// Keep `spot_id` in its slot; the backend drops the others.
    KeepSpot { spot_id: EntityId },
    /// Move `spot_id` to a new time.
    Reschedule {
        spot_id: EntityId,
        scheduled_at: Timestamp,
    },
    /// Accept the overlap as-is.
    Dismiss,
}

impl ConflictResolution {
    /// The spot the resolution targets, if any.
    pub fn spot_id(&self) -> Option<EntityId> {
        match self {
            ConflictResolution::KeepSpot { spot_id }
            | ConflictResolution::Reschedule { spot_id, .. } => Some(*spot_id),
            ConflictResolution::Dismiss => None,
        }
    }
}

/// Validate a resolution against the conflict it is applied to.
pub fn validate_resolution(
    conflict_status: &str,
    conflict_spot_ids: &[EntityId],
    resolution: &ConflictResolution,
) -> Result<(), CoreError> {
    if conflict_status != CONFLICT_STATUS_OPEN {
        return Err(CoreError::Conflict(format!(
            "Conflict is already {conflict_status}"
        )));
    }

    if let Some(spot_id) = resolution.spot_id() {
        if !conflict_spot_ids.contains(&spot_id) {
            return Err(CoreError::Validation(format!(
                "Spot {spot_id} is not part of this conflict"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn keep_spot_in_conflict_is_valid() {
        let r = ConflictResolution::KeepSpot { spot_id: 2 };
        assert!(validate_resolution(CONFLICT_STATUS_OPEN, &[1, 2], &r).is_ok());
    }

    #[test]
    fn spot_outside_conflict_is_rejected() {
        let r = ConflictResolution::KeepSpot { spot_id: 9 };
        assert_matches!(
            validate_resolution(CONFLICT_STATUS_OPEN, &[1, 2], &r),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn dismiss_needs_no_spot() {
        assert!(validate_resolution(CONFLICT_STATUS_OPEN, &[], &ConflictResolution::Dismiss).is_ok());
    }

    #[test]
    fn resolved_conflict_cannot_be_resolved_again() {
        assert_matches!(
            validate_resolution(CONFLICT_STATUS_RESOLVED, &[1], &ConflictResolution::Dismiss),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn resolution_is_tagged_by_action() {
        let r: ConflictResolution = serde_json::from_str(
            r#"{"action": "reschedule", "spot_id": 4, "scheduled_at": "2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_matches!(r, ConflictResolution::Reschedule { spot_id: 4, .. });

        let json = serde_json::to_value(ConflictResolution::Dismiss).unwrap();
        assert_eq!(json, serde_json::json!({"action": "dismiss"}));
    }
}
