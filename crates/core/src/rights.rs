//! Rights-permission vocabulary.
//!
//! Artists toggle which uses of a submission they permit. The backend
//! stores and enforces the flags; only the names are checked here.

use crate::error::CoreError;

pub const RADIO_BROADCAST: &str = "radio_broadcast";
pub const ONLINE_STREAMING: &str = "online_streaming";
pub const PODCAST_USE: &str = "podcast_use";
pub const PROMOTIONAL_USE: &str = "promotional_use";

/// Every permission an artist can toggle.
pub const KNOWN_PERMISSIONS: &[&str] =
    &[RADIO_BROADCAST, ONLINE_STREAMING, PODCAST_USE, PROMOTIONAL_USE];

/// Validate that `name` is a known permission.
pub fn validate_permission(name: &str) -> Result<(), CoreError> {
    if KNOWN_PERMISSIONS.contains(&name) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown permission '{name}'. Must be one of: {KNOWN_PERMISSIONS:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_permissions_validate() {
        for name in KNOWN_PERMISSIONS {
            assert!(validate_permission(name).is_ok());
        }
    }

    #[test]
    fn unknown_permission_is_rejected() {
        let err = validate_permission("sync_licensing").unwrap_err();
        assert!(err.to_string().contains("sync_licensing"));
    }
}
