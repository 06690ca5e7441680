//! Animal status workflow values and validation.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// The animal has been registered.
pub const STATUS_SET: &str = "set";

/// The animal has been approved for delivery.
pub const STATUS_APPROVED: &str = "approved";

/// The animal has been handed over.
pub const STATUS_DELIVERED: &str = "delivered";

/// Every status an animal may carry.
pub const VALID_STATUSES: &[&str] = &[STATUS_SET, STATUS_APPROVED, STATUS_DELIVERED];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Whether `candidate` is one of [`VALID_STATUSES`]. Matching is exact.
pub fn is_valid_status(candidate: &str) -> bool {
    VALID_STATUSES.contains(&candidate)
}

/// Validate that `status` may be persisted on an animal.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if is_valid_status(status) {
        Ok(())
    } else {
        Err(CoreError::WrongData(format!(
            "Invalid status '{status}'. Must be one of: {VALID_STATUSES:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn every_workflow_status_is_valid() {
        assert!(is_valid_status("set"));
        assert!(is_valid_status("approved"));
        assert!(is_valid_status("delivered"));
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(!is_valid_status("lost"));
        assert!(!is_valid_status(""));
    }

    #[test]
    fn status_matching_is_case_sensitive() {
        assert!(!is_valid_status("Set"));
        assert!(!is_valid_status("APPROVED"));
        assert!(!is_valid_status(" set"));
    }

    #[test]
    fn validate_status_rejects_with_wrong_data() {
        assert!(validate_status("approved").is_ok());
        assert_matches!(validate_status("sold"), Err(CoreError::WrongData(_)));
    }
}
