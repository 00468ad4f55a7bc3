//! Client-side validation of search request parameters.
//!
//! All checks are pure and run both at request construction and on every
//! field mutation, so an invalid value never reaches the network layer.

use crate::error::ValidationError;

/// Reusability filters accepted by the search API. The empty string leaves
/// the filter unset.
pub const VALID_REUSABILITY: [&str; 4] = ["", "open", "restricted", "permission"];

/// Response profiles accepted by the search API. The empty string lets the
/// API pick its default.
pub const VALID_PROFILE: [&str; 4] = ["", "minimal", "standard", "rich"];

/// Check a reusability filter value.
pub fn check_reusability(value: &str) -> Result<(), ValidationError> {
    if VALID_REUSABILITY.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidReusability {
            value: value.to_string(),
        })
    }
}

/// Check a response profile value.
pub fn check_profile(value: &str) -> Result<(), ValidationError> {
    if VALID_PROFILE.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidProfile {
            value: value.to_string(),
        })
    }
}

/// Check a pagination parameter.
///
/// Empty means "use the API default". Anything else must parse as a base-10
/// integer no smaller than `min`. `field` names the parameter in the error.
pub fn check_pagination(field: &'static str, value: &str, min: i64) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    let parsed: i64 = value
        .parse()
        .map_err(|_| ValidationError::PaginationNotAnInteger {
            field,
            value: value.to_string(),
        })?;

    if parsed < min {
        return Err(ValidationError::PaginationOutOfRange {
            field,
            min,
            value: parsed,
        });
    }

    Ok(())
}
