//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD and checkout handlers. The document store enforces no lengths of its
//! own, so these are the only guard against unbounded payloads.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names and titles: product, offer, coupon code, customer name
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions (both languages)
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Short identifiers: phone numbers, payment method labels, flavors
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a percentage sits within the given inclusive range.
pub fn validate_percentage(value: u32, field: &str, min: u32, max: u32) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::validation(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(())
}
