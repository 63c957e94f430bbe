//! # Error Types
//!
//! Domain-specific error types for hotel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hotel-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  hotel-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  hotel-service errors                                                  │
//! │  └── HotelError       - What the front end sees (with ErrorCode)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → HotelError → Front end            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Only conditions that are *rejections* live here. Confirming or cancelling
/// an unknown reservation is not an error: those are reported as no-ops.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    /// Reservation cannot be found.
    ///
    /// ## When This Occurs
    /// - Billing a reservation id that was never created
    /// - Billing a reservation that has since been cancelled
    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    /// Room cannot be found.
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// Client cannot be found.
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// Payment amount is invalid.
    #[error("Invalid payment amount: {reason}")]
    InvalidPaymentAmount { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used for early validation before anything touches the database.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID, malformed e-mail).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Check-out precedes check-in.
    #[error("check-out ({check_out}) must not be before check-in ({check_in})")]
    InvalidDateRange { check_in: String, check_out: String },

    /// Duplicate value (e.g., username already taken).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ReservationNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Reservation not found: abc");

        let err = CoreError::InvalidPaymentAmount {
            reason: "must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid payment amount: must be greater than zero"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "room type".to_string(),
        };
        assert_eq!(err.to_string(), "room type is required");

        let err = ValidationError::InvalidDateRange {
            check_in: "2024-01-04".to_string(),
            check_out: "2024-01-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "check-out (2024-01-01) must not be before check-in (2024-01-04)"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
