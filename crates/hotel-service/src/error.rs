//! # Service Error Type
//!
//! Unified error type for front desk operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Front Desk                         │
//! │                                                                         │
//! │  hotel-core                 hotel-db                                    │
//! │  CoreError / ValidationError   DbError                                  │
//! │         │                       │                                       │
//! │         └───────────┬───────────┘                                       │
//! │                     ▼                                                   │
//! │               HotelError  ── code() ──►  ErrorCode                      │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  front-desk: "error [NOT_FOUND]: Reservation not found: ..."           │
//! │          or  {"code":"NOT_FOUND","message":"..."} with --json           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use hotel_core::{CoreError, ValidationError};
use hotel_db::DbError;

/// Error returned by every service operation.
#[derive(Debug, Error)]
pub enum HotelError {
    /// Domain rule or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failure.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Password hashing or verification could not run.
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl From<ValidationError> for HotelError {
    fn from(err: ValidationError) -> Self {
        HotelError::Core(CoreError::Validation(err))
    }
}

/// Result type for service operations.
pub type HotelResult<T> = Result<T, HotelError>;

/// Machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced record does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Database operation failed
    DatabaseError,

    /// Operation refused by a domain rule (e.g. record still referenced)
    BusinessLogic,

    /// Anything else
    Internal,
}

impl HotelError {
    /// Returns the category the front end reports.
    pub fn code(&self) -> ErrorCode {
        match self {
            HotelError::Core(err) => match err {
                CoreError::ReservationNotFound(_)
                | CoreError::RoomNotFound(_)
                | CoreError::ClientNotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidPaymentAmount { .. } | CoreError::Validation(_) => {
                    ErrorCode::ValidationError
                }
            },
            HotelError::Db(err) => match err {
                DbError::UniqueViolation { .. } | DbError::CheckViolation { .. } => {
                    ErrorCode::ValidationError
                }
                DbError::ForeignKeyViolation { .. } => ErrorCode::BusinessLogic,
                DbError::Busy(_)
                | DbError::ConnectionFailed(_)
                | DbError::MigrationFailed(_)
                | DbError::QueryFailed(_)
                | DbError::PoolExhausted => ErrorCode::DatabaseError,
                DbError::Internal(_) => ErrorCode::Internal,
            },
            HotelError::Auth(_) => ErrorCode::Internal,
        }
    }

    /// Serializable form of this error.
    pub fn to_body(&self) -> ErrorBody {
        let message = match self {
            HotelError::Db(DbError::ForeignKeyViolation { message }) => {
                tracing::debug!(detail = %message, "Foreign key violation");
                "Record is still referenced by other records".to_string()
            }
            other => other.to_string(),
        };

        ErrorBody {
            code: self.code(),
            message,
        }
    }
}

/// What the front end prints for a failed command.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Reservation not found: 6f1c..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = HotelError::from(CoreError::ReservationNotFound("r-1".to_string()));
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.to_string(), "Reservation not found: r-1");

        let err = HotelError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err = HotelError::from(DbError::ForeignKeyViolation {
            message: "FOREIGN KEY constraint failed".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::BusinessLogic);

        let err = HotelError::from(DbError::CheckViolation {
            message: "CHECK constraint failed: price_cents >= 0".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err = HotelError::from(DbError::Busy("database is locked".to_string()));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn test_body_serialization() {
        let err = HotelError::from(CoreError::ClientNotFound("c-9".to_string()));
        let json = serde_json::to_string(&err.to_body()).unwrap();
        assert_eq!(
            json,
            r#"{"code":"NOT_FOUND","message":"Client not found: c-9"}"#
        );
    }
}
