//! # Database Error Types
//!
//! What can go wrong between the repositories and the SQLite file.
//!
//! ```text
//! sqlx::Error ──► DbError ──► HotelError (hotel-service) ──► ErrorCode
//! ```
//!
//! Constraint failures are told apart by SQLite's extended result code
//! (through [`sqlx::error::ErrorKind`]), not by parsing messages. Only the
//! column of a UNIQUE failure is read from the message, since SQLite
//! reports it nowhere else.

use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

/// Primary result code for `SQLITE_BUSY`.
const SQLITE_BUSY: i32 = 5;
/// Primary result code for `SQLITE_LOCKED`.
const SQLITE_LOCKED: i32 = 6;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A UNIQUE column already holds the value.
    ///
    /// In this schema only `user.username` is unique besides the ids.
    #[error("Duplicate value for {table}.{column}")]
    UniqueViolation { table: String, column: String },

    /// A row still references the one being removed, or a referenced row
    /// does not exist.
    ///
    /// ## When This Occurs
    /// - Deleting a room that a reservation still holds
    /// - Cancelling a reservation that payments or invoices reference
    /// - Booking for a client id that does not exist
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// A CHECK constraint rejected the row (negative price or amount,
    /// unknown role).
    #[error("Constraint violation: {message}")]
    CheckViolation { message: String },

    /// Another connection held the write lock past the busy timeout.
    #[error("Database is busy: {0}")]
    Busy(String),

    /// The database file could not be opened.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// An embedded migration could not be applied.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Any other error reported by SQLite for a statement.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// No pooled connection became free within the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Errors outside SQLite itself (decoding, I/O, closed pool).
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// True for a UNIQUE failure on the given column.
    pub fn is_duplicate(&self, column: &str) -> bool {
        matches!(self, DbError::UniqueViolation { column: c, .. } if c == column)
    }

    fn from_database(err: &dyn DatabaseError) -> Self {
        let message = err.message().to_string();

        match err.kind() {
            ErrorKind::UniqueViolation => {
                let (table, column) = unique_target(&message);
                DbError::UniqueViolation { table, column }
            }
            ErrorKind::ForeignKeyViolation => DbError::ForeignKeyViolation { message },
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                DbError::CheckViolation { message }
            }
            _ if is_busy(err) => DbError::Busy(message),
            _ => DbError::QueryFailed(message),
        }
    }
}

/// `"UNIQUE constraint failed: user.username"` → `("user", "username")`.
fn unique_target(message: &str) -> (String, String) {
    let target = message
        .rsplit(": ")
        .next()
        .and_then(|t| t.split(',').next())
        .unwrap_or_default()
        .trim();

    match target.split_once('.') {
        Some((table, column)) => (table.to_string(), column.to_string()),
        None => (String::new(), target.to_string()),
    }
}

fn is_busy(err: &dyn DatabaseError) -> bool {
    err.code()
        .and_then(|code| code.parse::<i32>().ok())
        .map(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED))
        .unwrap_or(false)
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::from_database(db_err.as_ref()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[test]
    fn test_unique_target() {
        assert_eq!(
            unique_target("UNIQUE constraint failed: user.username"),
            ("user".to_string(), "username".to_string())
        );
        assert_eq!(
            unique_target("UNIQUE constraint failed: room.id, room.number"),
            ("room".to_string(), "id".to_string())
        );
    }

    #[tokio::test]
    async fn test_constraint_failures_are_categorised() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err: DbError = sqlx::query(
            "INSERT INTO room (id, room_number, type, price_cents, available) VALUES ('r-1', '101', 'Single', -1, 1)",
        )
        .execute(db.pool())
        .await
        .unwrap_err()
        .into();
        assert!(matches!(err, DbError::CheckViolation { .. }));

        sqlx::query(r#"INSERT INTO "user" (id, username, password_hash, role) VALUES ('u-1', 'admin', 'h', 'employee')"#)
            .execute(db.pool())
            .await
            .unwrap();
        let err: DbError = sqlx::query(r#"INSERT INTO "user" (id, username, password_hash, role) VALUES ('u-2', 'admin', 'h', 'employee')"#)
            .execute(db.pool())
            .await
            .unwrap_err()
            .into();
        assert!(err.is_duplicate("username"));
        assert!(!err.is_duplicate("id"));

        let err: DbError = sqlx::query(
            "INSERT INTO reservation (id, client_id, room_id, check_in, check_out, confirmed) VALUES ('x', 'nobody', 'nowhere', '2024-01-01', '2024-01-02', 0)",
        )
        .execute(db.pool())
        .await
        .unwrap_err()
        .into();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}
