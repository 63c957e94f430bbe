//! # Validation Module
//!
//! Input validation for rooms, clients, stays, payments and accounts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (clap)                                             │
//! │  ├── Type validation (dates, numbers)                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Services                                                     │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  ├── UNIQUE (username)                                                 │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hotel_core::validation::{validate_payment_amount, validate_room_type};
//!
//! assert!(validate_room_type("Suite").is_ok());
//! assert!(validate_payment_amount(0).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{NewClient, NewClientAccount, NewRoom, Room};
use crate::{MAX_NAME_LEN, MIN_PASSWORD_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn max_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

// =============================================================================
// Rooms
// =============================================================================

/// Validates a room type ("Single", "Double", "Suite", ...).
pub fn validate_room_type(room_type: &str) -> ValidationResult<()> {
    required("room type", room_type)?;
    max_len("room type", room_type, 50)
}

/// Validates an optional room number. Blank numbers are treated as absent.
pub fn validate_room_number(number: Option<&str>) -> ValidationResult<()> {
    match number {
        Some(number) => max_len("room number", number, 20),
        None => Ok(()),
    }
}

/// Validates a nightly price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (complimentary rooms)
///
/// ## Example
/// ```rust
/// use hotel_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(5000).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

pub fn validate_new_room(room: &NewRoom) -> ValidationResult<()> {
    validate_room_number(room.number.as_deref())?;
    validate_room_type(&room.room_type)?;
    validate_price_cents(room.price_cents)
}

/// Checks the editable fields of an existing room. The id is only a lookup
/// key: an id that matches no row makes the update a no-op.
pub fn validate_room(room: &Room) -> ValidationResult<()> {
    validate_room_number(room.number.as_deref())?;
    validate_room_type(&room.room_type)?;
    validate_price_cents(room.price_cents)
}

// =============================================================================
// Clients
// =============================================================================

pub fn validate_client_name(name: &str) -> ValidationResult<()> {
    required("name", name)?;
    max_len("name", name, MAX_NAME_LEN)
}

/// Validates an e-mail address. Empty is accepted (the field is optional).
///
/// Only the shape `local@domain` is checked.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(());
    }
    max_len("email", email, 254)?;

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected name@domain".to_string(),
        }),
    }
}

pub fn validate_new_client(client: &NewClient) -> ValidationResult<()> {
    validate_client_name(&client.name)?;
    max_len("contact", &client.contact, 200)?;
    validate_email(&client.email)
}

// =============================================================================
// Stays and Payments
// =============================================================================

/// Check-out may not precede check-in.
///
/// A same-day stay (check-out == check-in) is accepted and billed as one night.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use hotel_core::validation::validate_stay_dates;
///
/// let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let jan4 = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
/// assert!(validate_stay_dates(jan1, jan4).is_ok());
/// assert!(validate_stay_dates(jan1, jan1).is_ok());
/// assert!(validate_stay_dates(jan4, jan1).is_err());
/// ```
pub fn validate_stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> ValidationResult<()> {
    if check_out < check_in {
        return Err(ValidationError::InvalidDateRange {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        });
    }
    Ok(())
}

/// Validates a payment amount in cents.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_payment_amount(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Accounts
// =============================================================================

/// Validates a username.
///
/// ## Rules
/// - 3 to 50 characters
/// - Letters, numbers, dots, hyphens and underscores only
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();
    required("username", username)?;

    if username.len() < 3 {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: 3,
        });
    }
    max_len("username", username, 50)?;

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must contain only letters, numbers, dots, hyphens, and underscores"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Self-registration requires name, e-mail, username and password.
pub fn validate_new_account(account: &NewClientAccount) -> ValidationResult<()> {
    validate_client_name(&account.name)?;
    required("email", &account.email)?;
    validate_email(&account.email)?;
    max_len("contact", &account.contact, 200)?;
    validate_username(&account.username)?;
    validate_password(&account.password)
}
