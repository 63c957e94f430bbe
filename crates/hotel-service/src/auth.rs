//! # Credential Store
//!
//! Staff and guest accounts with Argon2-hashed passwords.
//!
//! ## Account Kinds
//! - `Role::Employee`: front desk staff, seeded at startup by [`CredentialStore::ensure_admin`]
//! - `Role::Client`: a guest who registered themselves; linked to a client record

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use tracing::{info, warn};

use hotel_core::validation::{validate_new_account, validate_password, validate_username};
use hotel_core::{NewClient, NewClientAccount, Role, User, ValidationError};
use hotel_db::Database;

use crate::error::{HotelError, HotelResult};

/// User accounts and authentication.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    db: Database,
}

impl CredentialStore {
    pub fn new(db: Database) -> Self {
        CredentialStore { db }
    }

    /// Registers a guest: creates the client record and a `Client` account
    /// linked to it, both or neither.
    ///
    /// ## Errors
    /// * Missing name, e-mail, username or password
    /// * Username already taken
    pub async fn register_client_account(&self, account: NewClientAccount) -> HotelResult<User> {
        validate_new_account(&account)?;
        let username = account.username.trim();

        if self.db.users().find_by_username(username).await?.is_some() {
            return Err(duplicate_username(username));
        }

        let password_hash = hash_password(&account.password)?;
        let new_client = NewClient::new(account.name.trim(), account.contact, account.email);

        let (client, user) = self
            .db
            .users()
            .create_client_account(&new_client, username, &password_hash)
            .await
            .map_err(|err| match err {
                err if err.is_duplicate("username") => duplicate_username(username),
                other => other.into(),
            })?;

        info!(username = %user.username, client_id = %client.id, "Client account registered");
        Ok(user)
    }

    /// Checks a username and password.
    ///
    /// Unknown users and wrong passwords both yield `None`.
    pub async fn authenticate(&self, username: &str, password: &str) -> HotelResult<Option<User>> {
        let Some(user) = self.db.users().find_by_username(username).await? else {
            warn!(username = %username, "Login failed: unknown user");
            return Ok(None);
        };

        if verify_password(password, &user.password_hash) {
            info!(username = %username, role = ?user.role, "Login succeeded");
            Ok(Some(user))
        } else {
            warn!(username = %username, "Login failed: wrong password");
            Ok(None)
        }
    }

    /// Creates an employee account unless one with this username exists.
    ///
    /// Returns true when an account was created.
    pub async fn ensure_admin(&self, username: &str, password: &str) -> HotelResult<bool> {
        validate_username(username)?;
        validate_password(password)?;

        if self.db.users().find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let password_hash = hash_password(password)?;
        self.db
            .users()
            .insert(username, &password_hash, Role::Employee, None)
            .await?;

        info!(username = %username, "Administrator account created");
        Ok(true)
    }

    pub async fn find_by_username(&self, username: &str) -> HotelResult<Option<User>> {
        Ok(self.db.users().find_by_username(username).await?)
    }

    pub async fn list_users(&self) -> HotelResult<Vec<User>> {
        Ok(self.db.users().list_all().await?)
    }
}

fn duplicate_username(username: &str) -> HotelError {
    ValidationError::Duplicate {
        field: "username".to_string(),
        value: username.to_string(),
    }
    .into()
}

/// Hashes a password into an Argon2 PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> HotelResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| HotelError::Auth(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC string.
///
/// A malformed stored hash never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::HotelServices;
    use hotel_db::DbConfig;

    async fn setup() -> HotelServices {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        HotelServices::new(db)
    }

    fn alice_account() -> NewClientAccount {
        NewClientAccount {
            name: "Alice".to_string(),
            contact: "1234 Avenue Street".to_string(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            password: "s3cret!".to_string(),
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("s3cret!").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("s3cret!"));
        assert!(verify_password("s3cret!", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("s3cret!", "not-a-hash"));
    }

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let services = setup().await;
        let store = services.credentials();

        let user = store.register_client_account(alice_account()).await.unwrap();
        assert_eq!(user.role, Role::Client);
        assert_ne!(user.password_hash, "s3cret!");

        let client_id = user.client_id.clone().unwrap();
        let client = services.clients().find_by_id(&client_id).await.unwrap().unwrap();
        assert_eq!(client.name, "Alice");

        let logged_in = store.authenticate("alice", "s3cret!").await.unwrap().unwrap();
        assert_eq!(logged_in.id, user.id);

        assert!(store.authenticate("alice", "wrong").await.unwrap().is_none());
        assert!(store.authenticate("nobody", "s3cret!").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let services = setup().await;
        let store = services.credentials();

        store.register_client_account(alice_account()).await.unwrap();
        let err = store
            .register_client_account(alice_account())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(err.to_string().contains("username 'alice' already exists"));
        assert_eq!(services.clients().list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let services = setup().await;
        let store = services.credentials();

        let mut account = alice_account();
        account.email = String::new();
        assert!(store.register_client_account(account).await.is_err());

        let mut account = alice_account();
        account.password = String::new();
        assert!(store.register_client_account(account).await.is_err());

        assert!(store.list_users().await.unwrap().is_empty());
        assert!(services.clients().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_admin_once() {
        let services = setup().await;
        let store = services.credentials();

        assert!(store.ensure_admin("admin", "admin").await.unwrap());
        assert!(!store.ensure_admin("admin", "changed").await.unwrap());

        let admin = store.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.role, Role::Employee);
        assert!(admin.client_id.is_none());

        // The original password still applies.
        assert!(store.authenticate("admin", "admin").await.unwrap().is_some());
        assert!(store.authenticate("admin", "changed").await.unwrap().is_none());
    }
}
