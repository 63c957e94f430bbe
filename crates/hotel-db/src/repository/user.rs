//! # User Repository
//!
//! Credential store: staff and guest accounts. This layer only ever sees
//! password hashes; hashing happens in the service layer.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use super::client::generate_client_id;
use crate::error::DbResult;
use hotel_core::{Client, NewClient, Role, User};

const USER_COLUMNS: &str = r#"id, username, password_hash, role, client_id"#;

/// Repository for user account operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a user account.
    ///
    /// A taken username fails with `DbError::UniqueViolation`.
    pub async fn insert(
        &self,
        username: &str,
        password_hash: &str,
        role: Role,
        client_id: Option<&str>,
    ) -> DbResult<User> {
        let user = User {
            id: generate_user_id(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role,
            client_id: client_id.map(str::to_string),
        };

        debug!(username = %user.username, role = ?user.role, "Inserting user");

        sqlx::query(
            r#"
            INSERT INTO "user" (id, username, password_hash, role, client_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(&user.client_id)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    /// Creates a client and a `Client`-role account linked to it in one
    /// transaction. Either both rows exist afterwards or neither does.
    pub async fn create_client_account(
        &self,
        new_client: &NewClient,
        username: &str,
        password_hash: &str,
    ) -> DbResult<(Client, User)> {
        let client = Client {
            id: generate_client_id(),
            name: new_client.name.clone(),
            contact: new_client.contact.clone(),
            email: new_client.email.clone(),
        };
        let user = User {
            id: generate_user_id(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role: Role::Client,
            client_id: Some(client.id.clone()),
        };

        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO client (id, name, contact, email) VALUES (?1, ?2, ?3, ?4)")
            .bind(&client.id)
            .bind(&client.name)
            .bind(&client.contact)
            .bind(&client.email)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO "user" (id, username, password_hash, role, client_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(&user.client_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(username = %user.username, client_id = %client.id, "Client account created");
        Ok((client, user))
    }

    /// Finds an account by exact username.
    pub async fn find_by_username(&self, username: &str) -> DbResult<Option<User>> {
        let sql = format!(r#"SELECT {USER_COLUMNS} FROM "user" WHERE username = ?1"#);

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Lists every account, ordered by username.
    pub async fn list_all(&self) -> DbResult<Vec<User>> {
        let sql = format!(r#"SELECT {USER_COLUMNS} FROM "user" ORDER BY username"#);

        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }
}

/// Generates a new user ID.
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}
