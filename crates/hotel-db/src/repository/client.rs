//! # Client Repository
//!
//! Database operations for hotel guests.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use hotel_core::{Client, NewClient};

/// Repository for client database operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClientRepository { pool }
    }

    /// Inserts a client and returns it with its freshly assigned id.
    pub async fn insert(&self, new: &NewClient) -> DbResult<Client> {
        let client = Client {
            id: generate_client_id(),
            name: new.name.clone(),
            contact: new.contact.clone(),
            email: new.email.clone(),
        };

        debug!(id = %client.id, "Inserting client");

        sqlx::query("INSERT INTO client (id, name, contact, email) VALUES (?1, ?2, ?3, ?4)")
            .bind(&client.id)
            .bind(&client.name)
            .bind(&client.contact)
            .bind(&client.email)
            .execute(&self.pool)
            .await?;

        Ok(client)
    }

    /// Overwrites name, contact and email of an existing client.
    pub async fn update(&self, client: &Client) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE client SET
                name = ?2,
                contact = ?3,
                email = ?4
            WHERE id = ?1
            "#,
        )
        .bind(&client.id)
        .bind(&client.name)
        .bind(&client.contact)
        .bind(&client.email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a client by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, contact, email FROM client WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    /// Lists every client, ordered by name.
    pub async fn list_all(&self) -> DbResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, contact, email FROM client ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    /// Finds the first client whose name matches exactly, ignoring ASCII case.
    ///
    /// Names are not unique; when several clients share one the earliest
    /// by id wins.
    pub async fn find_by_name(&self, name: &str) -> DbResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, contact, email
            FROM client
            WHERE LOWER(name) = LOWER(?1)
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    /// Returns the number of registered clients.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM client")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Generates a new client ID.
pub fn generate_client_id() -> String {
    Uuid::new_v4().to_string()
}
