//! # Invoice Repository
//!
//! Database operations for invoices. The total is computed by the caller;
//! this layer only stores it.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use hotel_core::Invoice;

const INVOICE_COLUMNS: &str = "id, reservation_id, invoice_date AS date, total_cents";

/// Repository for invoice database operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Stores a new invoice row. Repeated calls for one reservation each
    /// create their own row.
    pub async fn insert(
        &self,
        reservation_id: &str,
        date: NaiveDate,
        total_cents: i64,
    ) -> DbResult<Invoice> {
        let invoice = Invoice {
            id: generate_invoice_id(),
            reservation_id: reservation_id.to_string(),
            date,
            total_cents,
        };

        debug!(reservation_id = %reservation_id, total = %total_cents, "Inserting invoice");

        sqlx::query(
            r#"
            INSERT INTO invoice (id, reservation_id, invoice_date, total_cents)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&invoice.id)
        .bind(&invoice.reservation_id)
        .bind(invoice.date)
        .bind(invoice.total_cents)
        .execute(&self.pool)
        .await?;

        Ok(invoice)
    }

    /// Gets an invoice by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Invoice>> {
        let sql = format!("SELECT {INVOICE_COLUMNS} FROM invoice WHERE id = ?1");

        let invoice = sqlx::query_as::<_, Invoice>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(invoice)
    }

    /// Gets the invoices issued for a reservation, oldest first.
    pub async fn find_by_reservation(&self, reservation_id: &str) -> DbResult<Vec<Invoice>> {
        let sql = format!(
            "SELECT {INVOICE_COLUMNS} FROM invoice WHERE reservation_id = ?1 ORDER BY invoice_date, id"
        );

        let invoices = sqlx::query_as::<_, Invoice>(&sql)
            .bind(reservation_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(invoices)
    }

    /// Lists every invoice, oldest first.
    pub async fn list_all(&self) -> DbResult<Vec<Invoice>> {
        let sql = format!("SELECT {INVOICE_COLUMNS} FROM invoice ORDER BY invoice_date, id");

        let invoices = sqlx::query_as::<_, Invoice>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(invoices)
    }
}

/// Generates a new invoice ID.
pub fn generate_invoice_id() -> String {
    Uuid::new_v4().to_string()
}
