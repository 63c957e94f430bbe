//! # Payment Repository
//!
//! Database operations for payments. Payments are append-only: there is no
//! update or delete.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use hotel_core::{Client, Payment, PaymentDetail, Reservation, Room};

/// Repository for payment database operations.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: SqlitePool,
}

/// One payment row joined with reservation, room and client.
#[derive(sqlx::FromRow)]
struct PaymentDetailRow {
    payment_id: String,
    amount_cents: i64,
    payment_date: NaiveDate,
    paid: bool,
    reservation_id: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    confirmed: bool,
    room_id: String,
    room_number: Option<String>,
    room_type: String,
    price_cents: i64,
    available: bool,
    client_id: String,
    client_name: String,
    client_contact: String,
    client_email: String,
}

impl From<PaymentDetailRow> for PaymentDetail {
    fn from(row: PaymentDetailRow) -> Self {
        PaymentDetail {
            payment: Payment {
                id: row.payment_id,
                client_id: row.client_id.clone(),
                reservation_id: row.reservation_id.clone(),
                amount_cents: row.amount_cents,
                date: row.payment_date,
                paid: row.paid,
            },
            reservation: Reservation {
                id: row.reservation_id,
                client_id: row.client_id.clone(),
                room_id: row.room_id.clone(),
                check_in: row.check_in,
                check_out: row.check_out,
                confirmed: row.confirmed,
            },
            room: Room {
                id: row.room_id,
                number: row.room_number,
                room_type: row.room_type,
                price_cents: row.price_cents,
                available: row.available,
            },
            client: Client {
                id: row.client_id,
                name: row.client_name,
                contact: row.client_contact,
                email: row.client_email,
            },
        }
    }
}

const PAYMENT_COLUMNS: &str =
    "id, client_id, reservation_id, amount_cents, payment_date AS date, paid";

impl PaymentRepository {
    /// Creates a new PaymentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PaymentRepository { pool }
    }

    /// Records a settled payment against a reservation.
    pub async fn record(
        &self,
        client_id: &str,
        reservation_id: &str,
        amount_cents: i64,
        date: NaiveDate,
    ) -> DbResult<Payment> {
        let payment = Payment {
            id: generate_payment_id(),
            client_id: client_id.to_string(),
            reservation_id: reservation_id.to_string(),
            amount_cents,
            date,
            paid: true,
        };

        debug!(reservation_id = %reservation_id, amount = %amount_cents, "Recording payment");

        sqlx::query(
            r#"
            INSERT INTO payment (
                id, client_id, reservation_id,
                amount_cents, payment_date, paid
            ) VALUES (
                ?1, ?2, ?3,
                ?4, ?5, ?6
            )
            "#,
        )
        .bind(&payment.id)
        .bind(&payment.client_id)
        .bind(&payment.reservation_id)
        .bind(payment.amount_cents)
        .bind(payment.date)
        .bind(payment.paid)
        .execute(&self.pool)
        .await?;

        Ok(payment)
    }

    /// Gets all payments for a reservation.
    pub async fn list_for_reservation(&self, reservation_id: &str) -> DbResult<Vec<Payment>> {
        let sql = format!(
            "SELECT {PAYMENT_COLUMNS} FROM payment WHERE reservation_id = ?1 ORDER BY payment_date, id"
        );

        let payments = sqlx::query_as::<_, Payment>(&sql)
            .bind(reservation_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(payments)
    }

    /// Gets the payments of a client with their reservation, room and client.
    pub async fn find_by_client(&self, client_id: &str) -> DbResult<Vec<PaymentDetail>> {
        let rows = sqlx::query_as::<_, PaymentDetailRow>(
            r#"
            SELECT
                p.id AS payment_id,
                p.amount_cents,
                p.payment_date,
                p.paid,
                r.id AS reservation_id,
                r.check_in,
                r.check_out,
                r.confirmed,
                rm.id AS room_id,
                rm.room_number,
                rm.type AS room_type,
                rm.price_cents,
                rm.available,
                c.id AS client_id,
                c.name AS client_name,
                c.contact AS client_contact,
                c.email AS client_email
            FROM payment p
            INNER JOIN reservation r ON r.id = p.reservation_id
            INNER JOIN room rm ON rm.id = r.room_id
            INNER JOIN client c ON c.id = p.client_id
            WHERE p.client_id = ?1
            ORDER BY p.payment_date, p.id
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Sum of every payment ever recorded, in cents. Zero when there are none.
    pub async fn total_revenue(&self) -> DbResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(amount_cents), 0) FROM payment")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

/// Generates a new payment ID.
pub fn generate_payment_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{Database, DbConfig};
    use hotel_core::{Money, NewClient, NewRoom};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_revenue_is_zero_without_payments() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert_eq!(db.payments().total_revenue().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_record_and_find_by_client() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let client = db
            .clients()
            .insert(&NewClient::new("Bob", "5678 Boulevard", "bob@example.com"))
            .await
            .unwrap();
        let room = db
            .rooms()
            .insert(&NewRoom::new("201", "Suite", Money::from_cents(12000)))
            .await
            .unwrap();
        let reservation = db
            .reservations()
            .book(&client.id, &room.id, date(2024, 3, 1), date(2024, 3, 3))
            .await
            .unwrap()
            .unwrap();

        let repo = db.payments();
        repo.record(&client.id, &reservation.id, 12000, date(2024, 3, 1))
            .await
            .unwrap();
        repo.record(&client.id, &reservation.id, 12000, date(2024, 3, 2))
            .await
            .unwrap();

        let details = repo.find_by_client(&client.id).await.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].payment.date, date(2024, 3, 1));
        assert!(details[0].payment.paid);
        assert_eq!(details[0].reservation.id, reservation.id);
        assert_eq!(details[0].room.number.as_deref(), Some("201"));
        assert_eq!(details[0].client.name, "Bob");

        assert_eq!(repo.list_for_reservation(&reservation.id).await.unwrap().len(), 2);
        assert_eq!(repo.total_revenue().await.unwrap(), 24000);
        assert!(repo.find_by_client("other").await.unwrap().is_empty());
    }
}
