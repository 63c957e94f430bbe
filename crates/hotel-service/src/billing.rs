//! # Billing Engine
//!
//! Payments against reservations, invoices computed from stay length and
//! room rate, and total revenue.
//!
//! Payments and invoices are independent: a payment is never checked
//! against an invoice, and generating an invoice records no payment.
//! `settle` is the one operation that does both, paying exactly the
//! invoiced total.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use hotel_core::billing::invoice_total;
use hotel_core::validation::validate_payment_amount;
use hotel_core::{CoreError, Invoice, Money, Payment, PaymentDetail, Reservation};
use hotel_db::Database;

use crate::error::HotelResult;

/// Payments, invoices and revenue.
#[derive(Debug, Clone)]
pub struct BillingEngine {
    db: Database,
}

impl BillingEngine {
    pub fn new(db: Database) -> Self {
        BillingEngine { db }
    }

    /// Records a settled payment dated today.
    pub async fn process_payment(&self, reservation_id: &str, amount: Money) -> HotelResult<Payment> {
        self.process_payment_on(reservation_id, amount, today()).await
    }

    /// Records a settled payment with an explicit date.
    ///
    /// ## Errors
    /// * Amount zero or negative (checked first, nothing is written)
    /// * Unknown reservation
    pub async fn process_payment_on(
        &self,
        reservation_id: &str,
        amount: Money,
        date: NaiveDate,
    ) -> HotelResult<Payment> {
        if let Err(err) = validate_payment_amount(amount.cents()) {
            warn!(reservation_id = %reservation_id, %amount, "Payment rejected");
            return Err(CoreError::InvalidPaymentAmount {
                reason: err.to_string(),
            }
            .into());
        }

        let reservation = self
            .db
            .reservations()
            .get_by_id(reservation_id)
            .await?
            .ok_or_else(|| CoreError::ReservationNotFound(reservation_id.to_string()))?;

        let payment = self
            .db
            .payments()
            .record(&reservation.client_id, &reservation.id, amount.cents(), date)
            .await?;

        info!(
            payment_id = %payment.id,
            reservation_id = %reservation.id,
            %amount,
            "Payment recorded"
        );
        Ok(payment)
    }

    /// Issues an invoice dated today.
    pub async fn generate_invoice(&self, reservation_id: &str) -> HotelResult<Invoice> {
        self.generate_invoice_on(reservation_id, today()).await
    }

    /// Issues an invoice: billable nights × the room's current nightly price.
    ///
    /// Each call stores a new invoice row. A total too large to store is
    /// rejected before anything is written.
    pub async fn generate_invoice_on(
        &self,
        reservation_id: &str,
        date: NaiveDate,
    ) -> HotelResult<Invoice> {
        let (reservation, total) = self.stay_total(reservation_id).await?;

        let invoice = self
            .db
            .invoices()
            .insert(&reservation.id, date, total.cents())
            .await?;

        info!(
            invoice_id = %invoice.id,
            reservation_id = %reservation.id,
            nights = reservation.billable_nights(),
            %total,
            "Invoice generated"
        );
        Ok(invoice)
    }

    /// Invoices the stay and pays it in full, both dated today.
    pub async fn settle(&self, reservation_id: &str) -> HotelResult<(Invoice, Payment)> {
        self.settle_on(reservation_id, today()).await
    }

    /// Issues an invoice and records a payment of exactly its total.
    ///
    /// ## Errors
    /// * Unknown reservation
    /// * Total of zero (free room) or too large to store; nothing is written
    pub async fn settle_on(
        &self,
        reservation_id: &str,
        date: NaiveDate,
    ) -> HotelResult<(Invoice, Payment)> {
        let (reservation, total) = self.stay_total(reservation_id).await?;

        if let Err(err) = validate_payment_amount(total.cents()) {
            warn!(reservation_id = %reservation.id, %total, "Settlement rejected");
            return Err(CoreError::InvalidPaymentAmount {
                reason: err.to_string(),
            }
            .into());
        }

        let invoice = self
            .db
            .invoices()
            .insert(&reservation.id, date, total.cents())
            .await?;
        let payment = self
            .db
            .payments()
            .record(&reservation.client_id, &reservation.id, total.cents(), date)
            .await?;

        info!(
            invoice_id = %invoice.id,
            payment_id = %payment.id,
            reservation_id = %reservation.id,
            %total,
            "Reservation settled"
        );
        Ok((invoice, payment))
    }

    async fn stay_total(&self, reservation_id: &str) -> HotelResult<(Reservation, Money)> {
        let (reservation, room) = self
            .db
            .reservations()
            .get_with_room(reservation_id)
            .await?
            .ok_or_else(|| CoreError::ReservationNotFound(reservation_id.to_string()))?;

        let total = invoice_total(reservation.check_in, reservation.check_out, room.price())?;
        Ok((reservation, total))
    }

    /// Payments of a client, each with its reservation, room and client.
    pub async fn payments_for_client(&self, client_id: &str) -> HotelResult<Vec<PaymentDetail>> {
        Ok(self.db.payments().find_by_client(client_id).await?)
    }

    /// Sum of all payments ever recorded.
    pub async fn total_revenue(&self) -> HotelResult<Money> {
        let cents = self.db.payments().total_revenue().await?;
        Ok(Money::from_cents(cents))
    }

    pub async fn invoices_for_reservation(&self, reservation_id: &str) -> HotelResult<Vec<Invoice>> {
        Ok(self.db.invoices().find_by_reservation(reservation_id).await?)
    }

    pub async fn list_invoices(&self) -> HotelResult<Vec<Invoice>> {
        Ok(self.db.invoices().list_all().await?)
    }

    pub async fn get_invoice(&self, id: &str) -> HotelResult<Option<Invoice>> {
        Ok(self.db.invoices().get_by_id(id).await?)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, HotelError};
    use crate::HotelServices;
    use hotel_core::{Client, NewClient, NewRoom, ValidationError};
    use hotel_db::DbConfig;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn book(
        nightly_cents: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> (HotelServices, Client, Reservation) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let services = HotelServices::new(db);
        let client = services
            .clients()
            .add(NewClient::new("Bob", "5678 Boulevard", "bob@example.com"))
            .await
            .unwrap();
        let room = services
            .rooms()
            .add(NewRoom::new("102", "Double", Money::from_cents(nightly_cents)))
            .await
            .unwrap();
        let reservation = services
            .ledger()
            .make(&client.id, &room.id, check_in, check_out)
            .await
            .unwrap()
            .unwrap();
        (services, client, reservation)
    }

    #[tokio::test]
    async fn test_invoice_three_nights() {
        let (services, _client, reservation) =
            book(10000, date(2024, 1, 1), date(2024, 1, 4)).await;

        let invoice = services
            .billing()
            .generate_invoice_on(&reservation.id, date(2024, 1, 4))
            .await
            .unwrap();

        assert_eq!(invoice.total(), Money::from_cents(30000));
        assert_eq!(invoice.total().to_string(), "300.00");
        assert_eq!(invoice.reservation_id, reservation.id);
        assert_eq!(invoice.date, date(2024, 1, 4));
    }

    #[tokio::test]
    async fn test_invoice_same_day_bills_one_night() {
        let (services, _client, reservation) =
            book(10000, date(2024, 1, 1), date(2024, 1, 1)).await;

        let invoice = services
            .billing()
            .generate_invoice(&reservation.id)
            .await
            .unwrap();
        assert_eq!(invoice.total(), Money::from_cents(10000));
    }

    #[tokio::test]
    async fn test_each_invoice_call_creates_a_row() {
        let (services, _client, reservation) =
            book(8000, date(2024, 1, 1), date(2024, 1, 3)).await;
        let billing = services.billing();

        let first = billing.generate_invoice(&reservation.id).await.unwrap();
        let second = billing.generate_invoice(&reservation.id).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.total_cents, second.total_cents);

        assert_eq!(
            billing
                .invoices_for_reservation(&reservation.id)
                .await
                .unwrap()
                .len(),
            2
        );
        assert_eq!(billing.list_invoices().await.unwrap().len(), 2);
        assert_eq!(billing.get_invoice(&first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_invoice_unknown_reservation() {
        let (services, _client, _reservation) =
            book(8000, date(2024, 1, 1), date(2024, 1, 3)).await;

        let err = services
            .billing()
            .generate_invoice("missing")
            .await
            .unwrap_err();
        assert!(matches!(err, HotelError::Core(CoreError::ReservationNotFound(_))));
        assert!(services.billing().list_invoices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_payment_recorded_for_reservation_client() {
        let (services, client, reservation) =
            book(8000, date(2024, 1, 1), date(2024, 1, 3)).await;
        let billing = services.billing();

        let payment = billing
            .process_payment_on(&reservation.id, Money::from_cents(16000), date(2024, 1, 3))
            .await
            .unwrap();
        assert_eq!(payment.client_id, client.id);
        assert!(payment.paid);
        assert_eq!(payment.date, date(2024, 1, 3));

        let details = billing.payments_for_client(&client.id).await.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].payment, payment);
        assert_eq!(details[0].room.number.as_deref(), Some("102"));

        assert_eq!(billing.total_revenue().await.unwrap(), Money::from_cents(16000));
    }

    #[tokio::test]
    async fn test_payment_rejects_non_positive_amount() {
        let (services, client, reservation) =
            book(8000, date(2024, 1, 1), date(2024, 1, 3)).await;
        let billing = services.billing();

        for cents in [0, -500] {
            let err = billing
                .process_payment(&reservation.id, Money::from_cents(cents))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                HotelError::Core(CoreError::InvalidPaymentAmount { .. })
            ));
            assert_eq!(err.code(), ErrorCode::ValidationError);
        }

        // Amount is checked before the reservation lookup.
        let err = billing
            .process_payment("missing", Money::zero())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HotelError::Core(CoreError::InvalidPaymentAmount { .. })
        ));

        assert!(billing.payments_for_client(&client.id).await.unwrap().is_empty());
        assert_eq!(billing.total_revenue().await.unwrap(), Money::zero());
    }

    #[tokio::test]
    async fn test_payment_unknown_reservation() {
        let (services, _client, _reservation) =
            book(8000, date(2024, 1, 1), date(2024, 1, 3)).await;

        let err = services
            .billing()
            .process_payment("missing", Money::from_cents(100))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_invoice_total_too_large_is_rejected() {
        let (services, client, reservation) =
            book(5_000_000_000_000, date(2024, 1, 1), date(9999, 12, 31)).await;
        let billing = services.billing();

        let err = billing.generate_invoice(&reservation.id).await.unwrap_err();
        assert!(matches!(
            err,
            HotelError::Core(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err = billing.settle(&reservation.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);

        assert!(billing.list_invoices().await.unwrap().is_empty());
        assert!(billing.payments_for_client(&client.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_settle_pays_invoice_total() {
        let (services, client, reservation) =
            book(8050, date(2024, 1, 1), date(2024, 1, 4)).await;
        let billing = services.billing();

        let (invoice, payment) = billing
            .settle_on(&reservation.id, date(2024, 1, 4))
            .await
            .unwrap();

        assert_eq!(invoice.total_cents, 24150);
        assert_eq!(payment.amount_cents, invoice.total_cents);
        assert_eq!(payment.reservation_id, reservation.id);
        assert_eq!(payment.client_id, client.id);
        assert_eq!(payment.date, invoice.date);
        assert!(payment.paid);

        assert_eq!(billing.invoices_for_reservation(&reservation.id).await.unwrap(), vec![invoice]);
        assert_eq!(billing.total_revenue().await.unwrap(), Money::from_cents(24150));
    }

    #[tokio::test]
    async fn test_settle_free_room_writes_nothing() {
        let (services, client, reservation) =
            book(0, date(2024, 1, 1), date(2024, 1, 2)).await;
        let billing = services.billing();

        let err = billing.settle(&reservation.id).await.unwrap_err();
        assert!(matches!(
            err,
            HotelError::Core(CoreError::InvalidPaymentAmount { .. })
        ));
        assert!(billing.list_invoices().await.unwrap().is_empty());
        assert!(billing.payments_for_client(&client.id).await.unwrap().is_empty());

        let err = billing.settle("missing").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_revenue_without_payments_is_zero() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let services = HotelServices::new(db);

        let revenue = services.billing().total_revenue().await.unwrap();
        assert_eq!(revenue, Money::zero());
        assert_eq!(revenue.to_string(), "0.00");
    }
}
