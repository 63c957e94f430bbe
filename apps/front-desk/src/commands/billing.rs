//! # Billing Commands

use serde::Serialize;

use hotel_core::{Invoice, Money, Payment};

use super::Context;
use crate::cli::BillingCommand;

#[derive(Debug, Serialize)]
struct Settlement {
    invoice: Invoice,
    payment: Payment,
}

#[derive(Debug, Serialize)]
struct Revenue {
    total_cents: i64,
}

pub async fn run(ctx: &Context, cmd: BillingCommand) -> anyhow::Result<()> {
    let billing = ctx.services.billing();

    match cmd {
        BillingCommand::Pay {
            reservation,
            amount,
        } => {
            let payment = billing.process_payment(&reservation, amount).await?;
            ctx.out.emit(&payment, |p| {
                format!(
                    "Payment {} of {} recorded for reservation {} on {}.",
                    p.id,
                    ctx.out.money(p.amount()),
                    p.reservation_id,
                    p.date
                )
            })
        }

        BillingCommand::Invoice { reservation } => {
            let invoice = billing.generate_invoice(&reservation).await?;
            ctx.out.emit(&invoice, |invoice| {
                format!("Invoice issued: {}", ctx.out.invoice_line(invoice))
            })
        }

        BillingCommand::Settle { reservation } => {
            let (invoice, payment) = billing.settle(&reservation).await?;
            let settlement = Settlement { invoice, payment };
            ctx.out.emit(&settlement, |s| {
                format!(
                    "Invoice issued: {}\nPayment {} of {} recorded on {}.",
                    ctx.out.invoice_line(&s.invoice),
                    s.payment.id,
                    ctx.out.money(s.payment.amount()),
                    s.payment.date
                )
            })
        }

        BillingCommand::Invoices { reservation } => {
            let invoices = match reservation {
                Some(id) => billing.invoices_for_reservation(&id).await?,
                None => billing.list_invoices().await?,
            };
            ctx.out.emit(&invoices, |list| ctx.out.invoices(list))
        }

        BillingCommand::Payments { client } => {
            let payments = billing.payments_for_client(&client).await?;
            ctx.out.emit(&payments, |list| ctx.out.payments(list))
        }

        BillingCommand::Revenue => {
            let total = billing.total_revenue().await?;
            let revenue = Revenue {
                total_cents: total.cents(),
            };
            ctx.out.emit(&revenue, |r| {
                format!("Total revenue: {}", ctx.out.money(Money::from_cents(r.total_cents)))
            })
        }
    }
}
