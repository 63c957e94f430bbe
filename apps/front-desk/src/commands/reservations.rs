//! # Reservation Commands

use hotel_core::CoreError;

use super::Context;
use crate::cli::ReservationCommand;

pub async fn run(ctx: &Context, cmd: ReservationCommand) -> anyhow::Result<()> {
    let ledger = ctx.services.ledger();

    match cmd {
        ReservationCommand::List => {
            let list = ledger.list_all().await?;
            ctx.out.emit(&list, |list| ctx.out.reservations(list))
        }

        ReservationCommand::Make {
            client,
            room,
            check_in,
            check_out,
        } => match ledger.make(&client, &room, check_in, check_out).await? {
            Some(reservation) => ctx.out.emit(&reservation, |r| {
                format!("Reservation created: {}", ctx.out.reservation_line(r))
            }),
            None => ctx.out.message(&format!(
                "Room {} is not available; no reservation created.",
                room
            )),
        },

        ReservationCommand::Confirm { id } => {
            if ledger.confirm(&id).await? {
                ctx.out.message(&format!("Reservation {} confirmed.", id))
            } else {
                ctx.out
                    .message(&format!("No reservation with id {}; nothing confirmed.", id))
            }
        }

        ReservationCommand::Cancel { id } => {
            if ledger.cancel(&id).await? {
                ctx.out.message(&format!("Reservation {} cancelled.", id))
            } else {
                ctx.out
                    .message(&format!("No reservation with id {}; nothing cancelled.", id))
            }
        }

        ReservationCommand::Show { id } => {
            let reservation = ledger
                .get_by_id(&id)
                .await?
                .ok_or(CoreError::ReservationNotFound(id))?;
            ctx.out
                .emit(&reservation, |r| ctx.out.reservation_line(r))
        }
    }
}
