//! # Client Commands

use serde::Serialize;

use hotel_core::{Client, CoreError, NewClient, Reservation};

use super::Context;
use crate::cli::ClientCommand;

#[derive(Debug, Serialize)]
struct ClientWithReservations {
    client: Client,
    reservations: Vec<Reservation>,
}

pub async fn run(ctx: &Context, cmd: ClientCommand) -> anyhow::Result<()> {
    let clients = ctx.services.clients();

    match cmd {
        ClientCommand::List => {
            let list = clients.list_all().await?;
            ctx.out.emit(&list, |list| ctx.out.clients(list))
        }

        ClientCommand::Add {
            name,
            contact,
            email,
        } => {
            let client = clients.add(NewClient::new(name, contact, email)).await?;
            ctx.out.emit(&client, |client| {
                format!("Client added: {}", ctx.out.client_line(client))
            })
        }

        ClientCommand::Find { name } => match clients.find_by_name(&name).await? {
            Some(client) => ctx.out.emit(&client, |client| ctx.out.client_line(client)),
            None => ctx.out.message(&format!("No client named '{}'.", name)),
        },

        ClientCommand::Show { id } => {
            let client = clients
                .find_by_id(&id)
                .await?
                .ok_or(CoreError::ClientNotFound(id))?;
            let reservations = clients.reservations_of(&client.id).await?;

            let view = ClientWithReservations {
                client,
                reservations,
            };
            ctx.out.emit(&view, |view| {
                format!(
                    "{}\n{}",
                    ctx.out.client_line(&view.client),
                    ctx.out.reservations(&view.reservations)
                )
            })
        }
    }
}
