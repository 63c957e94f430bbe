//! # User Commands

use hotel_core::NewClientAccount;

use super::Context;
use crate::cli::UserCommand;

pub async fn run(ctx: &Context, cmd: UserCommand) -> anyhow::Result<()> {
    let credentials = ctx.services.credentials();

    match cmd {
        UserCommand::Register {
            name,
            contact,
            email,
            username,
            password,
        } => {
            let user = credentials
                .register_client_account(NewClientAccount {
                    name,
                    contact,
                    email,
                    username,
                    password,
                })
                .await?;
            ctx.out.emit(&user, |user| {
                format!(
                    "Account '{}' registered for client {}.",
                    user.username,
                    user.client_id.as_deref().unwrap_or("-")
                )
            })
        }

        UserCommand::Login { username, password } => {
            match credentials.authenticate(&username, &password).await? {
                Some(user) => ctx.out.emit(&user, |user| {
                    format!("Welcome, {} ({:?}).", user.username, user.role)
                }),
                None => anyhow::bail!("invalid username or password"),
            }
        }

        UserCommand::List => {
            let users = credentials.list_users().await?;
            ctx.out.emit(&users, |list| ctx.out.users(list))
        }
    }
}
