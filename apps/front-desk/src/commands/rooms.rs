//! # Room Commands

use tracing::debug;

use hotel_core::{CoreError, NewRoom};

use super::Context;
use crate::cli::{NewRoomArgs, RoomCommand, UpdateRoomArgs};

pub async fn run(ctx: &Context, cmd: RoomCommand) -> anyhow::Result<()> {
    let rooms = ctx.services.rooms();

    match cmd {
        RoomCommand::List { available } => {
            debug!(available, "rooms list");
            let list = if available {
                rooms.list_available().await?
            } else {
                rooms.list_all().await?
            };
            ctx.out.emit(&list, |list| ctx.out.rooms(list))
        }

        RoomCommand::Add(args) => {
            let room = rooms.add(new_room(args)).await?;
            ctx.out
                .emit(&room, |room| format!("Room added: {}", ctx.out.room_line(room)))
        }

        RoomCommand::Update(args) => update(ctx, args).await,

        RoomCommand::Delete { id } => {
            if rooms.delete(&id).await? {
                ctx.out.message(&format!("Room {} deleted.", id))
            } else {
                ctx.out.message(&format!("No room with id {}; nothing deleted.", id))
            }
        }

        RoomCommand::Show { id } => {
            let room = rooms
                .get_by_id(&id)
                .await?
                .ok_or(CoreError::RoomNotFound(id))?;
            ctx.out.emit(&room, |room| ctx.out.room_line(room))
        }
    }
}

fn new_room(args: NewRoomArgs) -> NewRoom {
    NewRoom {
        number: args.number.filter(|n| !n.trim().is_empty()),
        room_type: args.room_type,
        price_cents: args.price.cents(),
        available: !args.unavailable,
    }
}

async fn update(ctx: &Context, args: UpdateRoomArgs) -> anyhow::Result<()> {
    let rooms = ctx.services.rooms();

    let Some(mut room) = rooms.get_by_id(&args.id).await? else {
        return ctx
            .out
            .message(&format!("No room with id {}; nothing updated.", args.id));
    };

    if let Some(number) = args.number {
        room.number = Some(number).filter(|n| !n.trim().is_empty());
    }
    if let Some(room_type) = args.room_type {
        room.room_type = room_type;
    }
    if let Some(price) = args.price {
        room.price_cents = price.cents();
    }
    if let Some(available) = args.available {
        room.available = available;
    }

    if !rooms.update(&room).await? {
        return ctx
            .out
            .message(&format!("No room with id {}; nothing updated.", room.id));
    }
    ctx.out
        .emit(&room, |room| format!("Room updated: {}", ctx.out.room_line(room)))
}
