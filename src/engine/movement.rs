use tracing::debug;

use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::world::{self, Direction, RoomId};

/// Resolve `move <token>` from the current room. Only a successful move changes
/// `current_room`, and it is followed by the new room's display.
pub fn handle_move(
    out: &mut Output,
    current_room: &mut RoomId,
    world: &world::World,
    token: &str,
) {
    let Ok(direction) = token.parse::<Direction>() else {
        out.error(format!("Invalid move direction {token}."));
        return;
    };

    let target = world
        .room(*current_room)
        .and_then(|room| room.links.get(&direction).copied());

    let Some(next) = target.and_then(|id| world.room(id)) else {
        out.error("Can't move in that direction.");
        return;
    };

    debug!(from = *current_room, to = next.id, %direction, "moved");
    *current_room = next.id;
    render_room(out, next, world);
}
