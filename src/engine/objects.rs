use crate::engine::output::Output;
use crate::world::{self, RoomId};

/// Exact, case-sensitive lookup among the current room's objects.
pub fn handle_examine(out: &mut Output, world: &world::World, current_room: RoomId, name: &str) {
    match world
        .room(current_room)
        .and_then(|room| room.objects.get(name))
    {
        Some(desc) => {
            for paragraph in desc.split("\n\n") {
                out.say(paragraph);
            }
        }
        None => out.error("Unknown object. Check capitalization."),
    }
}
