mod loader;
mod model;
mod validator;

pub use loader::{LoadError, load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Direction, ENTRANCE_HALL, ParseDirectionError, Riddle, Room, RoomId, World};
pub use validator::{ValidationError, validate_world};
