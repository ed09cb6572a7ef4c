use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::model::{Direction, ENTRANCE_HALL, Riddle, Room, RoomId, World};
use super::validator::{ValidationError, validate_world};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed world definition: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid world definition:\n{}", list_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn list_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WorldFile {
    #[serde(default)]
    world: WorldHeader,
    #[serde(default)]
    room: BTreeMap<String, RoomConfig>, // [room.<id>] tables
    #[serde(default)]
    riddle: Vec<RiddleConfig>, // [[riddle]] blocks
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WorldHeader {
    title: String,
    start_room: RoomId,
    intro: String,
    epilogue: String,
}

impl Default for WorldHeader {
    fn default() -> Self {
        WorldHeader {
            title: String::new(),
            start_room: ENTRANCE_HALL,
            intro: String::new(),
            epilogue: String::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomConfig {
    id: RoomId,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    links: BTreeMap<String, RoomId>, // [room.<id>.links]
    #[serde(default)]
    objects: BTreeMap<String, String>, // [room.<id>.objects]
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RiddleConfig {
    question: String,
    answer: String,
    room: RoomId,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_world_from_str(&contents)
}

/// Parse, build and validate a world. Conversion problems (keys, directions) and
/// graph problems are gathered into one list; no partially valid world is ever returned.
pub fn load_world_from_str(contents: &str) -> Result<World, LoadError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let mut errors: Vec<ValidationError> = Vec::new();
    let mut rooms: BTreeMap<RoomId, Room> = BTreeMap::new();

    for (key, room_cfg) in world_file.room {
        // Only the canonical spelling counts: "08" or "+8" would alias room 8.
        let room_key = match key.parse::<RoomId>() {
            Ok(id) if id.to_string() == key => id,
            _ => {
                errors.push(ValidationError::RoomKeyNotInteger { key });
                continue;
            }
        };

        let mut links: BTreeMap<Direction, RoomId> = BTreeMap::new();
        for (token, target) in room_cfg.links {
            match token.parse::<Direction>() {
                Ok(direction) => {
                    links.insert(direction, target);
                }
                Err(_) => errors.push(ValidationError::InvalidDirection {
                    room: room_key,
                    direction: token,
                }),
            }
        }

        let objects = room_cfg
            .objects
            .into_iter()
            .map(|(name, text)| (name, normalize_multiline_desc(&text)))
            .collect();

        let room = Room {
            id: room_cfg.id,
            name: room_cfg.name,
            desc: normalize_multiline_desc(&room_cfg.desc),
            links,
            objects,
        };
        if rooms.insert(room_key, room).is_some() {
            errors.push(ValidationError::DuplicateRoomKey(room_key));
        }
    }

    let riddles = world_file
        .riddle
        .into_iter()
        .map(|r| Riddle {
            question: normalize_multiline_desc(&r.question),
            answer: r.answer,
            room: r.room,
        })
        .collect();

    let world = World {
        title: world_file.world.title,
        intro: normalize_multiline_desc(&world_file.world.intro),
        epilogue: normalize_multiline_desc(&world_file.world.epilogue),
        start_room: world_file.world.start_room,
        rooms,
        riddles,
    };

    errors.extend(validate_world(&world));
    if !errors.is_empty() {
        return Err(LoadError::Invalid(errors));
    }

    info!(
        rooms = world.rooms.len(),
        riddles = world.riddles.len(),
        start_room = world.start_room,
        "world loaded"
    );

    Ok(world)
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        // Indentation inside TOML strings never reaches the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);

        pending_blank_lines = 0;
    }

    result
}
