use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The entrance hall; sessions start here unless the world says otherwise.
pub const ENTRANCE_HALL: RoomId = 8;

pub type RoomId = u32;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Compass direction used by room links.
///
/// Declaration order is display order: N, E, S, W.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a direction (expected N, S, E or W)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    // Case-sensitive: "n" is not a direction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.token() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// Runtime world type used by the game loop.
#[derive(Debug, Clone)]
pub struct World {
    pub title: String,
    pub intro: String,
    pub epilogue: String,
    pub start_room: RoomId,
    pub rooms: BTreeMap<RoomId, Room>,
    pub riddles: Vec<Riddle>,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub desc: String,
    pub links: BTreeMap<Direction, RoomId>,
    pub objects: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Riddle {
    pub question: String,
    pub answer: String,
    pub room: RoomId,
}

impl World {
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }
}
