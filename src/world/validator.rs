use thiserror::Error;
use tracing::warn;

use super::model::{Direction, RoomId, World};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("room key '{key}' is not an integer id")]
    RoomKeyNotInteger { key: String },

    #[error("room {0} is defined more than once")]
    DuplicateRoomKey(RoomId),

    #[error("room stored under key {key} declares id {id}")]
    IdMismatch { key: RoomId, id: RoomId },

    #[error("invalid direction '{direction}' in room {room}")]
    InvalidDirection { room: RoomId, direction: String },

    #[error("room {room} links {direction} to missing room {target}")]
    DanglingLink {
        room: RoomId,
        direction: Direction,
        target: RoomId,
    },

    #[error(
        "rooms {from} and {to} incorrectly linked: {from} leads {direction} to {to}, \
         but {to} has no {} link back to {from}",
        .direction.opposite()
    )]
    UnreciprocatedLink {
        from: RoomId,
        to: RoomId,
        direction: Direction,
    },

    #[error("start_room {0} not found among rooms")]
    MissingStartRoom(RoomId),

    #[error("world has no riddles")]
    NoRiddles,

    #[error("riddle {index} is answered in missing room {room}")]
    RiddleRoomMissing { index: usize, room: RoomId },
}

/// Structural checks on a built world. An empty result means the world is playable.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::MissingStartRoom(world.start_room));
    }

    for (&key, room) in &world.rooms {
        if key != room.id {
            errors.push(ValidationError::IdMismatch { key, id: room.id });
        }

        for (&direction, &target) in &room.links {
            let Some(linked) = world.rooms.get(&target) else {
                errors.push(ValidationError::DanglingLink {
                    room: key,
                    direction,
                    target,
                });
                continue;
            };

            if linked.links.get(&direction.opposite()) != Some(&key) {
                errors.push(ValidationError::UnreciprocatedLink {
                    from: key,
                    to: target,
                    direction,
                });
            }
        }
    }

    if world.riddles.is_empty() {
        errors.push(ValidationError::NoRiddles);
    }

    for (index, riddle) in world.riddles.iter().enumerate() {
        match world.rooms.get(&riddle.room) {
            None => errors.push(ValidationError::RiddleRoomMissing {
                index,
                room: riddle.room,
            }),
            Some(room) if !room.objects.contains_key(&riddle.answer) => {
                // Still solvable, just not examinable in place.
                warn!(
                    riddle = index,
                    room = riddle.room,
                    answer = %riddle.answer,
                    "riddle answer is not an object in its room"
                );
            }
            Some(_) => {}
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::world::model::{Riddle, Room};

    fn room(id: RoomId, links: &[(Direction, RoomId)]) -> Room {
        Room {
            id,
            name: format!("Room {id}"),
            desc: String::new(),
            links: links.iter().copied().collect(),
            objects: BTreeMap::from([("Lamp".to_string(), "A lamp.".to_string())]),
        }
    }

    fn world(rooms: Vec<Room>) -> World {
        World {
            title: String::new(),
            intro: String::new(),
            epilogue: String::new(),
            start_room: 8,
            rooms: rooms.into_iter().map(|r| (r.id, r)).collect(),
            riddles: vec![Riddle {
                question: "Bright?".to_string(),
                answer: "Lamp".to_string(),
                room: 8,
            }],
        }
    }

    #[test]
    fn accepts_mirrored_links() {
        let w = world(vec![
            room(8, &[(Direction::North, 3), (Direction::East, 4)]),
            room(3, &[(Direction::South, 8)]),
            room(4, &[(Direction::West, 8)]),
        ]);
        assert!(validate_world(&w).is_empty());
    }

    #[test]
    fn one_way_link_names_both_rooms() {
        let w = world(vec![room(8, &[(Direction::North, 3)]), room(3, &[])]);
        let errors = validate_world(&w);
        assert_eq!(
            errors,
            vec![ValidationError::UnreciprocatedLink {
                from: 8,
                to: 3,
                direction: Direction::North,
            }]
        );
        let msg = errors[0].to_string();
        assert!(msg.contains('8') && msg.contains('3'), "{msg}");
    }

    #[test]
    fn link_back_in_wrong_direction_is_rejected() {
        let w = world(vec![
            room(8, &[(Direction::North, 3)]),
            room(3, &[(Direction::North, 8)]),
        ]);
        let errors = validate_world(&w);
        assert_eq!(errors.len(), 2);
        assert!(
            errors
                .iter()
                .all(|e| matches!(e, ValidationError::UnreciprocatedLink { .. }))
        );
    }

    #[test]
    fn link_back_to_a_different_room_is_rejected() {
        let w = world(vec![
            room(8, &[(Direction::North, 3)]),
            room(3, &[(Direction::South, 4)]),
            room(4, &[(Direction::North, 3)]),
        ]);
        assert_eq!(
            validate_world(&w),
            vec![ValidationError::UnreciprocatedLink {
                from: 8,
                to: 3,
                direction: Direction::North,
            }]
        );
    }

    #[test]
    fn rejects_key_id_mismatch() {
        let mut w = world(vec![room(8, &[])]);
        w.rooms.insert(5, room(6, &[]));
        assert_eq!(
            validate_world(&w),
            vec![ValidationError::IdMismatch { key: 5, id: 6 }]
        );
    }

    #[test]
    fn rejects_dangling_link() {
        let w = world(vec![room(8, &[(Direction::West, 99)])]);
        assert_eq!(
            validate_world(&w),
            vec![ValidationError::DanglingLink {
                room: 8,
                direction: Direction::West,
                target: 99,
            }]
        );
    }

    #[test]
    fn rejects_missing_start_and_riddle_rooms() {
        let mut w = world(vec![room(1, &[])]);
        w.riddles.clear();
        let errors = validate_world(&w);
        assert!(errors.contains(&ValidationError::MissingStartRoom(8)));
        assert!(errors.contains(&ValidationError::NoRiddles));

        let mut w = world(vec![room(8, &[])]);
        w.riddles[0].room = 42;
        assert_eq!(
            validate_world(&w),
            vec![ValidationError::RiddleRoomMissing { index: 0, room: 42 }]
        );
    }

    #[test]
    fn answer_outside_object_list_is_only_a_warning() {
        let mut w = world(vec![room(8, &[])]);
        w.riddles[0].answer = "Ghost".to_string();
        assert!(validate_world(&w).is_empty());
    }
}
