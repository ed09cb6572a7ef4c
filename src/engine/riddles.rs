use tracing::info;

use crate::engine::output::Output;
use crate::world::{self, RoomId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Solved, and another riddle is now active.
    Correct,
    /// Solved the final riddle.
    Finished,
    Incorrect,
}

/// Both the room and the exact answer text must match.
pub fn answer_matches(riddle: &world::Riddle, current_room: RoomId, guess: &str) -> bool {
    current_room == riddle.room && guess.trim() == riddle.answer
}

/// Check a guess against the active riddle and advance `riddle_index` when it is right.
/// Wrong guesses cost nothing and leave the index where it was.
pub fn handle_answer(
    out: &mut Output,
    riddle_index: &mut usize,
    world: &world::World,
    current_room: RoomId,
    guess: &str,
) -> AnswerOutcome {
    let Some(riddle) = world.riddles.get(*riddle_index) else {
        return AnswerOutcome::Finished;
    };

    if !answer_matches(riddle, current_room, guess) {
        out.error("Incorrect. Check for typos or keep thinking.");
        return AnswerOutcome::Incorrect;
    }

    info!(riddle = *riddle_index, room = current_room, "riddle solved");
    *riddle_index += 1;

    match world.riddles.get(*riddle_index) {
        Some(next) => {
            out.success("Correct! Here's your next riddle:");
            out.say(next.question.clone());
            AnswerOutcome::Correct
        }
        None => AnswerOutcome::Finished,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::engine::output::OutputBlock;
    use crate::world::{Riddle, Room, World};

    fn world() -> World {
        let rooms = [3, 8]
            .into_iter()
            .map(|id| {
                (
                    id,
                    Room {
                        id,
                        name: format!("Room {id}"),
                        desc: String::new(),
                        links: BTreeMap::new(),
                        objects: BTreeMap::new(),
                    },
                )
            })
            .collect();
        World {
            title: String::new(),
            intro: String::new(),
            epilogue: String::new(),
            start_room: 8,
            rooms,
            riddles: vec![
                Riddle {
                    question: "Short and stout?".into(),
                    answer: "teapot".into(),
                    room: 3,
                },
                Riddle {
                    question: "Where do you wipe your feet?".into(),
                    answer: "Doormat".into(),
                    room: 8,
                },
            ],
        }
    }

    #[test]
    fn needs_both_room_and_text() {
        let w = world();
        let riddle = &w.riddles[0];
        assert!(answer_matches(riddle, 3, "teapot"));
        assert!(answer_matches(riddle, 3, " teapot "));
        assert!(!answer_matches(riddle, 8, "teapot"));
        assert!(!answer_matches(riddle, 3, "Teapot"));
        assert!(!answer_matches(riddle, 3, "kettle"));
    }

    #[test]
    fn wrong_room_keeps_index() {
        let w = world();
        let mut index = 0;
        let mut out = Output::new();
        let outcome = handle_answer(&mut out, &mut index, &w, 8, "teapot");
        assert_eq!(outcome, AnswerOutcome::Incorrect);
        assert_eq!(index, 0);
        assert_eq!(
            out.blocks,
            vec![OutputBlock::Error(
                "Incorrect. Check for typos or keep thinking.".into()
            )]
        );
    }

    #[test]
    fn wrong_text_in_right_room_keeps_index() {
        let w = world();
        let mut index = 0;
        let mut out = Output::new();
        assert_eq!(
            handle_answer(&mut out, &mut index, &w, 3, "kettle"),
            AnswerOutcome::Incorrect
        );
        assert_eq!(index, 0);
    }

    #[test]
    fn advances_through_riddles_in_order() {
        let w = world();
        let mut index = 0;
        let mut out = Output::new();

        // The second riddle cannot be answered first.
        assert_eq!(
            handle_answer(&mut out, &mut index, &w, 8, "Doormat"),
            AnswerOutcome::Incorrect
        );

        let mut out = Output::new();
        assert_eq!(
            handle_answer(&mut out, &mut index, &w, 3, "teapot"),
            AnswerOutcome::Correct
        );
        assert_eq!(index, 1);
        assert!(
            out.blocks
                .contains(&OutputBlock::Text("Where do you wipe your feet?".into()))
        );

        let mut out = Output::new();
        assert_eq!(
            handle_answer(&mut out, &mut index, &w, 8, "Doormat"),
            AnswerOutcome::Finished
        );
        assert_eq!(index, 2);
        assert!(out.is_empty());
    }
}
