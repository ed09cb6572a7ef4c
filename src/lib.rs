pub mod engine;
pub mod terminal;
pub mod world;

use std::io;

use tracing::{debug, info};

use engine::{
    AnswerOutcome, Command, Output, handle_answer, handle_examine, handle_move, render_epilogue,
    render_help, render_opening, render_room,
};
use terminal::Terminal;
use world::{Riddle, RoomId, World};

pub use world::{LoadError, load_world_from_file, load_world_from_str};

pub const ANSWER_PROMPT: &str = "Type the exact name of the object you think answers the riddle. \
                                 You must be in the same room as the object!";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won,
    Quit,
    InputClosed,
}

/// The world plus the player's progress through it.
pub struct GameState {
    pub world: World,
    pub current_room: RoomId,
    pub riddle_index: usize,
}

impl GameState {
    pub fn new(world: World) -> Self {
        GameState {
            current_room: world.start_room,
            riddle_index: 0,
            world,
        }
    }

    pub fn current_riddle(&self) -> Option<&Riddle> {
        self.world.riddles.get(self.riddle_index)
    }

    pub fn is_complete(&self) -> bool {
        self.riddle_index >= self.world.riddles.len()
    }

    /// Intro, first riddle, help, then the starting room.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        render_opening(&mut out, &self.world);
        self.render_current_room(&mut out);
        out
    }

    fn render_current_room(&self, out: &mut Output) {
        if let Some(room) = self.world.room(self.current_room) {
            render_room(out, room, &self.world);
        }
    }

    /// Process a single player input. `Some(ending)` means the session is over; the
    /// epilogue is left to the caller.
    pub fn step<T: Terminal + ?Sized>(
        &mut self,
        input: &str,
        term: &mut T,
    ) -> io::Result<Option<Ending>> {
        let command = Command::parse(input);
        debug!(?command, room = self.current_room, riddle = self.riddle_index, "dispatch");

        let mut out = Output::new();
        let mut ending = None;

        match command {
            Command::Move(token) => {
                handle_move(&mut out, &mut self.current_room, &self.world, &token);
            }
            Command::Examine(name) => {
                handle_examine(&mut out, &self.world, self.current_room, &name);
            }
            Command::Answer => {
                let Some(guess) = term.read_line(ANSWER_PROMPT)? else {
                    return Ok(Some(Ending::InputClosed));
                };
                let outcome = handle_answer(
                    &mut out,
                    &mut self.riddle_index,
                    &self.world,
                    self.current_room,
                    &guess,
                );
                if outcome == AnswerOutcome::Finished {
                    ending = Some(Ending::Won);
                }
            }
            Command::Where => self.render_current_room(&mut out),
            Command::Riddle => match self.current_riddle() {
                Some(riddle) => out.say(format!("Current riddle: {}", riddle.question)),
                None => out.say("There are no riddles left."),
            },
            Command::Help => render_help(&mut out),
            Command::Quit => ending = Some(Ending::Quit),
            Command::Unknown => out.error("Unknown input. Type 'help' to see valid inputs."),
        }

        if !out.is_empty() {
            term.print(out);
        }
        Ok(ending)
    }

    /// Play until the riddles run out, the player quits, or input ends. The epilogue is
    /// printed only on a win.
    pub fn run<T: Terminal + ?Sized>(&mut self, term: &mut T) -> io::Result<Ending> {
        term.print(self.initialize());

        let ending = loop {
            if self.is_complete() {
                break Ending::Won;
            }
            let Some(line) = term.read_line("")? else {
                break Ending::InputClosed;
            };
            if let Some(ending) = self.step(&line, term)? {
                break ending;
            }
        };

        if ending == Ending::Won {
            let mut out = Output::new();
            render_epilogue(&mut out, &self.world);
            term.print(out);
        }

        info!(?ending, riddles_solved = self.riddle_index, "session over");
        Ok(ending)
    }
}
