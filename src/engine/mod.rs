mod command;
mod movement;
mod objects;
mod output;
mod render;
mod riddles;

pub use command::Command;
pub use movement::handle_move;
pub use objects::handle_examine;
pub use output::{Output, OutputBlock};
pub use render::{HELP_TEXT, render_epilogue, render_help, render_opening, render_room};
pub use riddles::{AnswerOutcome, answer_matches, handle_answer};
