/// A parsed line of player input.
///
/// Keywords are case-sensitive. Arguments are kept as raw text; `Move` validates its
/// direction at dispatch time so the player hears which token was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(String),
    Examine(String),
    Answer,
    Where,
    Riddle,
    Help,
    Quit,
    Unknown,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();

        if let Some(dir) = line.strip_prefix("move ") {
            return Command::Move(dir.trim().to_string());
        }
        if let Some(obj) = line.strip_prefix("examine ") {
            return Command::Examine(obj.trim().to_string());
        }

        match line {
            "answer" => Command::Answer,
            "where" => Command::Where,
            "riddle" => Command::Riddle,
            "help" => Command::Help,
            "quit" => Command::Quit,
            _ => Command::Unknown,
        }
    }
}
