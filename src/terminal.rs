use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::style::{Stylize, style};

use crate::engine::{Output, OutputBlock};

const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Where the game loop sends its output and gets its input from.
pub trait Terminal {
    fn print(&mut self, output: Output);

    /// Show `prompt` (if any) and "> ", then block for one line. The line terminator is
    /// stripped. `Ok(None)` means the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Text of an output with all styling dropped, one line per block.
pub fn render_plain(output: &Output) -> String {
    let mut text = String::new();
    for block in &output.blocks {
        match block {
            OutputBlock::Rule => text.push_str(RULE),
            OutputBlock::Blank => {}
            OutputBlock::Title { name, desc } => {
                text.push_str(name);
                if let Some(desc) = desc {
                    text.push_str(": ");
                    text.push_str(desc);
                }
            }
            OutputBlock::Entry(s) => {
                text.push_str("- ");
                text.push_str(s);
            }
            OutputBlock::Heading(s)
            | OutputBlock::Text(s)
            | OutputBlock::Error(s)
            | OutputBlock::Success(s) => text.push_str(s),
        }
        text.push('\n');
    }
    text
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Stdin/stdout terminal. Colors are cosmetic and can be switched off.
pub struct StdTerminal {
    color: bool,
}

impl StdTerminal {
    pub fn new(color: bool) -> Self {
        StdTerminal { color }
    }

    fn print_styled(&self, output: &Output) {
        for block in &output.blocks {
            match block {
                OutputBlock::Rule => println!("{RULE}"),
                OutputBlock::Blank => println!(),
                OutputBlock::Title { name, desc } => match desc {
                    Some(desc) => println!("{}{}", style(format!("{name}: ")).bold(), desc),
                    None => println!("{}", name.as_str().bold()),
                },
                OutputBlock::Heading(s) => println!("{}", s.as_str().bold()),
                OutputBlock::Entry(s) => println!("- {s}"),
                OutputBlock::Text(s) => println!("{s}"),
                OutputBlock::Error(s) => println!("{}", s.as_str().red()),
                OutputBlock::Success(s) => println!("{}", s.as_str().green()),
            }
        }
    }
}

impl Terminal for StdTerminal {
    fn print(&mut self, output: Output) {
        if self.color {
            self.print_styled(&output);
        } else {
            print!("{}", render_plain(&output));
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        if !prompt.is_empty() {
            writeln!(stdout, "{prompt}")?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

/// In-memory terminal fed from a list of lines; keeps a plain transcript of everything
/// printed. Used to drive whole sessions in tests.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    pub outputs: Vec<Output>,
    pub prompts: Vec<String>,
    pub transcript: String,
}

impl ScriptedTerminal {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedTerminal {
            input: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn print(&mut self, output: Output) {
        self.transcript.push_str(&render_plain(&output));
        self.outputs.push(output);
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front().map(strip_line_ending))
    }
}
