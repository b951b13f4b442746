//! Line-oriented terminal I/O behind a trait so the game loop can be
//! driven by a script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

/// Semantic colour of a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Title,
    Good,
    Bad,
    Info,
    Muted,
}

impl Tone {
    pub fn color(&self) -> Option<Color> {
        match self {
            Tone::Normal => None,
            Tone::Title => Some(Color::Cyan),
            Tone::Good => Some(Color::Green),
            Tone::Bad => Some(Color::Red),
            Tone::Info => Some(Color::Yellow),
            Tone::Muted => Some(Color::DarkGrey),
        }
    }
}

pub trait Frontend {
    fn clear(&mut self) -> io::Result<()>;

    fn print_styled(&mut self, text: &str, tone: Tone) -> io::Result<()>;

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.print_styled(text, Tone::Normal)
    }

    /// Shows `label` and reads one trimmed line. End of input is an
    /// `UnexpectedEof` error.
    fn prompt(&mut self, label: &str) -> io::Result<String>;

    fn pause(&mut self) -> io::Result<()> {
        self.prompt("\nPress Enter to continue...").map(|_| ())
    }
}

/// Asks until the player picks one of `count` numbered options.
/// Returns the zero-based index.
pub fn choose<F: Frontend + ?Sized>(frontend: &mut F, label: &str, count: usize) -> io::Result<usize> {
    loop {
        let input = frontend.prompt(label)?;
        match input.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(n - 1),
            _ => {
                let valid: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
                frontend.print_styled(
                    &format!("Invalid choice! Please enter one of: {}", valid.join(", ")),
                    Tone::Bad,
                )?;
            }
        }
    }
}

/// Asks a yes/no question until answered.
pub fn confirm<F: Frontend + ?Sized>(frontend: &mut F, label: &str) -> io::Result<bool> {
    loop {
        let input = frontend.prompt(&format!("{} (y/n): ", label))?;
        match input.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => frontend.print_styled("Please enter 'y' for yes or 'n' for no.", Tone::Bad)?,
        }
    }
}

/// Stdout/stdin frontend using crossterm for colour and screen clearing.
pub struct ConsoleFrontend {
    out: io::Stdout,
    input: io::Stdin,
}

impl ConsoleFrontend {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            input: io::stdin(),
        }
    }
}

impl Default for ConsoleFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for ConsoleFrontend {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn print_styled(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        match tone.color() {
            Some(color) => execute!(
                self.out,
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                Print("\n")
            ),
            None => execute!(self.out, Print(text), Print("\n")),
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        execute!(self.out, Print(label))?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

/// Replays canned input and records everything printed.
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
    pub clears: usize,
}

impl ScriptedFrontend {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            clears: 0,
        }
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Whether any printed line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Frontend for ScriptedFrontend {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn print_styled(&mut self, text: &str, _tone: Tone) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        self.output.push(label.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn pause(&mut self) -> io::Result<()> {
        Ok(())
    }
}
