//! Line-oriented operator input.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use colored::*;
use localconnect_common::error::DirectoryResult;
use localconnect_common::models::business::Business;
use localconnect_core::ReviewPrompter;

use crate::terminal::colors;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the answer without its line ending.
    ///
    /// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{} ", question.color(colors::PRIMARY))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Only `y` (any case, surrounding space ignored) counts as yes.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{question} (Y/N):"))?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}

/// Drives the review confirmation over a [`Prompt`].
pub struct TerminalPrompter<'p, R, W> {
    prompt: &'p mut Prompt<R, W>,
}

impl<'p, R: BufRead, W: Write> TerminalPrompter<'p, R, W> {
    pub fn new(prompt: &'p mut Prompt<R, W>) -> Self {
        Self { prompt }
    }

    fn choose_one(&mut self, business: &Business) -> io::Result<Option<usize>> {
        self.prompt.say(&format!(
            "\nFound: {} located in {}",
            business.display_name().color(colors::PRIMARY).bold(),
            business.display_location().color(colors::SECONDARY)
        ))?;
        let accepted = self.prompt.confirm("Is this the business you want to review?")?;
        Ok(accepted.then_some(0))
    }

    fn choose_many(&mut self, candidates: &[Business]) -> io::Result<Option<usize>> {
        self.prompt.say(&format!(
            "\n{} businesses match:",
            candidates.len().to_string().color(colors::ACCENT)
        ))?;
        for (idx, business) in candidates.iter().enumerate() {
            self.prompt.say(&format!(
                "  {} {} located in {}",
                format!("{}.", idx + 1).color(colors::ACCENT),
                business.display_name(),
                business.display_location()
            ))?;
        }
        let answer = self
            .prompt
            .ask(&format!("Which one do you want to review? (1-{}, Enter to cancel):", candidates.len()))?;
        Ok(answer
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=candidates.len()).contains(n))
            .map(|n| n - 1))
    }
}

impl<R: BufRead, W: Write> ReviewPrompter for TerminalPrompter<'_, R, W> {
    fn choose(&mut self, candidates: &[Business]) -> DirectoryResult<Option<usize>> {
        let choice = match candidates {
            [] => None,
            [only] => self.choose_one(only)?,
            many => self.choose_many(many)?,
        };
        Ok(choice)
    }

    fn rating(&mut self) -> DirectoryResult<String> {
        Ok(self.prompt.ask("Enter your rating (1-5):")?)
    }

    fn comment(&mut self) -> DirectoryResult<String> {
        Ok(self.prompt.ask("Enter your comment:")?)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
