//! Line-oriented console implementation of the presentation port.

use std::io::{BufRead, Write};

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use wf_engine::{EngineError, EngineResult, Presenter};

/// Fixed strings the console shows around player input.
#[derive(Debug, Clone)]
pub struct ConsolePrompts {
    /// Shown before reading a menu answer.
    pub choice: String,
    /// Shown when a menu answer is rejected.
    pub invalid: String,
    /// Shown when waiting for the player to press Enter.
    pub continue_prompt: String,
}

impl Default for ConsolePrompts {
    fn default() -> Self {
        Self {
            choice: "Enter your choice: ".to_string(),
            invalid: "Please enter a valid option.".to_string(),
            continue_prompt: "[Press Enter to continue]".to_string(),
        }
    }
}

/// Rendering options for [`ConsolePort`].
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Wrap width for narrative text.
    pub width: usize,
    /// Length of divider lines.
    pub divider_width: usize,
    /// Character divider lines are drawn with.
    pub divider_char: char,
    /// Whether scenes may clear the terminal.
    pub clear_screen: bool,
    /// Whether to emit ANSI colors.
    pub color: bool,
    /// Input prompts.
    pub prompts: ConsolePrompts,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            width: 78,
            divider_width: 60,
            divider_char: '=',
            clear_screen: true,
            color: true,
            prompts: ConsolePrompts::default(),
        }
    }
}

impl ConsoleConfig {
    /// Set the wrap width. Zero is treated as one column.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Enable or disable screen clearing.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// A [`Presenter`] over any buffered reader and writer.
pub struct ConsolePort<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> ConsolePort<R, W> {
    /// Create a console port.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consume the port and return its writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, prompt: &str) -> EngineResult<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line with the trailing newline removed. `None` at end of input.
    fn next_line(&mut self) -> EngineResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn paint(&self, text: String, style: fn(&str) -> colored::ColoredString) -> String {
        if self.config.color {
            style(&text).to_string()
        } else {
            text
        }
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePort<R, W> {
    fn show_text(&mut self, text: &str) -> EngineResult<()> {
        for line in wrap_text(text, self.config.width) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn show_menu(&mut self, labels: &[&str]) -> EngineResult<()> {
        for (index, label) in labels.iter().enumerate() {
            let number = self.paint(format!("{}.", index + 1), |s| s.bold());
            writeln!(self.output, "  {number} {label}")?;
        }
        Ok(())
    }

    fn read_choice(&mut self) -> EngineResult<String> {
        let prompt = self.config.prompts.choice.clone();
        self.prompt(&prompt)?;
        self.next_line()?.ok_or(EngineError::InputClosed)
    }

    fn reject_choice(&mut self, _input: &str) -> EngineResult<()> {
        let message = self.paint(self.config.prompts.invalid.clone(), |s| s.yellow());
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn prompt_continue(&mut self) -> EngineResult<()> {
        let prompt = format!("\n{}", self.config.prompts.continue_prompt);
        let prompt = self.paint(prompt, |s| s.dimmed());
        self.prompt(&prompt)?;
        // A closed stdin only fails the next real question.
        if self.next_line()?.is_none() {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> EngineResult<String> {
        self.prompt(prompt)?;
        self.next_line()?.ok_or(EngineError::InputClosed)
    }

    fn divider(&mut self) -> EngineResult<()> {
        let line = self
            .config
            .divider_char
            .to_string()
            .repeat(self.config.divider_width);
        let line = self.paint(line, |s| s.dimmed());
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn clear(&mut self) -> EngineResult<()> {
        if self.config.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Word-wrap text into lines of at most `width` characters.
///
/// Existing line breaks are kept; a word longer than the width gets a line
/// of its own rather than being split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        // Preformatted art keeps its spacing.
        if raw_line.starts_with(' ') || raw_line.trim().is_empty() {
            lines.push(raw_line.trim_end().to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0;
        for word in raw_line.split_whitespace() {
            let word_len = word.chars().count();
            if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use wf_engine::{Menu, prompt_choice};

    fn port(input: &str) -> ConsolePort<Cursor<Vec<u8>>, Vec<u8>> {
        let config = ConsoleConfig::default()
            .with_color(false)
            .with_clear_screen(false)
            .with_width(20);
        ConsolePort::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config)
    }

    fn printed(port: ConsolePort<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(port.into_output()).unwrap()
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 15);
        assert_eq!(lines, ["the quick brown", "fox jumps over", "the lazy dog"]);
    }

    #[test]
    fn wrap_keeps_long_words_and_blank_lines() {
        let lines = wrap_text("a supercalifragilistic b\n\nc", 10);
        assert_eq!(lines, ["a", "supercalifragilistic", "b", "", "c"]);
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        let lines = wrap_text("élan vital éclat", 10);
        assert_eq!(lines, ["élan vital", "éclat"]);
    }

    #[test]
    fn indented_lines_are_left_alone() {
        let lines = wrap_text("    /\\    /\\\nplain", 4);
        assert_eq!(lines, ["    /\\    /\\", "plain"]);
    }

    #[test]
    fn menu_round_trip_over_console() {
        let mut console = port("9\n2\n");
        let menu = Menu::new("Pick one").option("Left", 1).option("Right", 2);

        assert_eq!(prompt_choice(&mut console, &menu).unwrap(), 2);

        let out = printed(console);
        assert!(out.contains("Pick one\n  1. Left\n  2. Right\n"));
        assert!(out.contains("Please enter a valid option."));
        assert_eq!(out.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut console = port("");
        let err = console.read_line("Name? ").unwrap_err();
        assert!(matches!(err, EngineError::InputClosed));
    }

    #[test]
    fn continue_consumes_one_line() {
        let mut console = port("\nKael\n");
        console.prompt_continue().unwrap();
        assert_eq!(console.read_line("Name? ").unwrap(), "Kael");
    }

    #[test]
    fn continue_tolerates_end_of_input() {
        let mut console = port("");
        console.prompt_continue().unwrap();
    }

    #[test]
    fn divider_and_disabled_clear() {
        let mut console = port("");
        console.clear().unwrap();
        console.divider().unwrap();
        let out = printed(console);
        assert_eq!(out, format!("{}\n", "=".repeat(60)));
    }

    #[test]
    fn crlf_is_stripped() {
        let mut console = port("Kael\r\n");
        assert_eq!(console.read_line("Name? ").unwrap(), "Kael");
    }
}
