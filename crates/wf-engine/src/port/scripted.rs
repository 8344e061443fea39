//! A presenter that replays pre-supplied answers.

use std::collections::VecDeque;

use super::Presenter;
use crate::error::{EngineError, EngineResult};

/// A [`Presenter`] fed from a fixed list of answers.
///
/// Every line of output is recorded in a transcript. Menu answers and
/// free-text answers are taken from the same queue in order; continue
/// prompts do not consume an answer. Running out of answers is reported as
/// [`EngineError::InputExhausted`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedPresenter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
    rejections: usize,
    pauses: usize,
}

impl ScriptedPresenter {
    /// Create a presenter that will answer with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Everything shown so far, one entry per line of output.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Returns true if any transcript entry contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Number of menu answers that were rejected.
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    /// Number of continue prompts shown.
    pub fn pauses(&self) -> usize {
        self.pauses
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self) -> EngineResult<String> {
        self.answers.pop_front().ok_or(EngineError::InputExhausted)
    }
}

impl Presenter for ScriptedPresenter {
    fn show_text(&mut self, text: &str) -> EngineResult<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn read_choice(&mut self) -> EngineResult<String> {
        self.next_answer()
    }

    fn reject_choice(&mut self, input: &str) -> EngineResult<()> {
        self.rejections += 1;
        self.transcript.push(format!("rejected: {input}"));
        Ok(())
    }

    fn prompt_continue(&mut self) -> EngineResult<()> {
        self.pauses += 1;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> EngineResult<String> {
        self.transcript.push(prompt.to_string());
        self.next_answer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_order() {
        let mut port = ScriptedPresenter::new(["Kael", "2"]);
        assert_eq!(port.read_line("Name?").unwrap(), "Kael");
        assert_eq!(port.read_choice().unwrap(), "2");
        assert!(matches!(
            port.read_choice(),
            Err(EngineError::InputExhausted)
        ));
    }

    #[test]
    fn records_transcript() {
        let mut port = ScriptedPresenter::default();
        port.show_text("The fog rolls in.").unwrap();
        port.prompt_continue().unwrap();
        port.show_menu(&["Left", "Right"]).unwrap();

        assert_eq!(
            port.transcript(),
            &["The fog rolls in.", "  1. Left", "  2. Right"]
        );
        assert_eq!(port.pauses(), 1);
        assert!(port.saw("fog"));
    }
}
