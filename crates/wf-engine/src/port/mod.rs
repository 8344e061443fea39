//! The presentation port: every piece of player-facing I/O goes through here.
//!
//! The engine never touches a terminal directly. A frontend implements
//! [`Presenter`] and the shared selection loop in [`prompt_choice`] drives
//! it, so a console, a test script, or any other frontend behaves the same
//! way when the player picks from a menu.

mod menu;
mod scripted;

pub use menu::{Menu, MenuOption};
pub use scripted::ScriptedPresenter;

use crate::error::{EngineError, EngineResult};

/// Player-facing input and output.
pub trait Presenter {
    /// Show a block of text.
    fn show_text(&mut self, text: &str) -> EngineResult<()>;

    /// Show the numbered options of a menu.
    fn show_menu(&mut self, labels: &[&str]) -> EngineResult<()> {
        for (index, label) in labels.iter().enumerate() {
            self.show_text(&format!("  {}. {label}", index + 1))?;
        }
        Ok(())
    }

    /// Read the player's raw answer to a menu.
    fn read_choice(&mut self) -> EngineResult<String>;

    /// Tell the player an answer was not accepted.
    fn reject_choice(&mut self, input: &str) -> EngineResult<()>;

    /// Block until the player acknowledges.
    fn prompt_continue(&mut self) -> EngineResult<()>;

    /// Read a line of free text, such as the protagonist's name.
    fn read_line(&mut self, prompt: &str) -> EngineResult<String>;

    /// Draw a divider line.
    fn divider(&mut self) -> EngineResult<()> {
        Ok(())
    }

    /// Clear the screen.
    fn clear(&mut self) -> EngineResult<()> {
        Ok(())
    }
}

/// Present a menu and block until the player picks a valid option.
///
/// An answer is accepted if it is a 1-based option number, or the literal
/// key of a keyed option. Anything else is rejected and the menu is shown
/// again, with no retry limit.
pub fn prompt_choice<T: Clone>(port: &mut dyn Presenter, menu: &Menu<T>) -> EngineResult<T> {
    if menu.is_empty() {
        return Err(EngineError::EmptyMenu {
            message: menu.message().to_string(),
        });
    }

    port.show_text(menu.message())?;
    let labels = menu.labels();
    loop {
        port.show_menu(&labels)?;
        let answer = port.read_choice()?;
        if let Some(value) = menu.select(&answer) {
            return Ok(value.clone());
        }
        log::trace!("rejected menu answer {answer:?}");
        port.reject_choice(answer.trim())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprompts_until_valid() {
        let menu = Menu::new("Pick one").option("A", 1).option("B", 2);
        let mut port = ScriptedPresenter::new(["x", "3", "2"]);

        let picked = prompt_choice(&mut port, &menu).unwrap();

        assert_eq!(picked, 2);
        assert_eq!(port.rejections(), 2);
        assert_eq!(port.remaining(), 0);
    }

    #[test]
    fn menu_is_shown_again_after_rejection() {
        let menu = Menu::new("Pick one").option("A", 1).option("B", 2);
        let mut port = ScriptedPresenter::new(["0", "1"]);

        prompt_choice(&mut port, &menu).unwrap();

        let shown = port
            .transcript()
            .iter()
            .filter(|line| line.as_str() == "  1. A")
            .count();
        assert_eq!(shown, 2);
        let messages = port
            .transcript()
            .iter()
            .filter(|line| line.as_str() == "Pick one")
            .count();
        assert_eq!(messages, 1);
    }

    #[test]
    fn accepts_literal_keys() {
        let menu = Menu::new("Pick an aircraft")
            .keyed("falcon", "Falcon", "falcon")
            .keyed("eagle", "Eagle", "eagle");
        let mut port = ScriptedPresenter::new(["eagle"]);
        assert_eq!(prompt_choice(&mut port, &menu).unwrap(), "eagle");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let menu = Menu::new("Pick one").option("A", 'a').option("B", 'b');
        let mut port = ScriptedPresenter::new(["  2 \n"]);
        assert_eq!(prompt_choice(&mut port, &menu).unwrap(), 'b');
    }

    #[test]
    fn empty_menu_is_a_programming_error() {
        let menu: Menu<u8> = Menu::new("Nothing to pick");
        let mut port = ScriptedPresenter::new(["1"]);
        let err = prompt_choice(&mut port, &menu).unwrap_err();
        assert!(matches!(err, EngineError::EmptyMenu { .. }));
        assert_eq!(port.remaining(), 1);
    }

    #[test]
    fn exhausted_script_surfaces_as_error() {
        let menu = Menu::new("Pick one").option("A", 1);
        let mut port = ScriptedPresenter::new(["nope"]);
        let err = prompt_choice(&mut port, &menu).unwrap_err();
        assert!(matches!(err, EngineError::InputExhausted));
    }
}
