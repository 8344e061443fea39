//! The context a scene plays against: player state, port, and dice.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::EngineResult;
use crate::port::{Menu, Presenter, prompt_choice};
use crate::state::PlayerState;

/// Mutable context passed to each scene when it plays.
pub struct SceneContext<'a> {
    /// The player state owned by the session.
    pub state: &'a mut PlayerState,
    /// The presentation port.
    pub port: &'a mut dyn Presenter,
    /// The session's random source.
    pub rng: &'a mut StdRng,
}

impl SceneContext<'_> {
    /// Show a block of narrative text.
    pub fn say(&mut self, text: &str) -> EngineResult<()> {
        self.port.show_text(text)
    }

    /// Ask the player to pick from a menu and return the chosen value.
    pub fn choose<T: Clone>(&mut self, menu: &Menu<T>) -> EngineResult<T> {
        prompt_choice(self.port, menu)
    }

    /// Wait for the player to acknowledge.
    pub fn pause(&mut self) -> EngineResult<()> {
        self.port.prompt_continue()
    }

    /// Draw a divider line.
    pub fn divider(&mut self) -> EngineResult<()> {
        self.port.divider()
    }

    /// Clear the screen.
    pub fn clear(&mut self) -> EngineResult<()> {
        self.port.clear()
    }

    /// Return true with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }
}
