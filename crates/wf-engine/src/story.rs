//! The seam between the engine and authored content.

use crate::error::EngineResult;
use crate::port::Presenter;
use crate::registry::SceneRegistry;
use crate::state::PlayerState;

/// A complete authored adventure.
///
/// A story owns all narrative text. The engine only knows it through the
/// scenes it registers and the player it creates.
pub trait Story {
    /// Short identifier, e.g. for a command-line flag.
    fn key(&self) -> &str;

    /// Human-readable title.
    fn title(&self) -> &str;

    /// Build the story's scene registry.
    fn scenes(&self) -> EngineResult<SceneRegistry>;

    /// Greet the player, ask for a name and archetype, and return the
    /// starting state.
    fn create_player(&self, port: &mut dyn Presenter) -> EngineResult<PlayerState>;
}
