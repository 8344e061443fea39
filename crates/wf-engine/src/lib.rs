//! Scene and state engine for Wayfarer branching text adventures.
//!
//! A story is a finite set of named scenes. Each scene shows narrative
//! text, offers the player a small menu, mutates the player's bounded
//! counters and item set, and returns a [`Transition`]. The [`Session`]
//! drives scenes from the intro to an ending, sending the player to the
//! defeat scene whenever the liveness check fails. All player-facing I/O
//! goes through the [`Presenter`] port.

/// Configuration for play sessions.
pub mod config;
/// Mutable context handed to scenes.
pub mod context;
/// The driver loop.
pub mod engine;
/// Error types for the engine.
pub mod error;
/// Score rules and ending tables.
pub mod outcome;
/// The presentation port and choice menus.
pub mod port;
/// The scene registry.
pub mod registry;
/// Scenes, identifiers, and transitions.
pub mod scene;
/// Player state.
pub mod state;
/// The story trait implemented by authored content.
pub mod story;

pub use config::SessionConfig;
pub use context::SceneContext;
pub use engine::{Ending, RunOutcome, Session, Step, play_story};
pub use error::{EngineError, EngineResult};
pub use outcome::{Condition, OutcomeTable, Score, ScoreRule};
pub use port::{Menu, Presenter, ScriptedPresenter, prompt_choice};
pub use registry::SceneRegistry;
pub use scene::{FnScene, Scene, SceneId, Transition};
pub use state::{Counter, PlayerState, SummaryLabels};
pub use story::Story;
