//! Error types for the scene engine.

use thiserror::Error;

use crate::scene::SceneId;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that halt a Wayfarer session.
///
/// Bad menu input and exhausted counters are never reported here: the former
/// is re-prompted and the latter routes to the defeat scene.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The session tried to play a scene that is not registered.
    #[error("unknown scene: {0}")]
    UnknownScene(SceneId),

    /// The registry lacks a scene it was told to use for a structural role.
    #[error("missing {role} scene: {id}")]
    MissingScene {
        /// Structural role (`intro` or `defeat`).
        role: &'static str,
        /// The identifier that was not registered.
        id: SceneId,
    },

    /// Two scenes were registered under the same identifier.
    #[error("duplicate scene: {0}")]
    DuplicateScene(SceneId),

    /// A scene declares an exit that is not registered.
    #[error("scene {from} has an exit to unknown scene {to}")]
    DanglingExit {
        /// Scene declaring the exit.
        from: SceneId,
        /// The unregistered target.
        to: SceneId,
    },

    /// A scene returned a transition it did not declare as an exit.
    #[error("scene {from} moved to {to}, which is not one of its exits")]
    UndeclaredExit {
        /// Scene that returned the transition.
        from: SceneId,
        /// The undeclared target.
        to: SceneId,
    },

    /// A menu was prompted with no options.
    #[error("menu has no options: {message:?}")]
    EmptyMenu {
        /// The prompt message of the offending menu.
        message: String,
    },

    /// An outcome table was built without any tiers.
    #[error("outcome table has no tiers")]
    EmptyOutcomeTable,

    /// Outcome thresholds were not strictly descending.
    #[error("outcome threshold {next} does not descend from {previous}")]
    ThresholdOrder {
        /// The earlier (higher) threshold.
        previous: i32,
        /// The offending threshold.
        next: i32,
    },

    /// A scripted input source ran out of answers.
    #[error("scripted input exhausted")]
    InputExhausted,

    /// The input stream was closed while waiting for the player.
    #[error("input closed")]
    InputClosed,

    /// I/O failure in a presentation port.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
