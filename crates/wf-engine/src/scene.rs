//! Scenes, scene identifiers, and transitions.

use std::fmt;

use crate::context::SceneContext;
use crate::error::EngineResult;

/// Identifier of a scene in a [`SceneRegistry`](crate::SceneRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(String);

impl SceneId {
    /// Create a scene identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a scene asks the engine to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Continue with another scene.
    Goto(SceneId),
    /// End the session.
    Terminal,
}

impl Transition {
    /// Shorthand for [`Transition::Goto`].
    pub fn goto(id: impl Into<SceneId>) -> Self {
        Self::Goto(id.into())
    }
}

/// One narrative unit: text, a choice, state changes, and a transition.
///
/// Scenes hold no mutable state of their own. Everything they change lives
/// in the [`SceneContext`].
pub trait Scene: fmt::Debug {
    /// Identifier this scene is registered under.
    fn id(&self) -> &SceneId;

    /// Every scene this one may transition to. Used by
    /// [`SceneRegistry::validate`](crate::SceneRegistry::validate).
    fn exits(&self) -> &[SceneId];

    /// Play the scene.
    fn play(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition>;
}

/// Scene behaviour as a plain function.
pub type SceneFn = fn(&mut SceneContext<'_>) -> EngineResult<Transition>;

/// A [`Scene`] backed by a function pointer.
pub struct FnScene {
    id: SceneId,
    exits: Vec<SceneId>,
    play: SceneFn,
}

impl FnScene {
    /// Create a scene with no declared exits.
    pub fn new(id: impl Into<SceneId>, play: SceneFn) -> Self {
        Self {
            id: id.into(),
            exits: Vec::new(),
            play,
        }
    }

    /// Declare the scenes this one may transition to.
    pub fn with_exits<I, S>(mut self, exits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SceneId>,
    {
        self.exits.extend(exits.into_iter().map(Into::into));
        self
    }
}

impl fmt::Debug for FnScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnScene")
            .field("id", &self.id)
            .field("exits", &self.exits)
            .finish()
    }
}

impl Scene for FnScene {
    fn id(&self) -> &SceneId {
        &self.id
    }

    fn exits(&self) -> &[SceneId] {
        &self.exits
    }

    fn play(&self, ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        (self.play)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut SceneContext<'_>) -> EngineResult<Transition> {
        Ok(Transition::Terminal)
    }

    #[test]
    fn scene_id_conversions() {
        let id = SceneId::from("intro");
        assert_eq!(id.as_str(), "intro");
        assert_eq!(id.to_string(), "intro");
        assert_eq!(SceneId::from("intro".to_string()), id);
    }

    #[test]
    fn goto_shorthand() {
        assert_eq!(
            Transition::goto("forest"),
            Transition::Goto(SceneId::new("forest"))
        );
    }

    #[test]
    fn fn_scene_builder() {
        let scene = FnScene::new("forest", noop).with_exits(["shrine", "bandit"]);
        assert_eq!(scene.id().as_str(), "forest");
        assert_eq!(
            scene.exits(),
            &[SceneId::new("shrine"), SceneId::new("bandit")]
        );
    }
}
