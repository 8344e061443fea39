//! The scene engine: drives a session from the intro scene to an ending.

use std::fmt;

use rand::rngs::StdRng;

use crate::config::SessionConfig;
use crate::context::SceneContext;
use crate::error::{EngineError, EngineResult};
use crate::port::Presenter;
use crate::registry::SceneRegistry;
use crate::scene::{SceneId, Transition};
use crate::state::PlayerState;
use crate::story::Story;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// A scene returned [`Transition::Terminal`].
    Completed,
    /// The defeat scene was played, either by transition or because the
    /// player failed the liveness check.
    Defeated,
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Defeated => write!(f, "defeated"),
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// How the run ended.
    pub ending: Ending,
    /// The last scene played.
    pub last_scene: SceneId,
    /// Number of scene invocations, including the defeat scene.
    pub scenes_played: usize,
}

/// Result of a single engine step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The session moved on to this scene.
    Continue(SceneId),
    /// The session is over.
    Finished(RunOutcome),
}

/// A play session: scenes, player state, and the random source.
///
/// The session owns everything a run mutates. Scenes receive it piecewise
/// through a [`SceneContext`].
pub struct Session {
    registry: SceneRegistry,
    state: PlayerState,
    rng: StdRng,
    current: SceneId,
    scenes_played: usize,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("current", &self.current)
            .field("scenes_played", &self.scenes_played)
            .field("state", &self.state)
            .finish()
    }
}

impl Session {
    /// Create a session that starts at the registry's intro scene.
    pub fn new(registry: SceneRegistry, state: PlayerState, config: &SessionConfig) -> Self {
        let current = registry.intro().clone();
        Self {
            registry,
            state,
            rng: config.rng(),
            current,
            scenes_played: 0,
        }
    }

    /// Build a story's scenes and let the player create their character.
    pub fn from_story(
        story: &dyn Story,
        port: &mut dyn Presenter,
        config: &SessionConfig,
    ) -> EngineResult<Self> {
        let registry = story.scenes()?;
        let state = story.create_player(port)?;
        log::debug!(
            "starting {:?} for {} ({})",
            story.key(),
            state.name,
            state.archetype
        );
        Ok(Self::new(registry, state, config))
    }

    /// The player state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Mutable access to the player state.
    pub fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }

    /// The scene that will play next.
    pub fn current(&self) -> &SceneId {
        &self.current
    }

    /// Play the current scene and apply the engine's transition rules.
    ///
    /// After every scene the liveness check runs first: a failed player is
    /// sent straight to the defeat scene, whatever the scene returned. A
    /// `Goto` must name one of the scene's declared exits.
    pub fn step(&mut self, port: &mut dyn Presenter) -> EngineResult<Step> {
        let current = self.current.clone();
        let transition = self.play(port, &current)?;

        let defeat = self.registry.defeat().clone();
        if self.current == defeat {
            return Ok(Step::Finished(self.outcome(Ending::Defeated)));
        }

        if self.state.is_grounded() {
            log::info!(
                "player failed in {}; redirecting to {defeat}",
                self.current
            );
            self.play(port, &defeat)?;
            self.current = defeat;
            return Ok(Step::Finished(self.outcome(Ending::Defeated)));
        }

        match transition {
            Transition::Terminal => Ok(Step::Finished(self.outcome(Ending::Completed))),
            Transition::Goto(next) => {
                let declared = self
                    .registry
                    .get(&self.current)
                    .is_some_and(|scene| scene.exits().contains(&next));
                if !declared {
                    return Err(EngineError::UndeclaredExit {
                        from: self.current.clone(),
                        to: next,
                    });
                }
                log::debug!("{} -> {next}", self.current);
                self.current = next.clone();
                Ok(Step::Continue(next))
            }
        }
    }

    /// Run until a scene ends the session or the player fails.
    ///
    /// There is no iteration limit; a scene graph with a cycle that never
    /// fails the player runs for as long as the player keeps choosing it.
    pub fn run(&mut self, port: &mut dyn Presenter) -> EngineResult<RunOutcome> {
        loop {
            if let Step::Finished(outcome) = self.step(port)? {
                log::debug!("session {} after {} scenes", outcome.ending, outcome.scenes_played);
                return Ok(outcome);
            }
        }
    }

    fn play(&mut self, port: &mut dyn Presenter, id: &SceneId) -> EngineResult<Transition> {
        let scene = self
            .registry
            .get(id)
            .ok_or_else(|| EngineError::UnknownScene(id.clone()))?;
        let mut ctx = SceneContext {
            state: &mut self.state,
            port,
            rng: &mut self.rng,
        };
        let transition = scene.play(&mut ctx)?;
        self.scenes_played += 1;
        Ok(transition)
    }

    fn outcome(&self, ending: Ending) -> RunOutcome {
        RunOutcome {
            ending,
            last_scene: self.current.clone(),
            scenes_played: self.scenes_played,
        }
    }
}

/// Create a session for `story` and run it to the end.
pub fn play_story(
    story: &dyn Story,
    port: &mut dyn Presenter,
    config: &SessionConfig,
) -> EngineResult<RunOutcome> {
    let mut session = Session::from_story(story, port, config)?;
    session.run(port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::{Menu, ScriptedPresenter};
    use crate::scene::FnScene;
    use crate::state::Counter;

    fn player(health: i32) -> PlayerState {
        PlayerState::new("Kael", "squire")
            .with_counter(Counter::bounded("health", "Health", health, 0, 10).required(0))
    }

    fn intro(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.say("intro")?;
        let next = ctx.choose(
            &Menu::new("Where to?")
                .option("The trap", "trap")
                .option("The road", "road"),
        )?;
        Ok(Transition::goto(next))
    }

    fn trap(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.say("trap")?;
        ctx.state.adjust([("health", -1)]);
        Ok(Transition::goto("road"))
    }

    fn road(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.say("road")?;
        Ok(Transition::goto("castle"))
    }

    fn castle(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.say("castle")?;
        Ok(Transition::Terminal)
    }

    fn defeat(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.say("defeat")?;
        Ok(Transition::Terminal)
    }

    fn lost(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
        ctx.say("lost")?;
        Ok(Transition::goto("nowhere"))
    }

    fn registry() -> SceneRegistry {
        SceneRegistry::builder("intro", "defeat")
            .scene(FnScene::new("intro", intro).with_exits(["trap", "road"]))
            .scene(FnScene::new("trap", trap).with_exits(["road"]))
            .scene(FnScene::new("road", road).with_exits(["castle"]))
            .scene(FnScene::new("castle", castle))
            .scene(FnScene::new("defeat", defeat))
            .scene(FnScene::new("lost", lost))
            .build()
            .unwrap()
    }

    fn config() -> SessionConfig {
        SessionConfig::default().with_seed(42)
    }

    // Exact line match; `saw` would also hit menu labels like "The road".
    fn said(port: &ScriptedPresenter, line: &str) -> bool {
        port.transcript().iter().any(|l| l == line)
    }

    #[test]
    fn runs_to_terminal() {
        let mut session = Session::new(registry(), player(5), &config());
        let mut port = ScriptedPresenter::new(["2"]);

        let outcome = session.run(&mut port).unwrap();

        assert_eq!(outcome.ending, Ending::Completed);
        assert_eq!(outcome.last_scene.as_str(), "castle");
        assert_eq!(outcome.scenes_played, 3);
        assert!(!port.saw("defeat"));
    }

    #[test]
    fn failed_player_is_redirected_to_defeat() {
        let mut session = Session::new(registry(), player(1), &config());
        let mut port = ScriptedPresenter::new(["1"]);

        let outcome = session.run(&mut port).unwrap();

        assert_eq!(outcome.ending, Ending::Defeated);
        assert_eq!(outcome.last_scene.as_str(), "defeat");
        assert!(said(&port, "trap"));
        assert!(!said(&port, "road"));
        assert!(!said(&port, "castle"));
        let defeats = port.transcript().iter().filter(|l| *l == "defeat").count();
        assert_eq!(defeats, 1);
    }

    #[test]
    fn surviving_damage_continues() {
        let mut session = Session::new(registry(), player(2), &config());
        let mut port = ScriptedPresenter::new(["1"]);

        let outcome = session.run(&mut port).unwrap();

        assert_eq!(outcome.ending, Ending::Completed);
        assert_eq!(session.state().value("health"), 1);
        assert!(port.saw("castle"));
    }

    #[test]
    fn step_reports_each_transition() {
        let mut session = Session::new(registry(), player(5), &config());
        let mut port = ScriptedPresenter::new(["2"]);

        assert_eq!(
            session.step(&mut port).unwrap(),
            Step::Continue(SceneId::new("road"))
        );
        assert_eq!(session.current().as_str(), "road");
        assert_eq!(
            session.step(&mut port).unwrap(),
            Step::Continue(SceneId::new("castle"))
        );
        assert!(matches!(
            session.step(&mut port).unwrap(),
            Step::Finished(RunOutcome {
                ending: Ending::Completed,
                ..
            })
        ));
    }

    #[test]
    fn grounded_state_overrides_any_transition() {
        let mut session = Session::new(registry(), player(5), &config());
        session.state_mut().adjust([("health", -5)]);
        let mut port = ScriptedPresenter::new(["2"]);

        let outcome = session.run(&mut port).unwrap();

        assert_eq!(outcome.ending, Ending::Defeated);
        assert!(!said(&port, "road"));
        assert_eq!(outcome.scenes_played, 2);
    }

    #[test]
    fn undeclared_exit_halts_the_run() {
        fn wander(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
            ctx.say("wander")?;
            Ok(Transition::goto("castle"))
        }
        let registry = SceneRegistry::builder("intro", "defeat")
            .scene(FnScene::new("intro", wander))
            .scene(FnScene::new("castle", castle))
            .scene(FnScene::new("defeat", defeat))
            .build()
            .unwrap();
        let mut session = Session::new(registry, player(5), &config());
        let mut port = ScriptedPresenter::default();

        let err = session.run(&mut port).unwrap_err();

        match err {
            EngineError::UndeclaredExit { from, to } => {
                assert_eq!(from.as_str(), "intro");
                assert_eq!(to.as_str(), "castle");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(said(&port, "wander"));
        assert!(!said(&port, "castle"));
        assert_eq!(session.current().as_str(), "intro");
    }

    #[test]
    fn undeclared_exit_to_unregistered_scene_is_rejected() {
        let mut session = Session::new(registry(), player(5), &config());
        session.current = SceneId::new("lost");
        let mut port = ScriptedPresenter::default();

        let err = session.run(&mut port).unwrap_err();

        assert!(matches!(
            err,
            EngineError::UndeclaredExit { ref to, .. } if to.as_str() == "nowhere"
        ));
        assert!(said(&port, "lost"));
    }

    #[test]
    fn unknown_current_scene_halts_the_run() {
        let mut session = Session::new(registry(), player(5), &config());
        session.current = SceneId::new("nowhere");
        let mut port = ScriptedPresenter::default();

        let err = session.run(&mut port).unwrap_err();

        match err {
            EngineError::UnknownScene(id) => assert_eq!(id.as_str(), "nowhere"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(port.transcript().is_empty());
    }

    #[test]
    fn reaching_defeat_by_transition_counts_as_defeat() {
        fn give_up(_: &mut SceneContext<'_>) -> EngineResult<Transition> {
            Ok(Transition::goto("defeat"))
        }
        let registry = SceneRegistry::builder("intro", "defeat")
            .scene(FnScene::new("intro", give_up).with_exits(["defeat"]))
            .scene(FnScene::new("defeat", defeat))
            .build()
            .unwrap();
        let mut session = Session::new(registry, player(5), &config());
        let mut port = ScriptedPresenter::default();

        let outcome = session.run(&mut port).unwrap();

        assert_eq!(outcome.ending, Ending::Defeated);
        assert_eq!(outcome.scenes_played, 2);
    }
}
