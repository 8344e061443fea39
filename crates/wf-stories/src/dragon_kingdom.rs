//! Dragon Kingdom: the village of Brindel sends a hero after the dragon that
//! has been burning the kingdom.
//!
//! There are no counters. The three flags a hero can earn are held as items
//! and decide both the narration and which choices the dragon allows. A
//! finished legend can be replayed from the village with the flags cleared.

use wf_engine::{
    Condition, EngineResult, FnScene, Menu, PlayerState, Presenter, SceneContext, SceneRegistry,
    Story, SummaryLabels, Transition,
};

const RANGERS: &str = "allied rangers";
const RELIC: &str = "sacred relic";
const INSPIRED: &str = "village inspired";

const VILLAGE: &str = "village";
const FOREST_CAMP: &str = "forest-camp";
const HIDDEN_SCOUT: &str = "hidden-scout";
const CHAPEL: &str = "ruined-chapel";
const CRYPT: &str = "crypt";
const VILLAGE_DEFENSE: &str = "village-defense";
const MOUNTAIN_PASS: &str = "mountain-pass";
const PARLEY: &str = "dragon-parley";
const LAIR: &str = "dragon-lair";
const PEACE: &str = "epilogue-peace";
const VICTORY: &str = "epilogue-victory";
const RESTART: &str = "restart";
const FALLEN: &str = "fallen";

const CLOSE: &str = "close";

/// The Dragon Kingdom story.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragonKingdom;

/// Build a fresh hero with no allies or relics.
pub fn hero(name: impl Into<String>) -> PlayerState {
    PlayerState::new(name, "hero").with_summary_labels(SummaryLabels {
        items: "Allies and relics".to_string(),
        empty: "none".to_string(),
    })
}

/// True when the hero carries nothing the dragon would listen to.
pub fn parley_refused() -> Condition {
    Condition::All(vec![!flag(RELIC), !flag(RANGERS), !flag(INSPIRED)])
}

/// True when the dragon is talked down by the hero's allies alone.
pub fn parley_by_allies() -> Condition {
    Condition::Any(vec![flag(RANGERS), flag(INSPIRED)])
}

/// True when the hero has neither the seal nor the village behind them.
pub fn lair_lost() -> Condition {
    Condition::All(vec![!flag(RELIC), !flag(INSPIRED)])
}

fn flag(item: &str) -> Condition {
    Condition::has_item(item)
}

impl Story for DragonKingdom {
    fn key(&self) -> &str {
        "dragon-kingdom"
    }

    fn title(&self) -> &str {
        "Dragon Kingdom"
    }

    fn scenes(&self) -> EngineResult<SceneRegistry> {
        SceneRegistry::builder(VILLAGE, FALLEN)
            .scene(
                FnScene::new(VILLAGE, village).with_exits([FOREST_CAMP, CHAPEL, VILLAGE_DEFENSE]),
            )
            .scene(FnScene::new(FOREST_CAMP, forest_camp).with_exits([HIDDEN_SCOUT, MOUNTAIN_PASS]))
            .scene(FnScene::new(HIDDEN_SCOUT, hidden_scout).with_exits([CHAPEL, MOUNTAIN_PASS]))
            .scene(FnScene::new(CHAPEL, ruined_chapel).with_exits([MOUNTAIN_PASS, CRYPT]))
            .scene(FnScene::new(CRYPT, crypt).with_exits([MOUNTAIN_PASS]))
            .scene(FnScene::new(VILLAGE_DEFENSE, village_defense).with_exits([MOUNTAIN_PASS]))
            .scene(FnScene::new(MOUNTAIN_PASS, mountain_pass).with_exits([LAIR, PARLEY]))
            .scene(FnScene::new(PARLEY, dragon_parley).with_exits([LAIR, PEACE]))
            .scene(FnScene::new(LAIR, dragon_lair).with_exits([VICTORY, FALLEN]))
            .scene(FnScene::new(PEACE, epilogue_peace).with_exits([RESTART]))
            .scene(FnScene::new(VICTORY, epilogue_victory).with_exits([RESTART]))
            .scene(FnScene::new(RESTART, restart).with_exits([VILLAGE]))
            .scene(FnScene::new(FALLEN, fallen))
            .build()
    }

    fn create_player(&self, port: &mut dyn Presenter) -> EngineResult<PlayerState> {
        port.clear()?;
        port.divider()?;
        port.show_text("DRAGON KINGDOM")?;
        port.divider()?;
        let name = ask_hero_name(port)?;
        Ok(hero(name))
    }
}

/// Ask until the player gives a non-blank name.
fn ask_hero_name(port: &mut dyn Presenter) -> EngineResult<String> {
    loop {
        let answer = port.read_line("What is the hero's name? ")?;
        let name = answer.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
}

fn open(ctx: &mut SceneContext<'_>, text: &str) -> EngineResult<()> {
    ctx.clear()?;
    ctx.divider()?;
    ctx.say(text)?;
    ctx.divider()
}

fn village(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let text = format!(
        "{} stands in the square of Brindel. Under a sky choked with ash the \
         elder begs for help: the dragon has laid the kingdom waste. The \
         choice is yours alone.",
        ctx.state.name
    );
    open(ctx, &text)?;
    let menu = Menu::new("What will you do?")
        .option("Join the forest rangers and track the dragon.", FOREST_CAMP)
        .option("Search the ruined chapel for an ancient power.", CHAPEL)
        .option("Stay in the village and lift the people's spirits.", VILLAGE_DEFENSE);
    let next = ctx.choose(&menu)?;
    match next {
        FOREST_CAMP => ctx.state.add_item(RANGERS),
        VILLAGE_DEFENSE => ctx.state.add_item(INSPIRED),
        _ => {}
    }
    Ok(Transition::goto(next))
}

fn forest_camp(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let text = format!(
        "In the dim forest, Captain Elion of the rangers tells {} the dragon \
         has flown to the northern mountains. The rangers wait to hear whether \
         to rescue a scout in hiding or march for the mountains at once.",
        ctx.state.name
    );
    open(ctx, &text)?;
    let menu = Menu::new("What do you order?")
        .option("Rescue the hidden scout and learn what they know.", HIDDEN_SCOUT)
        .option("Save time and take the mountain path.", MOUNTAIN_PASS);
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn hidden_scout(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let text = format!(
        "The scout owes {} their life, and tells what they saw: the dragon \
         fears a magic seal. The old sealing words are said to rest in a relic \
         at the chapel.",
        ctx.state.name
    );
    open(ctx, &text)?;
    let menu = Menu::new("Where now?")
        .option("Make for the ruined chapel and its relic.", CHAPEL)
        .option("Climb the mountain path with what you have learned.", MOUNTAIN_PASS);
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn ruined_chapel(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let text = format!(
        "Beneath the broken altar {} finds a golden grail. An ancient seal \
         sleeps in it, strong enough to quiet the dragon's breath.",
        ctx.state.name
    );
    open(ctx, &text)?;
    let menu = Menu::new("What will you do?")
        .option("Take the grail and leave for the mountains.", MOUNTAIN_PASS)
        .option("Search the crypt deeper under the chapel.", CRYPT);
    let next = ctx.choose(&menu)?;
    ctx.state.add_item(RELIC);
    Ok(Transition::goto(next))
}

fn crypt(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let text = format!(
        "In the crypt {} finds the journal of an ancient order of knights. It \
         records that the dragon understands speech and will bargain.",
        ctx.state.name
    );
    open(ctx, &text)?;
    let menu = Menu::new("What next?")
        .option("Carry the journal to the mountains.", MOUNTAIN_PASS);
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn village_defense(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let text = format!(
        "All night {} mends the walls beside the villagers and sings songs of \
         hope. Seeing the hero's resolve, the people find the courage to stand \
         again.",
        ctx.state.name
    );
    open(ctx, &text)?;
    let menu = Menu::new("What next?").option(
        "Leave for the mountains with the village cheering you on.",
        MOUNTAIN_PASS,
    );
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn mountain_pass(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let allies = if flag(RANGERS).evaluate(ctx.state) {
        "The rangers guard the rear from the shadows, bows drawn."
    } else {
        "The road is walked alone, but the hero's heart does not waver."
    };
    let relic = if flag(RELIC).evaluate(ctx.state) {
        "The grail glows softly, ready to seal the dragon's magic."
    } else {
        "There is only a sword in hand, and courage must do the rest."
    };
    let text = format!(
        "On the wind-torn mountain pass {} faces the final battle. {allies} {relic}",
        ctx.state.name
    );
    open(ctx, &text)?;
    let menu = Menu::new("How will you meet the dragon?")
        .option("Storm the dragon's lair and fight.", LAIR)
        .option("Offer to talk and look for a way without bloodshed.", PARLEY);
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn dragon_parley(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let name = ctx.state.name.clone();
    let text = if flag(RELIC).evaluate(ctx.state) {
        format!(
            "The dragon narrows its eyes against the grail's light, hears \
             {name} out, and at last agrees to terms. The kingdom keeps the \
             grail as a seal and swears an oath of coexistence with the dragon."
        )
    } else if parley_by_allies().evaluate(ctx.state) {
        format!(
            "The dragon roars at first, but softens before the unbroken line of \
             {name} and those who stand behind them. After long talks it \
             promises to trouble the kingdom no more."
        )
    } else {
        format!(
            "Whatever {name} says, the dragon's fury does not cool. The talks \
             have failed and fire splits the sky. Only a fight will keep the \
             hero alive."
        )
    };
    open(ctx, &text)?;
    let menu = if parley_refused().evaluate(ctx.state) {
        Menu::new("There is no other way.").option("Draw your sword and fight.", LAIR)
    } else {
        Menu::new("The dragon has given its word.")
            .option("Return to the kingdom with the peace treaty.", PEACE)
    };
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn dragon_lair(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let name = ctx.state.name.clone();
    let support = if flag(RANGERS).evaluate(ctx.state) {
        "Ranger arrows streak across the sky and pin the dragon's wings."
    } else {
        "It is a lonely fight, and fear has to be left behind."
    };
    let lost = lair_lost().evaluate(ctx.state);
    let text = if flag(RELIC).evaluate(ctx.state) {
        format!(
            "{name} raises the grail and cries the words of the seal. {support} \
             A blinding light bursts out and smothers the dragon's flame."
        )
    } else if !lost {
        format!(
            "{name} remembers the village's cheers and finds a last reserve of \
             strength. {support} After a long and bitter battle the dragon \
             concedes and folds its wings."
        )
    } else {
        format!(
            "Dragonfire turns the ground red. {name} stands to the last, but \
             with neither seal nor support falls before its overwhelming might."
        )
    };
    open(ctx, &text)?;
    if lost {
        return Ok(Transition::goto(FALLEN));
    }
    let menu = Menu::new("The dragon is beaten.")
        .option("Return to the kingdom in triumph.", VICTORY);
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn epilogue_peace(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let text = format!(
        "The name of {} is remembered as the peacemaker. Kingdom and dragon \
         respect each other's lands and share in their prosperity.",
        ctx.state.name
    );
    open(ctx, &text)?;
    ctx.say(&format!("The legend of {}. {}", ctx.state.name, ctx.state.summary()))?;
    let menu = Menu::new("What now?").option("Set out for a new adventure.", RESTART);
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn epilogue_victory(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let text = format!(
        "{} is cheered as a hero at the palace gate. Free of the dragon, the \
         kingdom grows rich again and the legend passes down the generations.",
        ctx.state.name
    );
    open(ctx, &text)?;
    ctx.say(&format!("The legend of {}. {}", ctx.state.name, ctx.state.summary()))?;
    let menu = Menu::new("What now?").option("Try a different path.", RESTART);
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn restart(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    open(
        ctx,
        "The story is ready to begin again. What fate will be written this time?",
    )?;
    let menu = Menu::new("How will the next legend begin?")
        .option("Close the book.", CLOSE)
        .option("Begin again under a new name.", "rename")
        .option("Continue the journey under the same name.", VILLAGE);
    let choice = ctx.choose(&menu)?;
    if choice == CLOSE {
        ctx.say("The book is closed. Brindel will remember.")?;
        return Ok(Transition::Terminal);
    }
    for item in [RANGERS, RELIC, INSPIRED] {
        ctx.state.remove_item(item);
    }
    if choice == "rename" {
        ctx.state.name = ask_hero_name(ctx.port)?;
    }
    log::debug!("replaying from {VILLAGE} as {}", ctx.state.name);
    Ok(Transition::goto(VILLAGE))
}

fn fallen(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say("The legend of the hero ends here.")?;
    ctx.say(&format!("Final record: {}", ctx.state.summary()))?;
    Ok(Transition::Terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_engine::{Ending, ScriptedPresenter, Session, SessionConfig, play_story};

    fn play(answers: &[&str]) -> (wf_engine::RunOutcome, ScriptedPresenter) {
        let mut port = ScriptedPresenter::new(answers.iter().copied());
        let config = SessionConfig::default().with_seed(0);
        let outcome = play_story(&DragonKingdom, &mut port, &config).unwrap();
        (outcome, port)
    }

    #[test]
    fn registry_is_complete() {
        let registry = DragonKingdom.scenes().unwrap();
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.intro().as_str(), VILLAGE);
        assert_eq!(registry.defeat().as_str(), FALLEN);
    }

    #[test]
    fn blank_names_are_asked_again() {
        let mut port = ScriptedPresenter::new(["", "   ", "Brin"]);
        let state = DragonKingdom.create_player(&mut port).unwrap();
        assert_eq!(state.name, "Brin");
        assert_eq!(state.items().count(), 0);
    }

    #[test]
    fn relic_wins_the_parley() {
        // village -> chapel -> mountain pass -> parley -> peace -> restart -> close
        let (outcome, port) = play(&["Brin", "2", "1", "2", "1", "1", "1"]);

        assert_eq!(outcome.ending, Ending::Completed);
        assert!(port.saw("swears an oath of coexistence"));
        assert!(port.saw("remembered as the peacemaker"));
        assert!(port.saw("The legend of Brin. Allies and relics: sacred relic"));
        assert!(port.saw("The book is closed."));
    }

    #[test]
    fn rangers_talk_the_dragon_down() {
        // village -> forest camp -> mountain pass -> parley -> peace -> close
        let (outcome, port) = play(&["Brin", "1", "2", "2", "1", "1", "1"]);

        assert_eq!(outcome.ending, Ending::Completed);
        assert!(port.saw("The rangers guard the rear"));
        assert!(port.saw("promises to trouble the kingdom no more"));
    }

    #[test]
    fn a_lone_hero_is_refused_and_falls() {
        // every route to the pass earns a flag, so drop the relic on the way
        let mut port = ScriptedPresenter::new(["Brin", "2", "1", "2", "1"]);
        let config = SessionConfig::default().with_seed(0);
        let mut session = Session::from_story(&DragonKingdom, &mut port, &config).unwrap();

        // village -> chapel -> mountain pass
        session.step(&mut port).unwrap();
        session.step(&mut port).unwrap();
        session.state_mut().remove_item(RELIC);

        let outcome = session.run(&mut port).unwrap();

        assert_eq!(outcome.ending, Ending::Defeated);
        assert_eq!(outcome.last_scene.as_str(), FALLEN);
        assert!(port.saw("The talks have failed"));
        assert!(port.saw("Draw your sword and fight."));
        assert!(!port.saw("Return to the kingdom with the peace treaty."));
        assert!(port.saw("with neither seal nor support falls"));
        assert!(port.saw("The legend of the hero ends here."));
    }

    #[test]
    fn inspired_village_carries_the_fight() {
        // village defence -> mountain pass -> lair -> victory -> close
        let (outcome, port) = play(&["Brin", "3", "1", "1", "1", "1", "1"]);

        assert_eq!(outcome.ending, Ending::Completed);
        assert!(port.saw("It is a lonely fight"));
        assert!(port.saw("the dragon concedes"));
        assert!(port.saw("cheered as a hero at the palace gate"));
    }

    #[test]
    fn replay_with_a_new_name_clears_every_flag() {
        // forest camp -> scout -> chapel -> pass -> lair -> victory -> restart
        // (new name) -> village defence -> pass -> lair -> victory -> close
        let (outcome, port) = play(&[
            "Brin", "1", "1", "1", "1", "1", "1", "1", "2", "Tamsin", "3", "1", "1", "1", "1",
            "1",
        ]);

        assert_eq!(outcome.ending, Ending::Completed);
        assert!(port.saw("The legend of Brin. Allies and relics: allied rangers, sacred relic"));
        assert!(port.saw("Tamsin stands in the square of Brindel."));
        assert!(port.saw("The legend of Tamsin. Allies and relics: village inspired"));
    }

    #[test]
    fn replay_with_the_same_name_keeps_it() {
        // chapel -> pass -> parley -> peace -> restart (same name) -> chapel ...
        let (outcome, port) = play(&[
            "Brin", "2", "1", "2", "1", "1", "3", "2", "1", "2", "1", "1", "1",
        ]);

        assert_eq!(outcome.ending, Ending::Completed);
        let greetings = port
            .transcript()
            .iter()
            .filter(|line| line.starts_with("Brin stands in the square"))
            .count();
        assert_eq!(greetings, 2);
    }

    #[test]
    fn dragon_conditions() {
        let mut state = hero("Brin");
        assert!(parley_refused().evaluate(&state));
        assert!(lair_lost().evaluate(&state));

        state.add_item(RANGERS);
        assert!(!parley_refused().evaluate(&state));
        assert!(parley_by_allies().evaluate(&state));
        assert!(lair_lost().evaluate(&state));

        state.add_item(INSPIRED);
        assert!(!lair_lost().evaluate(&state));
    }
}
