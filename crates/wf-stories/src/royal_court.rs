//! Royal Court: serve the kingdom of Castel Rodan through a season of
//! intrigue that ends in a siege.
//!
//! Counters here have a floor but no ceiling, and none of them can fail the
//! player. The downfall scene still satisfies the registry's defeat role.

use wf_engine::{
    Condition, Counter, EngineResult, FnScene, Menu, OutcomeTable, PlayerState, Presenter,
    SceneContext, SceneRegistry, ScoreRule, Story, SummaryLabels, Transition,
};

use crate::ask_name;

const PRESTIGE: &str = "prestige";
const MORALE: &str = "morale";
const WEALTH: &str = "wealth";

const KINGS_TRUST: &str = "king's trust";
const INTEL: &str = "intel";
const SECRET_PASSAGE: &str = "secret passage";

const TOURNAMENT: &str = "tournament";
const TAVERN: &str = "tavern";
const COUNCIL: &str = "council";
const FINAL_BATTLE: &str = "final-battle";
const DOWNFALL: &str = "downfall";

const KNIGHT: &str = "knight";
const MERCHANT: &str = "merchant";
const SCHOLAR: &str = "scholar";

/// The Royal Court story.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoyalCourt;

struct Role {
    id: &'static str,
    title: &'static str,
    blurb: &'static str,
    prestige: i32,
    morale: i32,
    wealth: i32,
}

static ROLES: [Role; 3] = [
    Role {
        id: KNIGHT,
        title: "Knight",
        blurb: "Knight: high morale and renown, but a thin purse.",
        prestige: 3,
        morale: 5,
        wealth: 2,
    },
    Role {
        id: MERCHANT,
        title: "Merchant",
        blurb: "Merchant: deep coffers and a gift for bargaining.",
        prestige: 2,
        morale: 3,
        wealth: 6,
    },
    Role {
        id: SCHOLAR,
        title: "Scholar",
        blurb: "Scholar: learning and renown that earn the crown's trust.",
        prestige: 4,
        morale: 3,
        wealth: 3,
    },
];

/// Build a courtier in the given role. Unknown roles serve as scholars.
pub fn courtier(name: impl Into<String>, role: &str) -> PlayerState {
    let chosen = ROLES.iter().find(|r| r.id == role).unwrap_or(&ROLES[2]);
    PlayerState::new(name, chosen.id)
        .with_counter(Counter::floor_only(PRESTIGE, "Prestige", chosen.prestige, 0))
        .with_counter(Counter::floor_only(MORALE, "Morale", chosen.morale, 0))
        .with_counter(Counter::floor_only(WEALTH, "Wealth", chosen.wealth, 0))
        .with_summary_labels(SummaryLabels {
            items: "Belongings".to_string(),
            empty: "none".to_string(),
        })
}

fn role_title(id: &str) -> &'static str {
    ROLES
        .iter()
        .find(|r| r.id == id)
        .map_or("Scholar", |r| r.title)
}

impl Story for RoyalCourt {
    fn key(&self) -> &str {
        "royal-court"
    }

    fn title(&self) -> &str {
        "Royal Court"
    }

    fn scenes(&self) -> EngineResult<SceneRegistry> {
        SceneRegistry::builder(TOURNAMENT, DOWNFALL)
            .scene(FnScene::new(TOURNAMENT, tournament).with_exits([TAVERN]))
            .scene(FnScene::new(TAVERN, tavern).with_exits([COUNCIL]))
            .scene(FnScene::new(COUNCIL, council).with_exits([FINAL_BATTLE]))
            .scene(FnScene::new(FINAL_BATTLE, final_battle))
            .scene(FnScene::new(DOWNFALL, downfall))
            .build()
    }

    fn create_player(&self, port: &mut dyn Presenter) -> EngineResult<PlayerState> {
        port.show_text(
            "Welcome to the kingdom of Castel Rodan! Begin an adventure that puts \
             the fate of a realm in turmoil into your hands.",
        )?;
        let name = ask_name(port, "What is your name? ", "Nameless Hero")?;

        let menu = ROLES.iter().fold(
            Menu::new(format!(
                "{name}, you have been appointed to defend the kingdom of Castel Rodan. \
                 In which role will you serve?"
            )),
            |menu, r| menu.keyed(r.id, r.blurb, r.id),
        );
        let role = wf_engine::prompt_choice(port, &menu)?;
        let state = courtier(name, role);

        port.show_text(&format!(
            "{} {}, the fate of the kingdom is in your hands.",
            role_title(&state.archetype),
            state.name
        ))?;
        port.show_text(&format!("Status: {}", state.summary()))?;
        port.prompt_continue()?;
        Ok(state)
    }
}

fn is(ctx: &SceneContext<'_>, role: &str) -> bool {
    ctx.state.archetype == role
}

fn tournament(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say("The spring tournament has begun, an important occasion for the unity of the kingdom.")?;
    if is(ctx, KNIGHT) {
        let menu = Menu::new(
            "Will you enter the sword contest for glory, or train alongside the soldiers?",
        )
        .keyed("duel", "Enter the contest", "duel")
        .keyed("train", "Train with the soldiers", "train");
        if ctx.choose(&menu)? == "duel" {
            if ctx.chance(0.6) {
                ctx.state.adjust([(PRESTIGE, 2)]);
                ctx.say("A splendid victory wins the cheers of the people! Your prestige rises.")?;
            } else {
                ctx.state.adjust([(MORALE, -1)]);
                ctx.say("Sadly, you fall injured. Your morale drops.")?;
            }
        } else {
            ctx.state.adjust([(MORALE, 2)]);
            ctx.say("The soldiers are moved by your encouragement and their spirits soar.")?;
        }
    } else {
        let menu = Menu::new(
            "Will you sponsor the event to win the people's hearts, or focus on the king's banquet?",
        )
        .keyed("sponsor", "Sponsor the tournament", "sponsor")
        .keyed("court", "Court the king and his ministers", "court");
        if ctx.choose(&menu)? == "sponsor" {
            if Condition::at_least(WEALTH, 3).evaluate(ctx.state) {
                ctx.state.adjust([(WEALTH, -3), (MORALE, 2)]);
                ctx.say("Your generous support has the people singing your praises.")?;
            } else {
                ctx.state.adjust([(MORALE, -1)]);
                ctx.say("Short of funds, your sponsorship falls flat. The disappointed crowd drifts away.")?;
            }
        } else {
            ctx.state.adjust([(PRESTIGE, 1)]);
            ctx.state.add_item(KINGS_TRUST);
            ctx.say("Wise counsel at the banquet earns you the king's trust.")?;
        }
    }
    ctx.pause()?;
    Ok(Transition::goto(TAVERN))
}

fn tavern(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say(
        "In a tavern near the castle, mercenaries from across the border are \
         spreading suspicious rumours.",
    )?;
    let menu = Menu::new("What will you do?")
        .keyed("bribe", "Scatter gold to dig out the rumours", "bribe")
        .keyed("shadow", "Follow them quietly and watch", "shadow")
        .keyed("ignore", "Ignore the rumours and return to the castle", "ignore");

    match ctx.choose(&menu)? {
        "bribe" => {
            let cost = if is(ctx, MERCHANT) { 2 } else { 3 };
            if Condition::at_least(WEALTH, cost).evaluate(ctx.state) {
                ctx.state.adjust([(WEALTH, -cost), (PRESTIGE, 1)]);
                ctx.state.add_item(INTEL);
                ctx.say("It was costly, but you secure papers detailing the invasion plan.")?;
            } else {
                ctx.state.adjust([(PRESTIGE, -1)]);
                ctx.say("Word spreads that you cannot pay, and you lose face.")?;
            }
        }
        "shadow" => {
            let odds = if is(ctx, KNIGHT) { 0.5 } else { 0.3 };
            if ctx.chance(odds) {
                ctx.state.adjust([(MORALE, 1)]);
                ctx.state.add_item(SECRET_PASSAGE);
                ctx.say("Trailing them, you discover a secret passage leading into the castle!")?;
            } else {
                ctx.state.adjust([(MORALE, -2)]);
                ctx.say("You are spotted and the mercenaries humiliate you.")?;
            }
        }
        _ => {
            let boost = i32::from(is(ctx, SCHOLAR));
            ctx.state.adjust([(MORALE, boost)]);
            ctx.say("You avoid anything reckless and study books of strategy instead.")?;
        }
    }
    ctx.pause()?;
    Ok(Transition::goto(COUNCIL))
}

fn council(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say("With signs of invasion detected, the kingdom's council of elders is called in haste.")?;
    let menu = Menu::new("Which strategy will you put before the council?")
        .keyed("fortify", "Argue for strengthening the walls", "fortify")
        .keyed("rally", "Address the people and the knights", "rally")
        .keyed("diplomacy", "Seek an alliance with the neighbouring kingdom", "diplomacy");

    match ctx.choose(&menu)? {
        "fortify" => {
            let bonus = if ctx.state.has_item(SECRET_PASSAGE) { 2 } else { 0 };
            ctx.state.adjust([(PRESTIGE, 1 + bonus / 2)]);
            ctx.say("Your detailed designs lead the plan to reinforce the walls. Trust in you grows.")?;
        }
        "rally" => {
            let boost = if is(ctx, KNIGHT) { 3 } else { 2 };
            ctx.state.adjust([(MORALE, boost)]);
            ctx.say("A fiery speech steadies the army. The soldiers long for battle.")?;
        }
        _ => {
            if ctx.state.has_item(KINGS_TRUST) {
                ctx.state.adjust([(PRESTIGE, 2), (WEALTH, 1)]);
                ctx.say("Using the king's trust, you dispatch envoys at once. Supplies arrive.")?;
            } else {
                ctx.state.adjust([(PRESTIGE, -1)]);
                ctx.say("Without enough trust the alliance falls through. Your peers are disappointed.")?;
            }
        }
    }
    ctx.pause()?;
    Ok(Transition::goto(FINAL_BATTLE))
}

/// Strength of the kingdom's defence at the siege.
pub fn battle_rule() -> ScoreRule {
    ScoreRule::new()
        .counter(PRESTIGE)
        .counter(MORALE)
        .counter_over(WEALTH, 2)
        .bonus(Condition::has_item(INTEL), 2)
        .bonus(Condition::has_item(SECRET_PASSAGE), 2)
}

/// Ending narratives for the siege, best first.
pub fn battle_endings() -> EngineResult<OutcomeTable<&'static str>> {
    OutcomeTable::builder()
        .tier(
            15,
            "Under your command the kingdom wins a dazzling victory. Your name \
             lives on as a hero of legend.",
        )
        .tier(
            11,
            "After fierce fighting the allied army is driven back. The king and \
             the people offer you their deepest thanks.",
        )
        .tier(
            8,
            "The battle is won by a hair, at great cost. Far more preparation \
             will be needed in the years ahead.",
        )
        .otherwise(
            "The castle falls and the kingdom bows to the allied army. Yet your \
             resistance will be remembered as courage by those who come after.",
        )
        .build()
}

fn final_battle(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say(
        "At last the northern alliance reaches the castle gates. Your choices \
         will decide the battle.",
    )?;
    let score = battle_rule().with_fixed_roll(ctx.state, 0);
    log::debug!("siege strength {score}");
    if let Some(ending) = battle_endings()?.resolve(score.total) {
        ctx.say(ending)?;
    }
    ctx.say(&format!("Final record: {}", ctx.state.summary()))?;
    ctx.say("Your adventure ends here. Run the game again to try once more!")?;
    Ok(Transition::Terminal)
}

fn downfall(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say("Stripped of office, you leave the court before the siege begins.")?;
    ctx.say(&format!("Final record: {}", ctx.state.summary()))?;
    Ok(Transition::Terminal)
}
