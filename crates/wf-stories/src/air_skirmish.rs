//! Air Skirmish: defend the base as the leader of a frontline squadron.

use wf_engine::{
    Condition, Counter, EngineResult, FnScene, Menu, OutcomeTable, PlayerState, Presenter,
    SceneContext, SceneRegistry, ScoreRule, Story, SummaryLabels, Transition,
};

use crate::ask_name;

const HULL: &str = "hull";
const MORALE: &str = "morale";
const FUEL: &str = "fuel";
const AMMO: &str = "ammo";

const TERRAIN_INTEL: &str = "terrain intel";
const ENEMY_FORMATION: &str = "enemy formation";
const COMMAND_FREQUENCY: &str = "enemy command frequency";

const PREFLIGHT: &str = "preflight";
const SCRAMBLE: &str = "scramble";
const DOGFIGHT: &str = "dogfight";
const FINAL_ASSAULT: &str = "final-assault";
const MISSION_FAILED: &str = "mission-failed";

/// The Air Skirmish story.
#[derive(Debug, Clone, Copy, Default)]
pub struct AirSkirmish;

struct Aircraft {
    id: &'static str,
    name: &'static str,
    blurb: &'static str,
    hull: i32,
    morale: i32,
    fuel: i32,
    ammo: i32,
}

static AIRCRAFT: [Aircraft; 3] = [
    Aircraft {
        id: "falcon",
        name: "Falcon",
        blurb: "F-16 'Falcon': a balanced all-rounder.",
        hull: 7,
        morale: 6,
        fuel: 7,
        ammo: 8,
    },
    Aircraft {
        id: "eagle",
        name: "Eagle",
        blurb: "F-15 'Eagle': heavy firepower and a tough airframe.",
        hull: 8,
        morale: 5,
        fuel: 6,
        ammo: 9,
    },
    Aircraft {
        id: "raven",
        name: "Raven",
        blurb: "KF-21 'Raven': advanced sensors and fuel efficiency.",
        hull: 6,
        morale: 6,
        fuel: 9,
        ammo: 7,
    },
];

/// Build a pilot flying the given aircraft. Unknown ids fly the Raven.
pub fn pilot(name: impl Into<String>, aircraft: &str) -> PlayerState {
    let craft = AIRCRAFT
        .iter()
        .find(|a| a.id == aircraft)
        .unwrap_or(&AIRCRAFT[2]);
    PlayerState::new(name, craft.id)
        .with_counter(Counter::bounded(HULL, "Hull", craft.hull, 0, 10).required(0))
        .with_counter(Counter::bounded(MORALE, "Morale", craft.morale, 0, 10).required(0))
        .with_counter(Counter::bounded(FUEL, "Fuel", craft.fuel, 0, 10).required(0))
        .with_counter(Counter::bounded(AMMO, "Ammo", craft.ammo, 0, 12).required(0))
        .with_summary_labels(SummaryLabels {
            items: "Intel".to_string(),
            empty: "none".to_string(),
        })
}

fn aircraft_name(id: &str) -> &'static str {
    AIRCRAFT
        .iter()
        .find(|a| a.id == id)
        .map_or("Raven", |a| a.name)
}

impl Story for AirSkirmish {
    fn key(&self) -> &str {
        "air-skirmish"
    }

    fn title(&self) -> &str {
        "Air Skirmish"
    }

    fn scenes(&self) -> EngineResult<SceneRegistry> {
        SceneRegistry::builder(PREFLIGHT, MISSION_FAILED)
            .scene(FnScene::new(PREFLIGHT, preflight).with_exits([SCRAMBLE]))
            .scene(FnScene::new(SCRAMBLE, scramble).with_exits([DOGFIGHT]))
            .scene(FnScene::new(DOGFIGHT, dogfight).with_exits([FINAL_ASSAULT]))
            .scene(FnScene::new(FINAL_ASSAULT, final_assault))
            .scene(FnScene::new(MISSION_FAILED, mission_failed))
            .build()
    }

    fn create_player(&self, port: &mut dyn Presenter) -> EngineResult<PlayerState> {
        port.show_text(
            "Welcome to the 'Air Skirmish' scramble simulator! As leader of a \
             frontline squadron, the base is yours to defend.",
        )?;
        let name = ask_name(port, "Enter your pilot name: ", "Nameless Pilot")?;

        let menu = AIRCRAFT.iter().fold(
            Menu::new(format!("Captain {name}, choose your aircraft.")),
            |menu, a| menu.keyed(a.id, a.blurb, a.id),
        );
        let aircraft = wf_engine::prompt_choice(port, &menu)?;
        let state = pilot(name, aircraft);

        port.show_text(&format!(
            "Aircraft selected: {}. Good luck, Captain {}.",
            aircraft_name(&state.archetype),
            state.name
        ))?;
        port.show_text(&format!("Status: {}", state.summary()))?;
        port.prompt_continue()?;
        Ok(state)
    }
}

fn preflight(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say(
        "The hangar is busy ahead of the dawn sortie. The commander gives you \
         one last stretch of time to prepare.",
    )?;
    let menu = Menu::new("How will you use the time?")
        .keyed(
            "inspect",
            "Inspect the airframe thoroughly (hull up, fuel down)",
            "inspect",
        )
        .keyed(
            "brief",
            "Get a tactical briefing from intelligence (morale up)",
            "brief",
        )
        .keyed("arm", "Double-check munitions with the armorers (ammo up)", "arm");

    match ctx.choose(&menu)? {
        "inspect" => {
            ctx.state.adjust([(HULL, 2), (FUEL, -1)]);
            ctx.say(
                "You and the ground crew find a fault and fix it. A little fuel is \
                 gone, but you feel reassured.",
            )?;
        }
        "brief" => {
            ctx.state.adjust([(MORALE, 2)]);
            ctx.state.add_item(TERRAIN_INTEL);
            ctx.say("The intelligence officer shares the enemy's flight paths. Your confidence soars.")?;
        }
        _ => {
            ctx.state.adjust([(AMMO, 2)]);
            ctx.say("You secure extra rounds from the magazine. Your firepower is stronger.")?;
        }
    }
    ctx.pause()?;
    Ok(Transition::goto(SCRAMBLE))
}

fn scramble(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say(
        "Sirens wail and the scramble order comes down. An enemy formation is \
         approaching our airspace.",
    )?;
    let menu = Menu::new("Choose your takeoff.")
        .keyed(
            "afterburn",
            "Light the afterburners and launch fast (fuel down, morale up)",
            "afterburn",
        )
        .keyed(
            "stealth",
            "Climb quietly to avoid radar (fuel down sharply, intel up)",
            "stealth",
        )
        .keyed(
            "wing",
            "Join up with your wing and move safely (ammo down, morale up)",
            "wing",
        );

    match ctx.choose(&menu)? {
        "afterburn" => {
            ctx.state.adjust([(FUEL, -2), (MORALE, 1)]);
            ctx.say("Explosive acceleration puts you first on the enemy!")?;
        }
        "stealth" => {
            ctx.state.adjust([(FUEL, -3)]);
            ctx.state.add_item(ENEMY_FORMATION);
            ctx.say("You slip past their radar and take the altitude advantage.")?;
        }
        _ => {
            ctx.state.adjust([(AMMO, -1), (MORALE, 1)]);
            ctx.say("The formation flies in perfect rhythm. Morale rises.")?;
        }
    }
    ctx.pause()?;
    Ok(Transition::goto(DOGFIGHT))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Engagement {
    Kill,
    Scrape,
    Hit,
}

/// Score for the border dogfight: half the pilot's edge plus a 2-12 roll.
pub fn dogfight_rule() -> ScoreRule {
    ScoreRule::new()
        .counter(MORALE)
        .counter(HULL)
        .bonus(Condition::has_item(ENEMY_FORMATION), 2)
        .bonus(Condition::archetype("eagle"), 2)
        .bonus(Condition::has_item(TERRAIN_INTEL), 1)
        .divided_by(2)
        .with_roll(2..=12)
}

fn dogfight(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say(
        "The enemy's newest fighters appear over the northern border. A fierce \
         dogfight breaks out.",
    )?;
    ctx.state.adjust([(FUEL, -1), (AMMO, -2)]);

    let table = OutcomeTable::builder()
        .tier(16, Engagement::Kill)
        .tier(13, Engagement::Scrape)
        .otherwise(Engagement::Hit)
        .build()?;
    let score = dogfight_rule().evaluate(ctx.state, ctx.rng);
    log::debug!("dogfight score {score}");

    match table.resolve(score.total) {
        Some(Engagement::Kill) => {
            ctx.state.adjust([(MORALE, 2)]);
            ctx.state.add_item(COMMAND_FREQUENCY);
            ctx.say(
                "A perfect turn puts the enemy in your sights and down he goes! \
                 You also pick up their radio traffic.",
            )?;
        }
        Some(Engagement::Scrape) => {
            ctx.state.adjust([(HULL, -1), (MORALE, -1)]);
            ctx.say("After a hard fight you drive them off, but the airframe takes some damage.")?;
        }
        _ => {
            ctx.state.adjust([(HULL, -3), (MORALE, -2)]);
            ctx.say(
                "An enemy missile slams into your aircraft. You barely make it out, \
                 badly damaged.",
            )?;
        }
    }
    ctx.pause()?;
    Ok(Transition::goto(FINAL_ASSAULT))
}

/// Score for the final defence of the base.
pub fn final_assault_rule() -> ScoreRule {
    ScoreRule::new()
        .counter(HULL)
        .counter(MORALE)
        .counter(FUEL)
        .counter(AMMO)
        .bonus(Condition::has_item(COMMAND_FREQUENCY), 3)
        .bonus(Condition::archetype("raven"), 1)
}

/// Ending narratives for the final defence, best first.
pub fn final_assault_endings() -> EngineResult<OutcomeTable<&'static str>> {
    OutcomeTable::builder()
        .tier(
            24,
            "Precision-guided missiles bring down the bombers and the base is safe. \
             Your name will live on in the history of the air force.",
        )
        .tier(
            18,
            "After a fierce defence you stop the bombing run. The aircraft is \
             damaged, but the joy of victory is greater.",
        )
        .tier(
            14,
            "Some bombs get through, but the critical facilities hold. The \
             debrief will have to prepare you for the next mission.",
        )
        .otherwise(
            "Out of fuel and ammunition, you cannot stop the bombers. The base \
             is badly hit, but your courage will be remembered.",
        )
        .build()
}

fn final_assault(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say(
        "The enemy launches its bombers in a last push. The defence of the \
         base rests on you.",
    )?;
    ctx.state.adjust([(FUEL, -1), (AMMO, -2)]);

    let score = final_assault_rule().with_fixed_roll(ctx.state, 0);
    log::debug!("final assault score {score}");
    if let Some(ending) = final_assault_endings()?.resolve(score.total) {
        ctx.say(ending)?;
    }
    ctx.say(&format!("Final mission record: {}", ctx.state.summary()))?;
    ctx.say("The mission is over. Come back and try different choices!")?;
    ctx.pause()?;
    Ok(Transition::Terminal)
}

fn mission_failed(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.say(
        "Your aircraft has reached its limit. Unable to sortie again, you are \
         ordered back to base at once.",
    )?;
    ctx.say(&format!("Status: {}", ctx.state.summary()))?;
    ctx.pause()?;
    Ok(Transition::Terminal)
}
