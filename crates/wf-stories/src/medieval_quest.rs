//! Medieval Quest: a squire sets out to drive a dragon from the old castle.

use wf_engine::{
    Counter, EngineResult, FnScene, Menu, PlayerState, Presenter, SceneContext, SceneRegistry,
    Story, SummaryLabels, Transition,
};

use crate::ask_name;

const HEALTH: &str = "health";
const GOLD: &str = "gold";

const SHIELD: &str = "elder's shield";
const POTION: &str = "healing potion";
const SWORD: &str = "shining sword";
const GRAIL: &str = "holy grail";

const POTION_PRICE: i32 = 3;

const INTRO: &str = "intro";
const COUNCIL: &str = "council";
const MARKET: &str = "market";
const FOREST: &str = "forest";
const BANDIT: &str = "bandit";
const SHRINE: &str = "shrine";
const RUINS: &str = "ruins";
const DRAGON: &str = "dragon";
const VICTORY: &str = "victory";
const DEFEAT: &str = "defeat";

const TITLE_ART: &str = r"
      /\                                   /\
     /  \      M E D I E V A L   Q U E S T /  \
    /____\                                /____\
    |    |~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~|    |
    |    |                                |    |";

/// The Medieval Quest story.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedievalQuest;

/// Build a fresh hero.
pub fn hero(name: impl Into<String>) -> PlayerState {
    PlayerState::new(name, "squire")
        .with_counter(Counter::bounded(HEALTH, "Health", 12, 0, 15).required(0))
        .with_counter(Counter::bounded(GOLD, "Gold", 5, 0, 99))
        .with_summary_labels(SummaryLabels {
            items: "Items".to_string(),
            empty: "nothing".to_string(),
        })
}

impl Story for MedievalQuest {
    fn key(&self) -> &str {
        "medieval-quest"
    }

    fn title(&self) -> &str {
        "Medieval Quest"
    }

    fn scenes(&self) -> EngineResult<SceneRegistry> {
        SceneRegistry::builder(INTRO, DEFEAT)
            .scene(FnScene::new(INTRO, intro).with_exits([COUNCIL, MARKET]))
            .scene(FnScene::new(COUNCIL, council).with_exits([FOREST, DEFEAT]))
            .scene(FnScene::new(MARKET, market).with_exits([INTRO]))
            .scene(FnScene::new(FOREST, forest).with_exits([SHRINE, BANDIT]))
            .scene(FnScene::new(BANDIT, bandit).with_exits([FOREST]))
            .scene(FnScene::new(SHRINE, shrine).with_exits([RUINS]))
            .scene(FnScene::new(RUINS, ruins).with_exits([DRAGON]))
            .scene(FnScene::new(DRAGON, dragon).with_exits([VICTORY, DEFEAT]))
            .scene(FnScene::new(VICTORY, victory))
            .scene(FnScene::new(DEFEAT, defeat))
            .build()
    }

    fn create_player(&self, port: &mut dyn Presenter) -> EngineResult<PlayerState> {
        port.clear()?;
        port.show_text(TITLE_ART)?;
        port.divider()?;
        port.show_text("An adventure for a hero of the medieval kingdom begins now!")?;
        port.divider()?;
        let name = ask_name(port, "What is your name, hero? ", "Nameless Hero")?;
        port.prompt_continue()?;
        Ok(hero(name))
    }
}

/// Clear the screen and frame the opening lines of a scene.
fn open(ctx: &mut SceneContext<'_>, lines: &[&str]) -> EngineResult<()> {
    ctx.clear()?;
    ctx.divider()?;
    for line in lines {
        ctx.say(line)?;
    }
    ctx.divider()
}

fn intro(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    let greeting = format!(
        "{}, you are a squire of a valiant order of knights.",
        ctx.state.name
    );
    open(
        ctx,
        &[
            greeting.as_str(),
            "From the village square you see smoke rising from the old castle to the north.",
        ],
    )?;
    let menu = Menu::new("Where will you go?")
        .option("Ask the village elder what is happening.", COUNCIL)
        .option("Head to the market to prepare.", MARKET);
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn council(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    open(
        ctx,
        &[
            "Elder Drummond greets you and speaks in a low voice.",
            "\"When the smoke rises from the northern keep, the wyrm has woken. \
             Only one who carries blessed steel and the grail of the old kings \
             may quiet it.\"",
        ],
    )?;
    let menu = Menu::new("How do you answer the elder's plea?")
        .option("Accept the task and set out for the forest.", FOREST)
        .option("Give up on the dragon and return home.", DEFEAT);
    let next = ctx.choose(&menu)?;
    if next == FOREST {
        ctx.say("The elder hands you a worn but trusty shield.")?;
        ctx.state.add_item(SHIELD);
        ctx.pause()?;
    }
    Ok(Transition::goto(next))
}

fn market(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    open(
        ctx,
        &[
            "The merchants are busy, but they recognise you and ask for help.",
            "The herbalist offers a potion with a secretive smile.",
        ],
    )?;
    let menu = Menu::new("What will you do?")
        .option(
            format!("Buy a healing potion from the herbalist for {POTION_PRICE} gold."),
            "buy",
        )
        .option("Save your coin and leave.", "leave");
    if ctx.choose(&menu)? == "buy" {
        if ctx.state.value(GOLD) >= POTION_PRICE {
            ctx.state.adjust([(GOLD, -POTION_PRICE)]);
            ctx.state.add_item(POTION);
            ctx.say("You receive a bottle glowing with a warm light. It may prove useful.")?;
        } else {
            ctx.say("You do not have enough gold. The merchant shakes their head sadly.")?;
        }
        ctx.pause()?;
    }
    Ok(Transition::goto(INTRO))
}

fn forest(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    open(
        ctx,
        &[
            "The northern forest is thick with mist and drums echo in the distance.",
            "The path forks. One way glimmers with light, the other is covered in footprints.",
        ],
    )?;
    let menu = Menu::new("Which path will you take?")
        .option("Follow the glimmering path.", SHRINE)
        .option("Follow the trampled path.", BANDIT);
    Ok(Transition::goto(ctx.choose(&menu)?))
}

fn bandit(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    open(
        ctx,
        &[
            "Armed bandits step out of the forest shadows!",
            "\"Your purse or your life, little knight!\"",
        ],
    )?;
    if ctx.state.has_item(SHIELD) {
        ctx.say("You catch the blow on your shield and strike back quickly.")?;
        ctx.say("The bandits flee, dropping 4 gold from their pouches.")?;
        ctx.state.adjust([(GOLD, 4)]);
    } else {
        ctx.say("Without a shield, a bandit's blade cuts you!")?;
        ctx.state.adjust([(HEALTH, -4)]);
        if ctx.state.is_alive() {
            let left = format!("You have {} health left.", ctx.state.value(HEALTH));
            ctx.say(&left)?;
        }
    }
    ctx.pause()?;
    Ok(Transition::goto(FOREST))
}

fn shrine(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    open(
        ctx,
        &[
            "A small shrine appears in the heart of the ancient forest.",
            "The statue is said to bless the brave.",
        ],
    )?;
    if ctx.state.has_item(POTION) {
        let menu = Menu::new("How will you pray at the shrine?")
            .option("Offer the potion and receive a blessing.", "offer")
            .option("Pray quietly and leave.", "leave");
        if ctx.choose(&menu)? == "offer" {
            ctx.state.remove_item(POTION);
            ctx.state.add_item(SWORD);
            ctx.say("A mysterious light pours from the shrine and a sword settles into your hand.")?;
            ctx.state.adjust([(HEALTH, 3)]);
            ctx.say("Body and mind feel lighter! You recover 3 health.")?;
        } else {
            ctx.say("The shrine only glows quietly.")?;
        }
    } else {
        ctx.say("With no fitting offering, the shrine stays silent.")?;
        ctx.say("Still, your mind clears and you recover 1 health.")?;
        ctx.state.adjust([(HEALTH, 1)]);
    }
    ctx.pause()?;
    Ok(Transition::goto(RUINS))
}

fn ruins(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    open(
        ctx,
        &[
            "You reach the ruins of the old castle under a sky of ash-grey cloud.",
            "Signs of the dragon's worshippers remain before the gate.",
        ],
    )?;
    let menu = Menu::new("How will you make your final preparations?")
        .option("Search the rubble for anything useful.", "scavenge")
        .option("Go straight into the dragon's lair.", "dragon");
    if ctx.choose(&menu)? == "scavenge" {
        ctx.say("Digging between the fallen walls, you find an ancient grail!")?;
        ctx.state.add_item(GRAIL);
        ctx.pause()?;
    }
    Ok(Transition::goto(DRAGON))
}

fn dragon(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    open(
        ctx,
        &["The dragon uncoils from a mountain of gold, smoke curling from its jaws. \
           Its eyes fix on you."],
    )?;

    let sword = ctx.state.has_item(SWORD);
    let grail = ctx.state.has_item(GRAIL);
    if sword && grail {
        ctx.say("Sword and grail resonate, shining a light that calms the dragon's fury.")?;
        return Ok(Transition::goto(VICTORY));
    }

    if sword {
        ctx.say("The sword pierces the dragon's scales, but the enraged beast fights on.")?;
        if ctx.state.has_item(SHIELD) {
            ctx.say("Your shield holds back the flames and buys you just enough time to flee.")?;
            ctx.state.adjust([(HEALTH, -5)]);
        } else {
            ctx.state.adjust([(HEALTH, -8)]);
            ctx.say("Fire engulfs you!")?;
        }
    } else if grail {
        ctx.say("The grail's light calms the dragon for a moment, but without a weapon you cannot finish the fight.")?;
        ctx.state.adjust([(HEALTH, -6)]);
    } else {
        ctx.say("Unprepared, you are overwhelmed by the dragon's might.")?;
        ctx.state.adjust([(HEALTH, -10)]);
    }

    if ctx.state.is_alive() {
        ctx.say("You barely survive, but the dragon still holds the castle.")?;
        ctx.pause()?;
    }
    Ok(Transition::goto(DEFEAT))
}

fn victory(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    open(
        ctx,
        &[
            "Victory! You have become a legendary hero.",
            "The smoke over the north clears and the bells of the kingdom ring for you.",
        ],
    )?;
    let gold = format!("Gold: {}", ctx.state.value(GOLD));
    let items = format!("Items found: {}", ctx.state.item_list());
    ctx.say(&gold)?;
    ctx.say(&items)?;
    ctx.divider()?;
    Ok(Transition::Terminal)
}

fn defeat(ctx: &mut SceneContext<'_>) -> EngineResult<Transition> {
    ctx.divider()?;
    ctx.say("Your adventure ends here.")?;
    ctx.say("The dragon's shadow lies over the kingdom for a while longer.")?;
    ctx.divider()?;
    let health = format!("Final health: {}", ctx.state.value(HEALTH));
    let gold = format!("Gold: {}", ctx.state.value(GOLD));
    ctx.say(&health)?;
    ctx.say(&gold)?;
    ctx.divider()?;
    Ok(Transition::Terminal)
}
