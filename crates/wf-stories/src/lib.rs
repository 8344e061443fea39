//! Authored stories for the Wayfarer engine.
//!
//! Each story owns its narrative text, its player archetypes, and its scene
//! graph. The engine never sees any of it except through [`Story`].

/// Air Skirmish, the default story.
pub mod air_skirmish;
/// Dragon Kingdom.
pub mod dragon_kingdom;
/// Medieval Quest.
pub mod medieval_quest;
/// Royal Court.
pub mod royal_court;

use wf_engine::{EngineResult, Presenter, Story};

pub use air_skirmish::AirSkirmish;
pub use dragon_kingdom::DragonKingdom;
pub use medieval_quest::MedievalQuest;
pub use royal_court::RoyalCourt;

/// Key of the story played when none is requested.
pub const DEFAULT_STORY: &str = "air-skirmish";

/// Every bundled story, default first.
pub fn all() -> Vec<Box<dyn Story>> {
    vec![
        Box::new(AirSkirmish),
        Box::new(MedievalQuest),
        Box::new(RoyalCourt),
        Box::new(DragonKingdom),
    ]
}

/// Look up a bundled story by key.
pub fn find(key: &str) -> Option<Box<dyn Story>> {
    all().into_iter().find(|story| story.key() == key)
}

/// Ask for a name, falling back when the answer is blank.
pub(crate) fn ask_name(
    port: &mut dyn Presenter,
    prompt: &str,
    fallback: &str,
) -> EngineResult<String> {
    let answer = port.read_line(prompt)?;
    let name = answer.trim();
    Ok(if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    })
}
