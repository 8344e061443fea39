pub mod list;
pub mod play;

use wf_engine::Story;

/// Resolve a story key, listing the valid keys when it is unknown.
fn find_story(key: &str) -> Result<Box<dyn Story>, String> {
    wf_stories::find(key).ok_or_else(|| {
        let known: Vec<String> = wf_stories::all()
            .iter()
            .map(|story| story.key().to_string())
            .collect();
        format!("unknown story '{key}' (available: {})", known.join(", "))
    })
}
