use colored::Colorize;

pub fn run() -> Result<(), String> {
    for story in wf_stories::all() {
        let marker = if story.key() == wf_stories::DEFAULT_STORY {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("  {:<16} {}{marker}", story.key(), story.title().bold());
    }
    Ok(())
}
