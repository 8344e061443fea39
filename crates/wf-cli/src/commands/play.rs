use std::io::{self, IsTerminal};

use colored::Colorize;

use wf_engine::{Ending, SessionConfig, play_story};

use crate::console::{ConsoleConfig, ConsolePort};

pub fn run(key: &str, seed: Option<u64>, clear: bool, width: usize) -> Result<(), String> {
    let story = super::find_story(key)?;

    let mut session = SessionConfig::default();
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }

    let interactive = io::stdout().is_terminal();
    let config = ConsoleConfig::default()
        .with_width(width)
        .with_clear_screen(clear && interactive)
        .with_color(interactive);

    let stdin = io::stdin();
    let mut port = ConsolePort::new(stdin.lock(), io::stdout().lock(), config);

    let outcome = play_story(story.as_ref(), &mut port, &session)
        .map_err(|e| format!("{} aborted: {e}", story.title()))?;
    log::info!(
        "{} {} at {} after {} scenes",
        story.key(),
        outcome.ending,
        outcome.last_scene,
        outcome.scenes_played
    );

    if interactive {
        let label = match outcome.ending {
            Ending::Completed => "The End".bold(),
            Ending::Defeated => "Game Over".red().bold(),
        };
        println!("\n  {label}");
    }
    Ok(())
}
