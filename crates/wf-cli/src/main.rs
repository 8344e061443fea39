//! Console frontend for Wayfarer text adventures.

mod commands;
mod console;

use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wayfarer",
    about = "Wayfarer: branching text adventures in the terminal",
    version
)]
struct Cli {
    /// Story to play
    #[arg(short, long, default_value = wf_stories::DEFAULT_STORY)]
    story: String,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Never clear the screen between scenes
    #[arg(long)]
    no_clear: bool,

    /// Wrap width for narrative text
    #[arg(short, long, default_value = "78")]
    width: usize,

    /// List the available stories and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.list {
        commands::list::run()
    } else {
        commands::play::run(&cli.story, cli.seed, !cli.no_clear, cli.width)
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
