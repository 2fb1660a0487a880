use std::fs::{self, OpenOptions};
use std::path::Path;
use std::time::Instant;

use clap::Parser;

use kwis::bank::QuestionBank;
use kwis::cli::Cli;
use kwis::persist::{self, HighscoreStore};
use kwis::state::AppState;
use kwis::store::{FileStore, KeyValueStore};
use kwis::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(persist::data_dir);
    init_logging(&data_dir);

    let store: Box<dyn KeyValueStore> = Box::new(FileStore::new(&data_dir));
    let settings = persist::load_settings(&store);
    let mut highscores = HighscoreStore::new(store);

    // Handle reset flags
    if cli.reset_highscores {
        highscores.reset_all();
        eprintln!("All highscores cleared.");
    }
    if let Some(level) = cli.reset {
        highscores.reset(level);
        eprintln!("Highscore for {} cleared.", level);
    }

    // Handle --highscores
    if cli.highscores {
        persist::print_highscores(&highscores);
        return Ok(());
    }

    let now = Instant::now();
    let mut state = AppState::new(QuestionBank::builtin(), settings, highscores, now);

    if let Some(level) = cli.level {
        state.skip_welcome();
        state.selected_level = level;
        state.start_quiz(now).map_err(|e| e.to_string())?;
    }

    tui::run_tui(state)
}

/// Logs go to `kwis.log` in the data dir so they never draw over the TUI.
fn init_logging(data_dir: &Path) {
    if fs::create_dir_all(data_dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("kwis.log"))
    else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
