mod clock;
mod game;
mod term;

use std::{fs::File, path::Path, process::ExitCode, sync::Mutex};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use worm::{config::Cli, GameEngine, WormError};

/// Coordinate type for terminal cells.
type TermInt = u16;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("worm: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WormError> {
    let term = term::TermManager::new()?;
    let settings = cli.into_settings(term.get_terminal_size())?;

    if let Some(path) = &settings.log_file {
        init_logging(path)?;
    }
    info!(
        width = settings.grid.width(),
        height = settings.grid.height(),
        tick_ms = settings.tick_period.as_millis() as u64,
        seed = ?settings.seed,
        "starting worm"
    );

    let engine = GameEngine::with_seed(settings.grid, settings.seed);
    let mut game = game::WormGame::new(term, engine, settings.tick_period);

    game.setup()?;
    let res = match game.show_intro() {
        Ok(true) => game.play(),
        Ok(false) => Ok(()),
        Err(err) => Err(err),
    };

    // Always hand the terminal back, even when the game loop failed
    let restored = game.restore();
    res?;
    restored?;
    Ok(())
}

// stdout belongs to the game screen, so logs only ever go to a file
fn init_logging(path: &Path) -> Result<(), WormError> {
    let file = File::create(path)
        .map_err(|source| WormError::LogFile { path: path.to_path_buf(), source })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
