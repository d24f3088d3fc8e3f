use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use gilded_snake::config::THEME_GILDED;
use gilded_snake::error::AppError;
use gilded_snake::game::{GameState, GameStatus, TickOutcome};
use gilded_snake::input::{self, GameInput};
use gilded_snake::renderer::{self, FrameInfo};
use gilded_snake::terminal_runtime::{TerminalSession, install_panic_hook};

/// Frame pacing for input polling and redraws, independent of the game
/// tick interval.
const FRAME_SLEEP: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Gold-and-red terminal Snake on a fixed 20x20 board")]
struct Cli {
    /// Seed food placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    install_panic_hook();

    if let Err(error) = run(cli) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut session = TerminalSession::enter()?;
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };

    let started = Instant::now();
    // The engine does not own a timer: the armed interval lives here and
    // is refreshed only when a tick outcome reports a change.
    let mut armed_interval = Duration::from_millis(state.interval_ms);
    let mut last_tick = Instant::now();

    loop {
        let info = FrameInfo {
            theme: &THEME_GILDED,
            elapsed: started.elapsed(),
        };
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, info))?;

        if let Some(game_input) = input::poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }

            state.apply_input(game_input);

            if game_input == GameInput::Restart {
                armed_interval = Duration::from_millis(state.interval_ms);
                last_tick = Instant::now();
            }
        }

        if state.status == GameStatus::Running && last_tick.elapsed() >= armed_interval {
            if let TickOutcome::Ate {
                interval_changed: true,
            } = state.tick()
            {
                armed_interval = Duration::from_millis(state.interval_ms);
            }

            last_tick = Instant::now();
        }

        thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}
