//! Fifteen - interactive 15-puzzle driver.
//!
//! A thin stdin/stdout stand-in for the UI collaborator: it renders each
//! emitted state, forwards typed commands as intents, and acknowledges
//! every transient state immediately, since a terminal has no tweening to
//! wait for. All game logic lives in the library.

use anyhow::Result;
use clap::Parser;
use fifteen::{DEFAULT_SHUFFLE_STEPS, GameState, Intent, Phase, Session, SessionConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play the 15-puzzle in a terminal.
#[derive(Parser, Debug)]
#[command(name = "fifteen", version)]
struct Cli {
    /// Primitive blank moves per shuffle
    #[arg(long, default_value_t = DEFAULT_SHUFFLE_STEPS)]
    shuffle_steps: usize,

    /// RNG seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Emit each new state as a JSON line instead of a rendered board
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = SessionConfig::new(cli.shuffle_steps);
    let mut session = match cli.seed {
        Some(seed) => Session::with_rng(config, StdRng::seed_from_u64(seed)),
        None => Session::with_rng(config, StdRng::from_entropy()),
    };

    info!("session started");
    render(session.state(), cli.json)?;
    if !cli.json {
        println!("commands: 1-15 moves a tile, s shuffles, v solves, q quits");
    }
    prompt(cli.json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let intent = match parse_command(line.trim(), session.state()) {
            Command::Quit => break,
            Command::Intent(intent) => intent,
            Command::Unknown => {
                if !cli.json {
                    println!("unrecognized command: {}", line.trim());
                }
                prompt(cli.json)?;
                continue;
            }
        };

        session.handle(intent)?;
        render(session.state(), cli.json)?;

        // Acknowledge transient states right away, the way a renderer
        // would after finishing its animation.
        while matches!(
            session.state().phase(),
            Phase::Swapping | Phase::Shuffling | Phase::Solving
        ) {
            session.handle(Intent::AnimationDone)?;
            render(session.state(), cli.json)?;
        }
        prompt(cli.json)?;
    }

    Ok(())
}

fn prompt(json: bool) -> Result<()> {
    if !json {
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}

enum Command {
    Intent(Intent),
    Quit,
    Unknown,
}

/// Maps a typed command to an intent. Tile numbers are translated to the
/// clicked cell's current board index, mirroring a tile click in a UI.
fn parse_command(input: &str, state: &GameState) -> Command {
    match input {
        "q" | "quit" => Command::Quit,
        "s" | "shuffle" => Command::Intent(Intent::Shuffle),
        "v" | "solve" => Command::Intent(Intent::Solve),
        _ => match input.parse::<u8>() {
            Ok(tile) if (1..=15).contains(&tile) => {
                let tag = tile - 1;
                match state.board().cells().iter().position(|&c| c == tag) {
                    Some(idx) => Command::Intent(Intent::Move(idx)),
                    None => Command::Unknown,
                }
            }
            _ => Command::Unknown,
        },
    }
}

fn render(state: &GameState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(state)?);
    } else {
        print!("\n{}", state.board());
        println!("[{}] {}", state.phase(), state.status_label());
    }
    Ok(())
}
