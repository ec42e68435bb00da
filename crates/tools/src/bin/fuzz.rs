use anyhow::{Context, Result, ensure};
use clap::Parser;
use maze_core::{
    Direction, InputSource, MazeConfig, MazeError, Session, SessionOutcome, SessionState, Tile,
    try_move,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of sessions to random-walk
    #[arg(long, default_value_t = 200)]
    sessions: u32,
    /// Inputs per session
    #[arg(long, default_value_t = 500)]
    steps: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_config(rng: &mut ChaCha8Rng) -> MazeConfig {
    let rows = 1 + rng.next_u64() as usize % 25;
    let cols = 1 + rng.next_u64() as usize % 25;
    let time_limit_secs = 1 + rng.next_u32() % 60;
    MazeConfig { time_limit_secs, ..MazeConfig::with_dimensions(rows, cols) }
}

fn walk_session(session: &mut Session, rng: &mut ChaCha8Rng, steps: u32) -> Result<()> {
    for step in 0..steps {
        let before = session.player();
        let was_active = session.state().is_active();

        // One input in eight is a countdown tick.
        if rng.next_u32() % 8 == 0 {
            let ticked = session.tick_second();
            if !was_active {
                ensure!(ticked == Err(MazeError::SessionEnded), "tick accepted after end");
            }
        } else {
            let source = choose(rng, &InputSource::ALL);
            let direction = choose(rng, &Direction::ALL);
            let expected = try_move(before, direction, &session.maze().grid);
            match session.apply_move(source, direction) {
                Ok(report) => {
                    ensure!(was_active, "move accepted after end at step {step}");
                    ensure!(report.to == expected, "move disagrees with try_move at step {step}");
                }
                Err(error) => {
                    ensure!(!was_active, "move rejected while active at step {step}: {error}");
                    ensure!(session.player() == before, "rejected move changed the player");
                }
            }
        }

        let player = session.player();
        ensure!(session.maze().grid.in_bounds(player), "player left the grid at {player:?}");
        ensure!(
            session.maze().tile_at(player) == Tile::Passage,
            "player stands on a wall at {player:?}"
        );
        if let SessionState::Ended(_) = session.state() {
            ensure!(session.listeners().is_empty(), "listeners survived the end of the session");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(seed = args.seed, sessions = args.sessions, steps = args.steps, "starting fuzz harness");
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut wins = 0u32;
    let mut timeouts = 0u32;
    for index in 0..args.sessions {
        let config = random_config(&mut rng);
        let session_seed = rng.next_u64();
        let mut session = Session::start(config.clone(), session_seed)
            .with_context(|| format!("session {index} failed to start with {config:?}"))?;
        walk_session(&mut session, &mut rng, args.steps)
            .with_context(|| format!("session {index} (seed {session_seed}, {config:?})"))?;

        match session.state() {
            SessionState::Ended(SessionOutcome::Won) => wins += 1,
            SessionState::Ended(SessionOutcome::TimeExpired) => timeouts += 1,
            SessionState::Active => {}
        }
        debug!(
            index,
            session_seed,
            state = ?session.state(),
            moves = session.moves(),
            "session walked"
        );
    }

    info!(wins, timeouts, "fuzzing completed successfully");
    Ok(())
}
