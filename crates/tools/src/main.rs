use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use maze_core::config::{DEFAULT_COLS, DEFAULT_ROWS};
use maze_core::{
    Cell, InputJournal, MazeConfig, MazeGenerator, ReplayResult, SessionState, replay_to_end,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "maze-tools", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a maze and print it as ASCII
    Generate {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
        /// Start cell as `x,y`
        #[arg(long, value_parser = parse_cell, default_value = "0,0")]
        start: Cell,
        /// Give up random goal draws after this many and use the last carved room
        #[arg(long)]
        max_goal_attempts: Option<u32>,
    },
    /// Replay a session journal and print the final state
    Replay {
        /// Path to the journal JSON file to replay
        #[arg(short, long)]
        journal: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Generate { seed, rows, cols, start, max_goal_attempts } => {
            let config =
                MazeConfig { rows, cols, start, max_goal_attempts, ..MazeConfig::default() };
            print!("{}", generate_report(seed, config)?);
        }
        Command::Replay { journal } => {
            let journal_data = fs::read_to_string(&journal)
                .with_context(|| format!("Failed to read journal file: {}", journal.display()))?;
            let journal: InputJournal = serde_json::from_str(&journal_data)
                .with_context(|| "Failed to deserialize journal JSON")?;
            let result = replay_to_end(&journal).context("Replay failed")?;
            print!("{}", replay_report(&journal, &result));
        }
    }

    Ok(())
}

fn generate_report(seed: u64, config: MazeConfig) -> Result<String> {
    let generator = MazeGenerator::new(config).context("Invalid maze settings")?;
    let maze =
        generator.generate(seed).with_context(|| format!("Generation failed for seed {seed}"))?;

    let mut report = String::new();
    for row in maze.ascii_rows() {
        report.push_str(&row);
        report.push('\n');
    }
    report.push_str(&format!("Seed: {seed}\n"));
    report.push_str(&format!("Start: ({}, {})\n", maze.start.x, maze.start.y));
    report.push_str(&format!("Goal: ({}, {})\n", maze.goal.x, maze.goal.y));
    report.push_str(&format!("Passages: {}\n", maze.grid.passage_count()));
    report.push_str(&format!(
        "Goal attempts: {}{}\n",
        maze.goal_attempts,
        if maze.fallback_used { " (fallback)" } else { "" }
    ));
    report.push_str(&format!("Fingerprint: 0x{:016x}\n", maze.fingerprint()));
    Ok(report)
}

fn replay_report(journal: &InputJournal, result: &ReplayResult) -> String {
    let state = match result.final_state {
        SessionState::Active => "Active".to_string(),
        SessionState::Ended(outcome) => format!("{outcome:?}"),
    };
    format!(
        concat!(
            "Replay complete.\nSeed: {}\nInputs: {}\nState: {}\n",
            "Player: ({}, {})\nMoves: {}\nSnapshot Hash: 0x{:016x}\n",
        ),
        journal.seed,
        journal.inputs.len(),
        state,
        result.final_player.x,
        result.final_player.y,
        result.moves,
        result.final_snapshot_hash,
    )
}

fn parse_cell(raw: &str) -> Result<Cell, String> {
    let (x, y) = raw.split_once(',').ok_or_else(|| format!("expected `x,y`, got '{raw}'"))?;
    let parse = |part: &str| {
        part.trim().parse::<i32>().map_err(|_| format!("'{part}' is not a whole number"))
    };
    Ok(Cell::new(parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use maze_core::{Direction, InputSource};
    use proptest::prelude::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_parses_dimensions_and_start() {
        let cli = Cli::try_parse_from([
            "maze-tools", "generate", "--seed", "7", "--rows", "5", "--cols", "9", "--start", "2,4",
        ])
        .unwrap();
        match cli.command {
            Command::Generate { seed, rows, cols, start, max_goal_attempts } => {
                assert_eq!((seed, rows, cols), (7, 5, 9));
                assert_eq!(start, Cell::new(2, 4));
                assert_eq!(max_goal_attempts, None);
            }
            Command::Replay { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn malformed_start_is_rejected() {
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
        assert_eq!(parse_cell(" 1, 2"), Ok(Cell::new(1, 2)));
    }

    #[test]
    fn generate_report_draws_the_maze_and_summary() {
        let report = generate_report(3, MazeConfig::with_dimensions(5, 7)).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 5 + 6);
        assert!(lines[..5].iter().all(|line| line.chars().count() == 7));
        assert!(lines[0].starts_with('S'));
        assert!(report.contains("Fingerprint: 0x"));
    }

    #[test]
    fn generate_report_rejects_bad_settings() {
        assert!(generate_report(3, MazeConfig::with_dimensions(0, 7)).is_err());
    }

    #[test]
    fn replay_report_names_the_final_state() {
        let mut journal = InputJournal::new(11, MazeConfig::with_dimensions(5, 5));
        journal.append_move(InputSource::Keyboard, Direction::Up);
        let result = replay_to_end(&journal).unwrap();

        let report = replay_report(&journal, &result);
        assert!(report.contains("State: Active"), "{report}");
        assert!(report.contains("Player: (0, 0)"), "{report}");
        assert!(report.contains("Inputs: 1"), "{report}");
    }

    proptest! {
        #[test]
        fn generate_report_has_one_line_per_row(
            seed in any::<u64>(),
            rows in 1usize..16,
            cols in 1usize..16,
        ) {
            let report = generate_report(seed, MazeConfig::with_dimensions(rows, cols)).unwrap();
            let grid_lines = report.lines().take_while(|line| !line.starts_with("Seed:")).count();
            prop_assert_eq!(grid_lines, rows);
        }
    }
}
