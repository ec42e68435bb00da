//! Text shown around the maze: title, countdown, and end-of-session messages.

use maze_core::{Session, SessionOutcome};

use crate::app_loop::AppMode;
use crate::config_file::AppConfig;
use crate::{format_seed, format_snapshot_hash, outcome_code};

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const RESTART_HINT: &str = "Press R or Enter to play again";
pub const CONTROLS_HINT: &str = "Arrow keys or the buttons below move you";

/// Trimmed player name, or `"Player"` when blank or absent.
pub fn display_name(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_PLAYER_NAME,
    }
}

pub fn title_text(player_name: &str) -> String {
    format!("{player_name}'s Maze")
}

pub fn timer_text(remaining_secs: u32) -> String {
    format!("Time Remaining: {remaining_secs} seconds")
}

pub fn win_text(player_name: &str, config: &AppConfig) -> String {
    match config.win_message_for(player_name) {
        Some(message) => message.to_string(),
        None => format!("Congratulations, {player_name}! You Win!"),
    }
}

pub fn lose_text(player_name: &str) -> String {
    format!("Time's Up, {player_name}. You Lose! Try Again.")
}

pub fn status_text(mode: AppMode, player_name: &str, config: &AppConfig) -> String {
    match mode {
        AppMode::Playing => CONTROLS_HINT.to_string(),
        AppMode::Finished(SessionOutcome::Won) => win_text(player_name, config),
        AppMode::Finished(SessionOutcome::TimeExpired) => lose_text(player_name),
    }
}

pub fn recap_lines(session: &Session) -> Vec<String> {
    let outcome = session.state().outcome().map_or("ACTIVE", outcome_code);
    vec![
        format!("Result: {outcome}"),
        format!("Seed: {}", format_seed(session.seed())),
        format!("Moves: {}  Seconds used: {}", session.moves(), session.ticks()),
        format!("Snapshot: {}", format_snapshot_hash(session.snapshot_hash())),
        RESTART_HINT.to_string(),
    ]
}
