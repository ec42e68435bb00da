pub mod app_loop;
pub mod buttons;
pub mod config_file;
pub mod journal_file;
pub mod seed;
pub mod ui_text;

use maze_core::SessionOutcome;

pub const APP_NAME: &str = "Maze Run";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Map a `SessionOutcome` to its reason code string.
pub fn outcome_code(outcome: SessionOutcome) -> &'static str {
    match outcome {
        SessionOutcome::Won => "WIN_GOAL",
        SessionOutcome::TimeExpired => "LOSE_TIMEOUT",
    }
}
