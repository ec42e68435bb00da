//! Error types for maze generation and session control.

use thiserror::Error;

use crate::types::{Cell, InputSource};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error(
        "grid dimensions {rows}x{cols} are invalid (each must be between 1 and {max})",
        max = crate::config::MAX_DIMENSION
    )]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("start cell ({}, {}) lies outside the {rows}x{cols} grid", .start.x, .start.y)]
    StartOutOfBounds { start: Cell, rows: usize, cols: usize },

    #[error("time limit must be at least one second")]
    InvalidTimeLimit,

    #[error("no reachable goal found after {attempts} attempts")]
    GenerationFailed { attempts: u32 },

    #[error("session has ended and no longer accepts input")]
    SessionEnded,

    #[error("input source {input:?} is not registered for this session")]
    InputClosed { input: InputSource },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("session rejected the journal: {0}")]
    Session(#[from] MazeError),

    #[error("journal format version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },

    #[error("journal record at position {expected} carries seq {found}")]
    SequenceGap { expected: u64, found: u64 },

    #[error("journal record {seq} arrives after the session ended")]
    InputAfterEnd { seq: u64 },
}
