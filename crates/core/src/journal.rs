use crate::config::MazeConfig;
use crate::types::{Direction, InputSource};

use serde::{Deserialize, Serialize};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Accepted inputs of one session. The maze itself is rebuilt from `seed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: MazeConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Move { source: InputSource, direction: Direction },
    Tick,
}

impl InputJournal {
    pub fn new(seed: u64, config: MazeConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    pub fn append(&mut self, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, payload });
    }

    pub fn append_move(&mut self, source: InputSource, direction: Direction) {
        self.append(InputPayload::Move { source, direction });
    }

    pub fn append_tick(&mut self) {
        self.append(InputPayload::Tick);
    }
}
