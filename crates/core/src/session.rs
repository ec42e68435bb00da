//! Play session: owns the generated maze, the player, the countdown, and the
//! input listeners. Generation runs to completion in [`Session::start`]; after
//! that only the player position and the countdown change.

use tracing::{debug, info};

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::mapgen::{GeneratedMaze, MazeGenerator};
use crate::types::*;

mod hash;
mod listeners;
mod movement;


pub use listeners::InputListeners;
pub use movement::try_move;

#[derive(Clone, Debug)]
pub struct Session {
    seed: u64,
    config: MazeConfig,
    maze: GeneratedMaze,
    player: Cell,
    state: SessionState,
    remaining_secs: u32,
    moves: u32,
    ticks: u32,
    listeners: InputListeners,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn start(config: MazeConfig, seed: u64) -> Result<Self, MazeError> {
        let maze = MazeGenerator::new(config.clone())?.generate(seed)?;
        Ok(Self::from_maze(config, seed, maze))
    }

    pub(crate) fn from_maze(config: MazeConfig, seed: u64, maze: GeneratedMaze) -> Self {
        let mut listeners = InputListeners::new();
        for source in InputSource::ALL {
            listeners.register(source);
        }

        let mut session = Self {
            seed,
            player: maze.start,
            remaining_secs: config.time_limit_secs,
            config,
            maze,
            state: SessionState::Active,
            moves: 0,
            ticks: 0,
            listeners,
            events: Vec::new(),
        };
        let started = SessionEvent::Started { start: session.player, goal: session.maze.goal };
        session.events.push(started);
        debug!(
            seed,
            goal_x = session.maze.goal.x,
            goal_y = session.maze.goal.y,
            goal_attempts = session.maze.goal_attempts,
            "session started"
        );

        // Single-passage grids put the goal on the start.
        if session.player == session.maze.goal {
            session.end(SessionOutcome::Won);
        }
        session
    }

    /// Applies one directional intent from `source`. Moves into walls or off the
    /// grid are accepted but leave the player where it is.
    pub fn apply_move(
        &mut self,
        source: InputSource,
        direction: Direction,
    ) -> Result<MoveReport, MazeError> {
        if !self.state.is_active() {
            return Err(MazeError::SessionEnded);
        }
        if self.listeners.active_for(source).is_none() {
            return Err(MazeError::InputClosed { input: source });
        }

        let from = self.player;
        let to = try_move(from, direction, &self.maze.grid);
        if to == from {
            self.events.push(SessionEvent::Blocked { source, at: from, direction });
        } else {
            self.player = to;
            self.moves += 1;
            self.events.push(SessionEvent::Moved { source, from, to });
        }

        if self.player == self.maze.goal {
            self.end(SessionOutcome::Won);
        }
        Ok(MoveReport { from, to, state: self.state })
    }

    /// Advances the countdown by one second; the last second ends the session.
    /// A limit of `n` allows exactly `n` ticks, with no extra tick spent showing zero.
    pub fn tick_second(&mut self) -> Result<SessionState, MazeError> {
        if !self.state.is_active() {
            return Err(MazeError::SessionEnded);
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.ticks += 1;
        self.events.push(SessionEvent::Tick { remaining_secs: self.remaining_secs });
        if self.remaining_secs == 0 {
            self.end(SessionOutcome::TimeExpired);
        }
        Ok(self.state)
    }

    /// Stops accepting input from `source` for the rest of the session.
    pub fn close_input(&mut self, source: InputSource) -> bool {
        match self.listeners.active_for(source) {
            Some(id) => self.listeners.unregister(id).is_some(),
            None => false,
        }
    }

    fn end(&mut self, outcome: SessionOutcome) {
        let listeners_released = self.listeners.unregister_all();
        self.state = SessionState::Ended(outcome);
        self.events.push(SessionEvent::Ended { outcome, listeners_released });
        info!(?outcome, moves = self.moves, ticks = self.ticks, "session ended");
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn maze(&self) -> &GeneratedMaze {
        &self.maze
    }

    pub fn player(&self) -> Cell {
        self.player
    }

    pub fn goal(&self) -> Cell {
        self.maze.goal
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn listener(&self, source: InputSource) -> Option<ListenerId> {
        self.listeners.active_for(source)
    }

    pub fn listeners(&self) -> &InputListeners {
        &self.listeners
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }
}
