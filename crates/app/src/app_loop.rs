use maze_core::{Direction, InputJournal, InputPayload, InputSource, Session, SessionOutcome};
use tracing::debug;

/// Everything the player did during one rendered frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub key_directions: Vec<Direction>,
    pub button_directions: Vec<Direction>,
    pub elapsed_secs: f32,
    pub restart: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    Playing,
    Finished(SessionOutcome),
}

pub struct AppState {
    pub mode: AppMode,
    /// Inputs accepted during the current frame's `tick()` call.
    pub accepted_inputs: Vec<InputPayload>,
    journal: InputJournal,
    elapsed_carry: f32,
}

impl AppState {
    pub fn new(session: &Session) -> Self {
        let mode = match session.state().outcome() {
            Some(outcome) => AppMode::Finished(outcome),
            None => AppMode::Playing,
        };
        Self {
            mode,
            accepted_inputs: Vec::new(),
            journal: InputJournal::new(session.seed(), session.config().clone()),
            elapsed_carry: 0.0,
        }
    }

    /// Every input the session accepted since `new`, in order.
    pub fn journal(&self) -> &InputJournal {
        &self.journal
    }

    /// Outcome of a session that is already over, including one won at start.
    pub fn finished_outcome(&self) -> Option<SessionOutcome> {
        match self.mode {
            AppMode::Finished(outcome) => Some(outcome),
            AppMode::Playing => None,
        }
    }

    /// Restart only applies once the current session is over.
    pub fn wants_restart(&self, frame: &FrameInput) -> bool {
        frame.restart && matches!(self.mode, AppMode::Finished(_))
    }

    /// Forwards one frame of input to the session. Returns the outcome when this
    /// frame ended the session.
    pub fn tick(&mut self, session: &mut Session, frame: &FrameInput) -> Option<SessionOutcome> {
        self.accepted_inputs.clear();
        if self.mode != AppMode::Playing {
            return None;
        }

        let sources = [
            (InputSource::Keyboard, &frame.key_directions),
            (InputSource::OnScreenButtons, &frame.button_directions),
        ];
        for (source, directions) in sources {
            for &direction in directions {
                self.forward_move(session, source, direction);
            }
        }
        self.advance_clock(session, frame.elapsed_secs);

        let outcome = session.state().outcome()?;
        self.mode = AppMode::Finished(outcome);
        Some(outcome)
    }

    fn forward_move(&mut self, session: &mut Session, source: InputSource, direction: Direction) {
        match session.apply_move(source, direction) {
            Ok(_) => self.record(InputPayload::Move { source, direction }),
            Err(error) => debug!(?source, ?direction, %error, "move rejected"),
        }
    }

    fn advance_clock(&mut self, session: &mut Session, elapsed_secs: f32) {
        if !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
            return;
        }
        self.elapsed_carry += elapsed_secs;
        while self.elapsed_carry >= 1.0 && session.state().is_active() {
            self.elapsed_carry -= 1.0;
            if let Err(error) = session.tick_second() {
                debug!(%error, "tick rejected");
                break;
            }
            self.record(InputPayload::Tick);
        }
    }

    fn record(&mut self, payload: InputPayload) {
        self.journal.append(payload.clone());
        self.accepted_inputs.push(payload);
    }
}
