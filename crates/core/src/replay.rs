use crate::{
    Session,
    error::ReplayError,
    journal::{InputJournal, InputPayload, JOURNAL_FORMAT_VERSION},
    types::{Cell, SessionState},
};

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_state: SessionState,
    pub final_player: Cell,
    pub moves: u32,
    pub final_snapshot_hash: u64,
}

/// Rebuilds the session from the journal seed and applies every record in order.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let session = replay_session(journal)?;
    Ok(ReplayResult {
        final_state: session.state(),
        final_player: session.player(),
        moves: session.moves(),
        final_snapshot_hash: session.snapshot_hash(),
    })
}

/// Fails before touching the session when the journal comes from another format
/// version, and before each record whose `seq` is not its position.
pub fn replay_session(journal: &InputJournal) -> Result<Session, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: journal.format_version,
            expected: JOURNAL_FORMAT_VERSION,
        });
    }
    let mut session = Session::start(journal.config.clone(), journal.seed)?;

    for (position, record) in journal.inputs.iter().enumerate() {
        let expected = position as u64;
        if record.seq != expected {
            return Err(ReplayError::SequenceGap { expected, found: record.seq });
        }
        if !session.state().is_active() {
            return Err(ReplayError::InputAfterEnd { seq: record.seq });
        }
        match record.payload {
            InputPayload::Move { source, direction } => {
                session.apply_move(source, direction)?;
            }
            InputPayload::Tick => {
                session.tick_second()?;
            }
        }
    }

    Ok(session)
}
