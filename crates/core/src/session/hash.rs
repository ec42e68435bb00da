//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Session {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.maze.fingerprint());
        hasher.write_i32(self.player.x);
        hasher.write_i32(self.player.y);
        hasher.write_u32(self.remaining_secs);
        hasher.write_u32(self.moves);
        hasher.write_u32(self.ticks);
        hasher.write_u8(match self.state {
            SessionState::Active => 0,
            SessionState::Ended(SessionOutcome::Won) => 1,
            SessionState::Ended(SessionOutcome::TimeExpired) => 2,
        });
        hasher.finish()
    }
}
