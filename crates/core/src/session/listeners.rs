//! Registry of input listeners allowed to drive a session.
//! A session registers one listener per source when it starts and empties the
//! registry on every terminal transition, so stale input cannot move the player.

use slotmap::SlotMap;

use crate::types::{InputSource, ListenerId};

#[derive(Clone, Debug, Default)]
pub struct InputListeners {
    listeners: SlotMap<ListenerId, InputSource>,
}

impl InputListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source`, reusing the live listener if it already has one.
    pub fn register(&mut self, source: InputSource) -> ListenerId {
        if let Some(id) = self.active_for(source) {
            return id;
        }
        self.listeners.insert(source)
    }

    pub fn unregister(&mut self, id: ListenerId) -> Option<InputSource> {
        self.listeners.remove(id)
    }

    /// Drops every listener and returns how many were live.
    pub fn unregister_all(&mut self) -> usize {
        let released = self.listeners.len();
        self.listeners.clear();
        released
    }

    pub fn active_for(&self, source: InputSource) -> Option<ListenerId> {
        self.listeners.iter().find(|(_, registered)| **registered == source).map(|(id, _)| id)
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
