//! Event System
//!
//! The session records what happened during a frame as events instead of
//! calling into audio or logging directly. The frame loop drains the queue
//! after the update and hands each event to whoever cares (sound cues, log).

use super::session::GameMode;
use super::trash::TrashKind;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    #[cfg(test)]
    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that happened during a session update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The game moved between modes
    ModeChanged { from: GameMode, to: GameMode },
    /// A pool slot was filled
    TrashSpawned { slot: usize, kind: TrashKind },
    /// The diver picked up trash
    TrashPickedUp { slot: usize, kind: TrashKind },
    /// Trash went into a bin
    TrashDisposed { kind: TrashKind, bin: TrashKind, points: i32 },
    /// A spawn was requested but every slot is taken
    PoolFull,
    /// The round's score beat the session best
    NewBestScore(i32),
}

impl GameEvent {
    /// Correct disposal (trash kind matches the bin)
    pub fn is_correct_disposal(&self) -> bool {
        matches!(self, GameEvent::TrashDisposed { kind, bin, .. } if kind == bin)
    }
}
