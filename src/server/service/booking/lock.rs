//! Per-room mutual exclusion for booking creation.
//!
//! Holds one async mutex per room that currently has a holder or waiter. Entries
//! are dropped from the registry when the last guard for a room is released. Only
//! locks are kept here; booking state always comes from the database.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use tokio::sync::OwnedMutexGuard;

type Registry = Arc<Mutex<HashMap<i32, Arc<tokio::sync::Mutex<()>>>>>;

/// Registry of per-room locks shared across requests.
///
/// Cloning is cheap and all clones share the same registry.
#[derive(Clone, Default)]
pub struct RoomLocks {
    locks: Registry,
}

impl RoomLocks {
    /// Creates an empty lock registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to a room.
    ///
    /// The registry lock is held only long enough to look up or insert the room's
    /// mutex. The returned guard releases the room when dropped, including when the
    /// owning request future is cancelled.
    ///
    /// # Arguments
    /// - `room_id` - Room to lock
    ///
    /// # Returns
    /// - `RoomGuard` - Guard holding the room's lock
    pub async fn acquire(&self, room_id: i32) -> RoomGuard {
        let room_lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(room_id).or_default().clone()
        };

        RoomGuard {
            room_id,
            guard: Some(room_lock.lock_owned().await),
            registry: self.locks.clone(),
        }
    }

    /// Number of rooms with a live lock entry.
    #[cfg(test)]
    pub fn tracked_rooms(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Exclusive access to one room, released on drop.
pub struct RoomGuard {
    room_id: i32,
    guard: Option<OwnedMutexGuard<()>>,
    registry: Registry,
}

impl Drop for RoomGuard {
    fn drop(&mut self) {
        // Release the room before inspecting the registry so a waiter's clone is
        // the only thing keeping the entry alive.
        self.guard.take();

        let mut locks = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        if locks
            .get(&self.room_id)
            .is_some_and(|room_lock| Arc::strong_count(room_lock) == 1)
        {
            locks.remove(&self.room_id);
        }
    }
}
