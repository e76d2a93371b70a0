//! Per-room notification state and the provider capability.
//!
//! Sorters and filters never reach into a global store for notification
//! data; they take a [`NotificationProvider`] at construction so they stay
//! testable in isolation. [`NotificationStateStore`] is the concrete
//! provider an embedding application feeds from its sync loop.

use dashmap::DashMap;

use crate::room::RoomId;

/// Severity of pending notifications, from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum NotificationLevel {
    /// Nothing pending.
    #[default]
    None,
    /// New activity without a notification (e.g. muted-level events).
    Activity,
    /// A notifying message.
    Notification,
    /// A mention of the user (highlight).
    Mention,
}

/// Snapshot of a room's notification status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomNotificationState {
    /// Highest pending severity.
    pub level: NotificationLevel,
    /// Number of notifying messages; also carries an explicit
    /// marked-unread, which reports a count without a level.
    pub count: u64,
    /// Whether the user muted the room (notification volume).
    pub muted: bool,
}

impl RoomNotificationState {
    /// Whether the room should read as unread.
    #[inline]
    pub fn is_unread(&self) -> bool {
        self.level >= NotificationLevel::Activity || self.count > 0
    }

    /// Whether the room carries a pending mention.
    #[inline]
    pub fn is_mention(&self) -> bool {
        self.level >= NotificationLevel::Mention
    }
}

/// Capability to look up a room's notification state.
///
/// Rooms the provider has never seen resolve to the default state (no
/// pending notifications, not muted).
pub trait NotificationProvider {
    /// Current state for `room`.
    fn state_for(&self, room: &RoomId) -> RoomNotificationState;
}

/// Concurrent-map-backed [`NotificationProvider`].
///
/// Writers (the application's sync machinery, possibly on another thread)
/// call [`set`](Self::set)/[`clear`](Self::clear); the engine only reads.
#[derive(Debug, Default)]
pub struct NotificationStateStore {
    states: DashMap<RoomId, RoomNotificationState>,
}

impl NotificationStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or replace the state for `room`.
    pub fn set(&self, room: RoomId, state: RoomNotificationState) {
        self.states.insert(room, state);
    }

    /// Drop the state for `room`, reverting it to the default.
    pub fn clear(&self, room: &RoomId) {
        self.states.remove(room);
    }
}

impl NotificationProvider for NotificationStateStore {
    fn state_for(&self, room: &RoomId) -> RoomNotificationState {
        self.states.get(room).map(|s| *s.value()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_room_resolves_to_default() {
        let store = NotificationStateStore::new();
        let state = store.state_for(&RoomId::new("!nowhere:example.org"));
        assert_eq!(state, RoomNotificationState::default());
        assert!(!state.is_unread());
        assert!(!state.is_mention());
    }

    #[test]
    fn levels_order_by_urgency() {
        assert!(NotificationLevel::None < NotificationLevel::Activity);
        assert!(NotificationLevel::Activity < NotificationLevel::Notification);
        assert!(NotificationLevel::Notification < NotificationLevel::Mention);
    }

    #[test]
    fn marked_unread_counts_without_level() {
        let state = RoomNotificationState {
            level: NotificationLevel::None,
            count: 1,
            muted: false,
        };
        assert!(state.is_unread());
        assert!(!state.is_mention());
    }

    #[test]
    fn set_and_clear_roundtrip() {
        let store = NotificationStateStore::new();
        let room = RoomId::new("!a:example.org");

        store.set(
            room.clone(),
            RoomNotificationState {
                level: NotificationLevel::Mention,
                count: 3,
                muted: false,
            },
        );
        assert!(store.state_for(&room).is_mention());

        store.clear(&room);
        assert_eq!(store.state_for(&room), RoomNotificationState::default());
    }
}
