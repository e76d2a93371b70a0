//! Filters keyed on notification state.

use std::sync::Arc;

use super::{Filter, FilterKey};
use crate::notifications::NotificationProvider;
use crate::room::{Membership, Room};

/// Matches joined rooms with unread activity.
pub struct UnreadFilter {
    notifications: Arc<dyn NotificationProvider>,
}

impl UnreadFilter {
    /// Create the filter with the injected notification lookup.
    pub fn new(notifications: Arc<dyn NotificationProvider>) -> Self {
        Self { notifications }
    }
}

impl Filter for UnreadFilter {
    fn key(&self) -> FilterKey {
        FilterKey::Unread
    }

    fn matches(&self, room: &dyn Room) -> bool {
        room.membership() == Some(Membership::Join)
            && self.notifications.state_for(room.id()).is_unread()
    }
}

/// Matches rooms with a pending mention.
pub struct MentionsFilter {
    notifications: Arc<dyn NotificationProvider>,
}

impl MentionsFilter {
    /// Create the filter with the injected notification lookup.
    pub fn new(notifications: Arc<dyn NotificationProvider>) -> Self {
        Self { notifications }
    }
}

impl Filter for MentionsFilter {
    fn key(&self) -> FilterKey {
        FilterKey::Mentions
    }

    fn matches(&self, room: &dyn Room) -> bool {
        self.notifications.state_for(room.id()).is_mention()
    }
}
