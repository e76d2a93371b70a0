//! Activity-order sorter.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{Sorter, SortingAlgorithm};
use crate::notifications::NotificationProvider;
use crate::room::{Room, TagId};

/// Orders rooms by bucket, then by most recent activity.
///
/// Buckets, earliest first: unflagged (0), low-priority (2), muted and
/// low-priority (5), muted (10). Muted comes from notification state, low
/// priority from the room tag. Within a bucket, newer activity sorts
/// earlier.
pub struct RecencySorter {
    notifications: Arc<dyn NotificationProvider>,
}

impl RecencySorter {
    /// Create the sorter with the injected notification lookup.
    pub fn new(notifications: Arc<dyn NotificationProvider>) -> Self {
        Self { notifications }
    }

    /// Bucket score for `room`; lower sorts earlier.
    fn score(&self, room: &dyn Room) -> u8 {
        let muted = self.notifications.state_for(room.id()).muted;
        let low_priority = room.has_tag(TagId::LowPriority);
        match (muted, low_priority) {
            (false, false) => 0,
            (false, true) => 2,
            (true, true) => 5,
            (true, false) => 10,
        }
    }
}

impl Sorter for RecencySorter {
    fn algorithm(&self) -> SortingAlgorithm {
        SortingAlgorithm::Recency
    }

    fn compare(&self, a: &dyn Room, b: &dyn Room) -> Ordering {
        self.score(a)
            .cmp(&self.score(b))
            .then_with(|| b.last_activity_ts().cmp(&a.last_activity_ts()))
    }
}

impl std::fmt::Debug for RecencySorter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecencySorter").finish_non_exhaustive()
    }
}
