//! Shared fixtures for unit tests.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::notifications::{NotificationProvider, RoomNotificationState};
use crate::room::{Membership, Room, RoomId, SpaceId, TagId};

/// Buildable in-memory room.
pub(crate) struct TestRoom {
    id: RoomId,
    name: Option<String>,
    membership: Option<Membership>,
    tags: Vec<TagId>,
    dm: bool,
    ts: i64,
    spaces: Vec<SpaceId>,
}

impl TestRoom {
    /// A joined, unnamed-after-its-id, untagged room with activity at 0.
    pub fn new(id: &str) -> Self {
        Self {
            id: RoomId::new(id),
            name: Some(id.trim_start_matches('!').to_string()),
            membership: Some(Membership::Join),
            tags: Vec::new(),
            dm: false,
            ts: 0,
            spaces: Vec::new(),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn nameless(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn invited(mut self) -> Self {
        self.membership = Some(Membership::Invite);
        self
    }

    pub fn without_membership(mut self) -> Self {
        self.membership = None;
        self
    }

    pub fn with_tag(mut self, tag: TagId) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn dm(mut self) -> Self {
        self.dm = true;
        self
    }

    pub fn at(mut self, ts: i64) -> Self {
        self.ts = ts;
        self
    }

    pub fn in_space(mut self, space: &str) -> Self {
        self.spaces.push(SpaceId::new(space));
        self
    }

    pub fn rc(self) -> Rc<dyn Room> {
        Rc::new(self)
    }
}

impl Room for TestRoom {
    fn id(&self) -> &RoomId {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn membership(&self) -> Option<Membership> {
        self.membership
    }

    fn has_tag(&self, tag: TagId) -> bool {
        self.tags.contains(&tag)
    }

    fn is_dm(&self) -> bool {
        self.dm
    }

    fn last_activity_ts(&self) -> i64 {
        self.ts
    }

    fn in_space(&self, space: &SpaceId) -> bool {
        self.spaces.is_empty() || self.spaces.contains(space)
    }
}

/// Fixed-map notification provider.
#[derive(Default)]
pub(crate) struct StaticNotifications {
    states: HashMap<RoomId, RoomNotificationState>,
}

impl StaticNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, room: &str, state: RoomNotificationState) -> Self {
        self.states.insert(RoomId::new(room), state);
        self
    }

    pub fn muted(self, room: &str) -> Self {
        self.with(
            room,
            RoomNotificationState {
                muted: true,
                ..Default::default()
            },
        )
    }

    pub fn unread(self, room: &str) -> Self {
        self.with(
            room,
            RoomNotificationState {
                level: crate::notifications::NotificationLevel::Notification,
                count: 1,
                muted: false,
            },
        )
    }

    pub fn into_arc(self) -> Arc<dyn NotificationProvider> {
        Arc::new(self)
    }
}

impl NotificationProvider for StaticNotifications {
    fn state_for(&self, room: &RoomId) -> RoomNotificationState {
        self.states.get(room).copied().unwrap_or_default()
    }
}

/// Ids of `rooms`, in order, as plain strings.
pub(crate) fn ids(rooms: &[Rc<dyn Room>]) -> Vec<&str> {
    rooms.iter().map(|room| room.id().as_str()).collect()
}
