//! Shared fixtures for integration tests.

use std::rc::Rc;
use std::sync::Arc;

use lobby::{
    Membership, NotificationLevel, NotificationStateStore, Room, RoomId, RoomNotificationState,
    SpaceId, TagId,
};

/// Buildable room standing in for an SDK room object.
pub struct FakeRoom {
    id: RoomId,
    name: Option<String>,
    membership: Option<Membership>,
    tags: Vec<TagId>,
    dm: bool,
    ts: i64,
    spaces: Vec<SpaceId>,
}

#[allow(dead_code)] // not every test binary uses every builder
impl FakeRoom {
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

    pub fn invited(mut self) -> Self {
        self.membership = Some(Membership::Invite);
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

impl Room for FakeRoom {
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

pub fn notification_store() -> Arc<NotificationStateStore> {
    Arc::new(NotificationStateStore::new())
}

#[allow(dead_code)]
pub fn mark_unread(store: &NotificationStateStore, room: &str, count: u64) {
    store.set(
        RoomId::new(room),
        RoomNotificationState {
            level: NotificationLevel::Notification,
            count,
            muted: false,
        },
    );
}

#[allow(dead_code)]
pub fn mark_muted(store: &NotificationStateStore, room: &str) {
    store.set(
        RoomId::new(room),
        RoomNotificationState {
            muted: true,
            ..Default::default()
        },
    );
}

/// Ids of `rooms`, in order, as plain strings.
pub fn ids(rooms: &[Rc<dyn Room>]) -> Vec<&str> {
    rooms.iter().map(|room| room.id().as_str()).collect()
}
