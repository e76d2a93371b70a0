//! The room-list view model.
//!
//! Bridges the [`RoomListStore`] to a rendering layer: holds a
//! [`Snapshot`] of [`RoomListViewState`], refreshes it on store events, and
//! tears its subscriptions down through [`Disposables`]. Every refresh
//! performs exactly one snapshot merge, so the view observes one change
//! notification per logical update.

mod state;

pub use state::{RoomListViewState, RoomListViewStatePatch};

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use lobby_vm::{DisposeError, Disposables, Snapshot};
use tracing::trace;

use crate::filters::FilterKey;
use crate::notifications::NotificationProvider;
use crate::room::{Room, RoomId};
use crate::store::{RoomListEvent, RoomListStore};

/// Why a refresh is running; decides whether sticky positioning applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefreshCause {
    /// The list changed under an unchanged active room.
    ListUpdate,
    /// The active room itself changed.
    RoomChange,
}

struct VmInner {
    store: Rc<RoomListStore>,
    notifications: Arc<dyn NotificationProvider>,
    snapshot: Snapshot<RoomListViewState>,
    /// The visible rooms backing `room_ids`, in snapshot order.
    rooms: Vec<Rc<dyn Room>>,
    active_filter: Option<FilterKey>,
    active_room: Option<RoomId>,
    last_active_index: Option<usize>,
}

/// View model for the room-list panel.
///
/// Owned by one logical controller; all methods run synchronously on the
/// owner's thread. The change callback passed at construction fires after
/// each state update and must not reenter the view model.
pub struct RoomListViewModel {
    inner: Rc<RefCell<VmInner>>,
    disposables: Disposables,
}

impl RoomListViewModel {
    /// Build the view model and subscribe it to `store`.
    pub fn new(
        store: Rc<RoomListStore>,
        notifications: Arc<dyn NotificationProvider>,
        on_change: impl Fn() + 'static,
    ) -> Result<Self, DisposeError> {
        let result = store.sorted_rooms(None);
        let initial = RoomListViewState {
            room_ids: result.rooms.iter().map(|r| r.id().clone()).collect(),
            active_room_index: None,
            active_filter: None,
            space_id: result.space_id.clone(),
            is_loading: store.is_loading(),
            is_empty: result.rooms.is_empty(),
        };

        let inner = Rc::new(RefCell::new(VmInner {
            store: Rc::clone(&store),
            notifications,
            snapshot: Snapshot::new(initial, on_change),
            rooms: result.rooms,
            active_filter: None,
            active_room: None,
            last_active_index: None,
        }));

        let mut disposables = Disposables::new();

        let weak = Rc::downgrade(&inner);
        disposables.track_listener(store.events(), RoomListEvent::ListsUpdate, move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().refresh(RefreshCause::ListUpdate);
            }
        })?;

        let weak = Rc::downgrade(&inner);
        disposables.track_listener(store.events(), RoomListEvent::ListsLoaded, move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().snapshot.merge(RoomListViewStatePatch {
                    is_loading: Some(false),
                    ..Default::default()
                });
            }
        })?;

        Ok(Self { inner, disposables })
    }

    /// A copy of the current view state.
    pub fn state(&self) -> RoomListViewState {
        self.inner.borrow().snapshot.current().clone()
    }

    /// The filter currently toggled on.
    pub fn active_filter(&self) -> Option<FilterKey> {
        self.inner.borrow().active_filter
    }

    /// Toggle `key`: activate it, or deactivate it when already active.
    pub fn toggle_filter(&self, key: FilterKey) {
        let mut inner = self.inner.borrow_mut();
        inner.active_filter = if inner.active_filter == Some(key) {
            None
        } else {
            Some(key)
        };
        trace!(filter = ?inner.active_filter, "filter toggled");
        inner.refresh(RefreshCause::ListUpdate);
    }

    /// Change the active (viewed) room.
    pub fn set_active_room(&self, room: Option<RoomId>) {
        let mut inner = self.inner.borrow_mut();
        inner.active_room = room;
        inner.refresh(RefreshCause::RoomChange);
    }

    /// The room `delta` steps away from the active room in the visible
    /// list, wrapping at both ends.
    ///
    /// With `unread_only`, navigation runs over the unread rooms plus the
    /// active room itself. `None` when no room is active or the active room
    /// is not in the (narrowed) list.
    pub fn room_for_delta(&self, delta: isize, unread_only: bool) -> Option<RoomId> {
        let inner = self.inner.borrow();
        let current = inner.active_room.as_ref()?;

        let rooms: Vec<&Rc<dyn Room>> = if unread_only {
            inner
                .rooms
                .iter()
                .filter(|room| {
                    room.id() == current
                        || inner.notifications.state_for(room.id()).is_unread()
                })
                .collect()
        } else {
            inner.rooms.iter().collect()
        };

        let position = rooms.iter().position(|room| room.id() == current)?;
        let len = rooms.len() as isize;
        let target = (position as isize + delta).rem_euclid(len) as usize;
        Some(rooms[target].id().clone())
    }

    /// Tear down store subscriptions. Idempotent.
    pub fn dispose(&mut self) {
        self.disposables.dispose();
    }

    /// Whether `dispose` has run.
    pub fn is_disposed(&self) -> bool {
        self.disposables.is_disposed()
    }
}

impl VmInner {
    /// Re-query the store and install a fresh snapshot in one merge.
    fn refresh(&mut self, cause: RefreshCause) {
        let filter_keys = self.active_filter.map(|key| [key]);
        let result = self
            .store
            .sorted_rooms(filter_keys.as_ref().map(|keys| keys.as_slice()));

        let mut rooms = result.rooms;
        if cause == RefreshCause::ListUpdate {
            apply_sticky_room(&mut rooms, self.active_room.as_ref(), self.last_active_index);
        }

        let active_room_index = self
            .active_room
            .as_ref()
            .and_then(|id| rooms.iter().position(|room| room.id() == id));
        self.last_active_index = active_room_index;

        let room_ids: Vec<RoomId> = rooms.iter().map(|room| room.id().clone()).collect();
        let is_empty = room_ids.is_empty();
        self.rooms = rooms;

        self.snapshot.merge(RoomListViewStatePatch {
            room_ids: Some(room_ids),
            active_room_index: Some(active_room_index),
            active_filter: Some(self.active_filter),
            space_id: Some(result.space_id),
            is_loading: Some(self.store.is_loading()),
            is_empty: Some(is_empty),
        });
    }
}

/// Keep the active room at its previous index across a list update so it
/// does not jump around under the user.
///
/// Skipped when there is no active room, no previous index, the room left
/// the list, the index did not move, or the previous index fell out of
/// bounds (rooms were removed).
fn apply_sticky_room(
    rooms: &mut Vec<Rc<dyn Room>>,
    active: Option<&RoomId>,
    old_index: Option<usize>,
) {
    let Some(active) = active else { return };
    let Some(old_index) = old_index else { return };
    let Some(new_index) = rooms.iter().position(|room| room.id() == active) else {
        return;
    };
    if new_index == old_index || old_index >= rooms.len() {
        return;
    }

    let room = rooms.remove(new_index);
    rooms.insert(old_index, room);
}
