//! The room-list store.
//!
//! Central holder of the SDK-supplied room collection. Queries run the
//! pipeline space scope → filters → sorter and hand back a fresh sequence;
//! the held collection is never reordered. Mutations each publish exactly
//! one event so view models can refresh.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use lobby_vm::Emitter;
use tracing::{debug, trace};

use crate::config::Config;
use crate::filters::{Filter, FilterKey, filter_for};
use crate::notifications::NotificationProvider;
use crate::room::{Room, RoomId, SpaceId};
use crate::sorters::{Sorter, SortingAlgorithm, sorter_for};

/// Events published by [`RoomListStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomListEvent {
    /// Membership, ordering, space, or sorting changed.
    ListsUpdate,
    /// The initial room load completed.
    ListsLoaded,
}

/// Result of a room-list query.
pub struct RoomsResult {
    /// The filtered, ordered rooms.
    pub rooms: Vec<Rc<dyn Room>>,
    /// The space the query was scoped to.
    pub space_id: Option<SpaceId>,
    /// The filters that were applied, if any.
    pub filter_keys: Option<Vec<FilterKey>>,
}

impl fmt::Debug for RoomsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomsResult")
            .field("rooms", &self.rooms.len())
            .field("space_id", &self.space_id)
            .field("filter_keys", &self.filter_keys)
            .finish()
    }
}

/// Observable, filterable, sortable view over the application's rooms.
///
/// Single-threaded, single-writer: one logical owner mutates the store;
/// events fire synchronously during the mutating call.
pub struct RoomListStore {
    rooms: RefCell<Vec<Rc<dyn Room>>>,
    active_space: RefCell<Option<SpaceId>>,
    sorter: RefCell<Box<dyn Sorter>>,
    notifications: Arc<dyn NotificationProvider>,
    events: Emitter<RoomListEvent>,
    loading: Cell<bool>,
    config: Config,
}

impl RoomListStore {
    /// Create an empty store in the loading state.
    pub fn new(config: Config, notifications: Arc<dyn NotificationProvider>) -> Self {
        let algorithm = config.sorting.for_space(None);
        let sorter = sorter_for(algorithm, Arc::clone(&notifications));
        Self {
            rooms: RefCell::new(Vec::new()),
            active_space: RefCell::new(None),
            sorter: RefCell::new(sorter),
            notifications,
            events: Emitter::new(),
            loading: Cell::new(true),
            config,
        }
    }

    /// The store's event emitter, for view models to subscribe to.
    pub fn events(&self) -> &Emitter<RoomListEvent> {
        &self.events
    }

    /// Whether the initial room load is still pending.
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// The currently active space scope.
    pub fn active_space(&self) -> Option<SpaceId> {
        self.active_space.borrow().clone()
    }

    /// The sorting algorithm currently in effect.
    pub fn sorting(&self) -> SortingAlgorithm {
        self.sorter.borrow().algorithm()
    }

    /// Replace the whole collection, e.g. after (re)sync.
    pub fn set_rooms(&self, rooms: Vec<Rc<dyn Room>>) {
        debug!(count = rooms.len(), "room collection replaced");
        *self.rooms.borrow_mut() = rooms;
        self.events.emit(RoomListEvent::ListsUpdate);
    }

    /// Insert `room`, or replace the held handle with the same id.
    pub fn upsert_room(&self, room: Rc<dyn Room>) {
        {
            let mut rooms = self.rooms.borrow_mut();
            match rooms.iter().position(|held| held.id() == room.id()) {
                Some(index) => rooms[index] = room,
                None => rooms.push(room),
            }
        }
        self.events.emit(RoomListEvent::ListsUpdate);
    }

    /// Remove the room with `id`. No event fires if the room was unknown.
    pub fn remove_room(&self, id: &RoomId) {
        let removed = {
            let mut rooms = self.rooms.borrow_mut();
            let before = rooms.len();
            rooms.retain(|room| room.id() != id);
            rooms.len() != before
        };
        if removed {
            self.events.emit(RoomListEvent::ListsUpdate);
        }
    }

    /// Mark the initial load complete. Fires `ListsLoaded` once.
    pub fn mark_loaded(&self) {
        if !self.loading.get() {
            return;
        }
        self.loading.set(false);
        self.events.emit(RoomListEvent::ListsLoaded);
    }

    /// Switch the active space, re-applying any per-space sorting override.
    pub fn set_active_space(&self, space: Option<SpaceId>) {
        debug!(space = ?space, "active space changed");
        let algorithm = self.config.sorting.for_space(space.as_ref());
        *self.active_space.borrow_mut() = space;
        self.swap_sorter(algorithm);
        self.events.emit(RoomListEvent::ListsUpdate);
    }

    /// Switch the sorting algorithm and publish the new order.
    pub fn resort(&self, algorithm: SortingAlgorithm) {
        debug!(%algorithm, "resort requested");
        self.swap_sorter(algorithm);
        self.events.emit(RoomListEvent::ListsUpdate);
    }

    fn swap_sorter(&self, algorithm: SortingAlgorithm) {
        let mut sorter = self.sorter.borrow_mut();
        if sorter.algorithm() != algorithm {
            *sorter = sorter_for(algorithm, Arc::clone(&self.notifications));
        }
    }

    /// Run the query pipeline: space scope → filters (AND) → sorter.
    ///
    /// Duplicate filter keys are applied once. The held collection is
    /// untouched; the result owns a fresh sequence.
    pub fn sorted_rooms(&self, filter_keys: Option<&[FilterKey]>) -> RoomsResult {
        let space = self.active_space.borrow().clone();

        let mut visible: Vec<Rc<dyn Room>> = self
            .rooms
            .borrow()
            .iter()
            .filter(|room| space.as_ref().is_none_or(|s| room.in_space(s)))
            .cloned()
            .collect();

        if let Some(keys) = filter_keys {
            let mut filters: Vec<Box<dyn Filter>> = Vec::with_capacity(keys.len());
            for key in keys {
                if filters.iter().any(|f| f.key() == *key) {
                    continue;
                }
                filters.push(filter_for(*key, Arc::clone(&self.notifications)));
            }
            visible.retain(|room| filters.iter().all(|f| f.matches(room.as_ref())));
        }

        let rooms = self.sorter.borrow().sort(&visible);
        trace!(
            total = self.rooms.borrow().len(),
            visible = rooms.len(),
            filters = ?filter_keys,
            "room list query"
        );

        RoomsResult {
            rooms,
            space_id: space,
            filter_keys: filter_keys.map(<[FilterKey]>::to_vec),
        }
    }
}

impl fmt::Debug for RoomListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomListStore")
            .field("rooms", &self.rooms.borrow().len())
            .field("active_space", &self.active_space.borrow())
            .field("sorting", &self.sorting())
            .field("loading", &self.loading.get())
            .finish()
    }
}
