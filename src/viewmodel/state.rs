//! View state handed to the rendering layer.

use lobby_vm::Patch;

use crate::filters::FilterKey;
use crate::room::{RoomId, SpaceId};

/// Immutable snapshot of everything the room-list view renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomListViewState {
    /// Ordered ids of the visible rooms.
    pub room_ids: Vec<RoomId>,
    /// Index of the active room within `room_ids`, if it is visible.
    pub active_room_index: Option<usize>,
    /// The filter currently toggled on, if any.
    pub active_filter: Option<FilterKey>,
    /// The space the list is scoped to.
    pub space_id: Option<SpaceId>,
    /// Whether the initial room load is still pending.
    pub is_loading: bool,
    /// Whether the visible list is empty.
    pub is_empty: bool,
}

/// Shallow patch over [`RoomListViewState`]: `Some` fields overwrite, `None`
/// fields are left alone.
#[derive(Debug, Default)]
pub struct RoomListViewStatePatch {
    /// Replacement for `room_ids`.
    pub room_ids: Option<Vec<RoomId>>,
    /// Replacement for `active_room_index`.
    pub active_room_index: Option<Option<usize>>,
    /// Replacement for `active_filter`.
    pub active_filter: Option<Option<FilterKey>>,
    /// Replacement for `space_id`.
    pub space_id: Option<Option<SpaceId>>,
    /// Replacement for `is_loading`.
    pub is_loading: Option<bool>,
    /// Replacement for `is_empty`.
    pub is_empty: Option<bool>,
}

impl Patch<RoomListViewStatePatch> for RoomListViewState {
    fn apply_patch(&mut self, patch: RoomListViewStatePatch) {
        if let Some(room_ids) = patch.room_ids {
            self.room_ids = room_ids;
        }
        if let Some(active_room_index) = patch.active_room_index {
            self.active_room_index = active_room_index;
        }
        if let Some(active_filter) = patch.active_filter {
            self.active_filter = active_filter;
        }
        if let Some(space_id) = patch.space_id {
            self.space_id = space_id;
        }
        if let Some(is_loading) = patch.is_loading {
            self.is_loading = is_loading;
        }
        if let Some(is_empty) = patch.is_empty {
            self.is_empty = is_empty;
        }
    }
}
