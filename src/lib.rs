//! # lobby
//!
//! Room-list engine for Matrix-style chat clients.
//!
//! The protocol SDK owns rooms, sync, and crypto; a rendering layer owns
//! pixels. `lobby` is the piece in between: it filters and orders the room
//! collection for named views and pushes immutable state snapshots to the
//! renderer.
//!
//! ## Features
//!
//! - Closed sets of [`filters`] (invites, unread, people, favourites, ...)
//!   and [`sorters`] (recency with mute/low-priority buckets, alphabetic)
//! - [`store::RoomListStore`]: space scope → filters → sorter over
//!   SDK-supplied room handles, with synchronous update events
//! - [`viewmodel::RoomListViewModel`]: snapshot-based view state with
//!   sticky active-room positioning and keyboard navigation
//! - Injected [`notifications::NotificationProvider`] so ordering logic
//!   stays free of global stores
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use std::sync::Arc;
//!
//! use lobby::{
//!     Config, FilterKey, Membership, NotificationStateStore, Room, RoomId, RoomListStore, TagId,
//! };
//!
//! // Adapt whatever room object the SDK exposes.
//! struct SdkRoom {
//!     id: RoomId,
//!     name: String,
//!     invited: bool,
//! }
//!
//! impl Room for SdkRoom {
//!     fn id(&self) -> &RoomId {
//!         &self.id
//!     }
//!     fn name(&self) -> Option<&str> {
//!         Some(&self.name)
//!     }
//!     fn membership(&self) -> Option<Membership> {
//!         Some(if self.invited { Membership::Invite } else { Membership::Join })
//!     }
//!     fn has_tag(&self, _tag: TagId) -> bool {
//!         false
//!     }
//!     fn is_dm(&self) -> bool {
//!         false
//!     }
//!     fn last_activity_ts(&self) -> i64 {
//!         0
//!     }
//! }
//!
//! let notifications = Arc::new(NotificationStateStore::new());
//! let store = RoomListStore::new(Config::default(), notifications);
//!
//! let rooms: Vec<Rc<dyn Room>> = vec![
//!     Rc::new(SdkRoom { id: RoomId::new("!orange"), name: "Orange".into(), invited: false }),
//!     Rc::new(SdkRoom { id: RoomId::new("!apple"), name: "Apple".into(), invited: true }),
//! ];
//! store.set_rooms(rooms);
//!
//! let invites = store.sorted_rooms(Some(&[FilterKey::Invites]));
//! assert_eq!(invites.rooms.len(), 1);
//! assert_eq!(invites.rooms[0].id().as_str(), "!apple");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod filters;
pub mod notifications;
pub mod room;
pub mod sorters;
pub mod store;
pub mod viewmodel;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::config::{Config, ConfigError, SortingConfig};
pub use self::error::Error;
pub use self::filters::{Filter, FilterKey, filter_for};
pub use self::notifications::{
    NotificationLevel, NotificationProvider, NotificationStateStore, RoomNotificationState,
};
pub use self::room::{Membership, Room, RoomId, SpaceId, TagId};
pub use self::sorters::{
    AlphabeticSorter, RecencySorter, Sorter, SortingAlgorithm, sorter_for,
};
pub use self::store::{RoomListEvent, RoomListStore, RoomsResult};
pub use self::viewmodel::{RoomListViewModel, RoomListViewState, RoomListViewStatePatch};
