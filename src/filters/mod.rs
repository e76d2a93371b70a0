//! Room filters: predicates selecting rooms for a named view.
//!
//! Each filter is a pure predicate keyed by a [`FilterKey`] from a closed
//! set. `matches` is total over well-formed rooms and returns `false` for
//! rooms with missing state; a filter never fails mid-render.

mod membership;
mod tags;
mod unread;

pub use membership::{InvitesFilter, PeopleFilter, RoomsFilter};
pub use tags::{FavouriteFilter, LowPriorityFilter};
pub use unread::{MentionsFilter, UnreadFilter};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;
use crate::notifications::NotificationProvider;
use crate::room::Room;

/// Identity of a filter. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// Rooms tagged favourite.
    Favourite,
    /// Rooms with unread activity.
    Unread,
    /// Direct-message rooms.
    People,
    /// Non-DM joined rooms.
    Rooms,
    /// Rooms tagged low priority.
    LowPriority,
    /// Rooms with a pending mention.
    Mentions,
    /// Pending invites.
    Invites,
}

impl FilterKey {
    /// Every known filter key, in presentation order.
    pub const ALL: [FilterKey; 7] = [
        FilterKey::Unread,
        FilterKey::People,
        FilterKey::Rooms,
        FilterKey::Favourite,
        FilterKey::Mentions,
        FilterKey::Invites,
        FilterKey::LowPriority,
    ];

    /// Stable string form, used in config files and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Favourite => "favourite",
            FilterKey::Unread => "unread",
            FilterKey::People => "people",
            FilterKey::Rooms => "rooms",
            FilterKey::LowPriority => "low_priority",
            FilterKey::Mentions => "mentions",
            FilterKey::Invites => "invites",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favourite" => Ok(FilterKey::Favourite),
            "unread" => Ok(FilterKey::Unread),
            "people" => Ok(FilterKey::People),
            "rooms" => Ok(FilterKey::Rooms),
            "low_priority" => Ok(FilterKey::LowPriority),
            "mentions" => Ok(FilterKey::Mentions),
            "invites" => Ok(FilterKey::Invites),
            other => Err(Error::UnknownFilterKey(other.to_string())),
        }
    }
}

/// A predicate deciding whether a room belongs in a logical view.
pub trait Filter {
    /// The key identifying this filter.
    fn key(&self) -> FilterKey;

    /// Whether `room` belongs in the view.
    ///
    /// Total: never fails. Rooms with missing state do not match.
    fn matches(&self, room: &dyn Room) -> bool;
}

/// Construct the filter behind `key`.
///
/// Notification-backed filters (unread, mentions) share the injected
/// provider; the rest are stateless.
pub fn filter_for(key: FilterKey, notifications: Arc<dyn NotificationProvider>) -> Box<dyn Filter> {
    match key {
        FilterKey::Favourite => Box::new(FavouriteFilter),
        FilterKey::LowPriority => Box::new(LowPriorityFilter),
        FilterKey::People => Box::new(PeopleFilter),
        FilterKey::Rooms => Box::new(RoomsFilter),
        FilterKey::Invites => Box::new(InvitesFilter),
        FilterKey::Unread => Box::new(UnreadFilter::new(notifications)),
        FilterKey::Mentions => Box::new(MentionsFilter::new(notifications)),
    }
}
