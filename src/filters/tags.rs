//! Filters keyed on user-applied room tags.

use super::{Filter, FilterKey};
use crate::room::{Room, TagId};

/// Matches rooms the user tagged as favourite.
#[derive(Debug, Default)]
pub struct FavouriteFilter;

impl Filter for FavouriteFilter {
    fn key(&self) -> FilterKey {
        FilterKey::Favourite
    }

    fn matches(&self, room: &dyn Room) -> bool {
        room.has_tag(TagId::Favourite)
    }
}

/// Matches rooms the user tagged as low priority.
#[derive(Debug, Default)]
pub struct LowPriorityFilter;

impl Filter for LowPriorityFilter {
    fn key(&self) -> FilterKey {
        FilterKey::LowPriority
    }

    fn matches(&self, room: &dyn Room) -> bool {
        room.has_tag(TagId::LowPriority)
    }
}
