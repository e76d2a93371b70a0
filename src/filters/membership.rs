//! Filters keyed on own-membership.

use super::{Filter, FilterKey};
use crate::room::{Membership, Room};

/// Matches rooms the user has been invited to but not yet joined.
#[derive(Debug, Default)]
pub struct InvitesFilter;

impl Filter for InvitesFilter {
    fn key(&self) -> FilterKey {
        FilterKey::Invites
    }

    fn matches(&self, room: &dyn Room) -> bool {
        room.membership() == Some(Membership::Invite)
    }
}

/// Matches joined direct-message rooms.
#[derive(Debug, Default)]
pub struct PeopleFilter;

impl Filter for PeopleFilter {
    fn key(&self) -> FilterKey {
        FilterKey::People
    }

    fn matches(&self, room: &dyn Room) -> bool {
        room.membership() == Some(Membership::Join) && room.is_dm()
    }
}

/// Matches joined rooms that are not direct messages.
#[derive(Debug, Default)]
pub struct RoomsFilter;

impl Filter for RoomsFilter {
    fn key(&self) -> FilterKey {
        FilterKey::Rooms
    }

    fn matches(&self, room: &dyn Room) -> bool {
        room.membership() == Some(Membership::Join) && !room.is_dm()
    }
}
