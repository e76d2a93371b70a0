//! Room data model.
//!
//! The engine never owns rooms; the protocol SDK does. [`Room`] is the
//! read-only view the engine needs: identity, display name, own-membership,
//! tags, and activity. Accessors return `Option` where the SDK may not have
//! state yet - filters treat missing state as non-matching instead of
//! failing (partial rooms show up routinely mid-sync).

use std::fmt;

/// Opaque room identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    /// Wrap an SDK-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque space identifier (a grouping of rooms).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpaceId(String);

impl SpaceId {
    /// Wrap an SDK-supplied space identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Own-membership state in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Joined the room.
    Join,
    /// Invited but not yet joined.
    Invite,
    /// Knocked, awaiting approval.
    Knock,
    /// Left or never joined.
    Leave,
    /// Banned from the room.
    Ban,
}

/// Room tags the engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagId {
    /// Marked as a favourite by the user.
    Favourite,
    /// Marked as low priority by the user.
    LowPriority,
    /// Archived (left but retained).
    Archived,
}

/// Read-only view of a chat room supplied by the protocol SDK.
///
/// Implementations adapt whatever room object the SDK exposes. The engine
/// only reads; it never mutates a room through this trait.
pub trait Room {
    /// The room's identifier.
    fn id(&self) -> &RoomId;

    /// Display name, if one has been computed yet.
    fn name(&self) -> Option<&str>;

    /// The user's own membership, if known.
    fn membership(&self) -> Option<Membership>;

    /// Whether the user applied `tag` to this room.
    fn has_tag(&self, tag: TagId) -> bool;

    /// Whether this is a direct-message room.
    fn is_dm(&self) -> bool;

    /// Timestamp of the latest activity in the room, in milliseconds.
    fn last_activity_ts(&self) -> i64;

    /// Whether the room belongs to `space`.
    ///
    /// The default keeps rooms visible in every space, which is the right
    /// behavior for SDKs without a space concept.
    fn in_space(&self, space: &SpaceId) -> bool {
        let _ = space;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_id_roundtrip() {
        let id = RoomId::new("!abc:example.org");
        assert_eq!(id.as_str(), "!abc:example.org");
        assert_eq!(id.to_string(), "!abc:example.org");
        assert_eq!(RoomId::from("!abc:example.org"), id);
    }
}
