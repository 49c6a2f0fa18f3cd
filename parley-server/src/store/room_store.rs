use async_trait::async_trait;
use parley_core::{Room, RoomId};
use std::fmt;

/// Store key for a room: requests for the same room id on different host
/// origins coordinate independently.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct RoomKey {
    pub host: String,
    pub room_id: RoomId,
}

impl RoomKey {
    pub fn new(host: impl Into<String>, room_id: impl Into<RoomId>) -> Self {
        Self {
            host: host.into(),
            room_id: room_id.into(),
        }
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host, self.room_id)
    }
}

/// Opaque version token for optimistic concurrency. `Version::NONE` is the
/// version of an absent entry.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Version(pub(crate) u64);

impl Version {
    pub const NONE: Version = Version(0);

    pub fn is_none(&self) -> bool {
        *self == Version::NONE
    }
}

/// The sole mutation primitive over shared room state. Every higher-level
/// operation is a fetch/compute/swap retry loop over this contract.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Current room (if any) together with its version token.
    async fn get(&self, key: &RoomKey) -> (Option<Room>, Version);

    /// Commit `room` (or delete, for `None`) only if the stored version
    /// still equals `expected`. Returns false and changes nothing on a
    /// version conflict.
    async fn swap(&self, key: &RoomKey, expected: Version, room: Option<Room>) -> bool;
}
