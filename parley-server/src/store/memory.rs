use crate::store::{RoomKey, RoomStore, Version};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parley_core::Room;
use std::sync::atomic::{AtomicU64, Ordering};

struct Versioned {
    room: Room,
    version: Version,
}

/// In-process room store. Versions come from a store-wide counter, so a
/// version is never reused after its entry is deleted and the key recreated;
/// a swap against a stale token always fails.
#[derive(Default)]
pub struct MemoryRoomStore {
    entries: DashMap<RoomKey, Versioned>,
    next_version: AtomicU64,
}

impl MemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_version(&self) -> Version {
        // 0 is reserved for Version::NONE.
        Version(self.next_version.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[async_trait]
impl RoomStore for MemoryRoomStore {
    async fn get(&self, key: &RoomKey) -> (Option<Room>, Version) {
        match self.entries.get(key) {
            Some(entry) => (Some(entry.room.clone()), entry.version),
            None => (None, Version::NONE),
        }
    }

    async fn swap(&self, key: &RoomKey, expected: Version, room: Option<Room>) -> bool {
        // The entry guard holds the shard lock, making check-then-commit
        // atomic with respect to other swaps on the same key.
        match self.entries.entry(key.clone()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().version != expected {
                    return false;
                }
                match room {
                    Some(room) => {
                        occupied.insert(Versioned {
                            room,
                            version: self.allocate_version(),
                        });
                    }
                    None => {
                        occupied.remove();
                    }
                }
                true
            }
            Entry::Vacant(vacant) => {
                if !expected.is_none() {
                    return false;
                }
                if let Some(room) = room {
                    vacant.insert(Versioned {
                        room,
                        version: self.allocate_version(),
                    });
                }
                true
            }
        }
    }
}
