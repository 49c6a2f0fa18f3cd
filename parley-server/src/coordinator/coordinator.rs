use crate::store::{RoomKey, RoomStore};
use parley_core::{Client, ClientId, JoinOutcome, LeaveOutcome, PostError, PostOutcome, Room, RoomId};
use std::num::NonZeroU32;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// A compare-and-swap retry budget ran out before the operation committed.
/// Only reachable when a retry cap is configured; the default is unbounded,
/// matching the rule that version conflicts are transient and invisible.
#[derive(Debug, Error)]
#[error("compare-and-swap budget exhausted after {attempts} attempts")]
pub struct Contention {
    pub attempts: u32,
}

/// Room membership and message-handoff coordinator.
///
/// Every operation is a fetch-version/compute/swap-if-unchanged loop over
/// the [`RoomStore`]; a version conflict means another request interleaved
/// and the whole cycle re-runs against fresh state. Paths where the fetched
/// state already settles the answer (room absent, client absent, room full)
/// return immediately without retrying.
pub struct Coordinator {
    store: Arc<dyn RoomStore>,
    max_cas_attempts: Option<NonZeroU32>,
}

impl Coordinator {
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self {
            store,
            max_cas_attempts: None,
        }
    }

    /// Cap the retry loops. Exhaustion surfaces as [`Contention`] rather
    /// than being folded into any definitive rejection.
    pub fn with_retry_cap(mut self, max_cas_attempts: NonZeroU32) -> Self {
        self.max_cas_attempts = Some(max_cas_attempts);
        self
    }

    /// Add `client_id` to the room, creating the room if needed.
    ///
    /// The first occupant becomes the initiator (plus a synthetic loopback
    /// peer when requested). The second occupant receives everything the
    /// first buffered up to this moment; later messages must go through the
    /// relay bridge.
    pub async fn join(
        &self,
        host: &str,
        room_id: &RoomId,
        client_id: &ClientId,
        is_loopback: bool,
    ) -> Result<JoinOutcome, Contention> {
        let key = RoomKey::new(host, room_id.clone());
        let mut attempts = 0;
        loop {
            self.charge(&mut attempts)?;

            let (room, version) = self.store.get(&key).await;
            let Some(mut room) = room else {
                // Lazy creation. Losing this swap means another writer got
                // there first; either way the refetch sees a room.
                self.store.swap(&key, version, Some(Room::new())).await;
                continue;
            };

            if room.is_full() {
                return Ok(JoinOutcome::full());
            }
            if room.has_client(client_id) {
                warn!("client {client_id} collides with an occupant of room {room_id}");
                return Ok(JoinOutcome::rejected());
            }

            let is_initiator = room.occupancy() == 0;
            let mut messages = Vec::new();
            if is_initiator {
                room.add_client(client_id.clone(), Client::new(true));
                if is_loopback {
                    room.add_client(ClientId::loopback(), Client::new(false));
                }
            } else {
                // The waiting occupant's buffer is handed off exactly once,
                // here. Anything it posts from now on must be relayed.
                if let Some(other) = room.other_client_mut(client_id) {
                    messages = other.take_messages();
                }
                room.add_client(client_id.clone(), Client::new(false));
            }

            let room_state = room.state();
            if self.store.swap(&key, version, Some(room)).await {
                info!("added client {client_id} in room {room_id}, state {room_state}");
                return Ok(JoinOutcome {
                    success: true,
                    is_initiator,
                    messages,
                    is_full: false,
                    room_state,
                });
            }
        }
    }

    /// Remove `client_id` from the room. A loopback peer leaves in tandem.
    /// A remaining occupant is promoted to initiator with a cleared buffer;
    /// an emptied room is deleted from the store.
    pub async fn leave(
        &self,
        host: &str,
        room_id: &RoomId,
        client_id: &ClientId,
    ) -> Result<LeaveOutcome, Contention> {
        let key = RoomKey::new(host, room_id.clone());
        let mut attempts = 0;
        loop {
            self.charge(&mut attempts)?;

            let (room, version) = self.store.get(&key).await;
            let Some(mut room) = room else {
                warn!("unknown room: {room_id}");
                return Ok(LeaveOutcome::UnknownRoom);
            };
            if !room.has_client(client_id) {
                warn!("unknown client {client_id} for room {room_id}");
                return Ok(LeaveOutcome::UnknownClient);
            }

            room.remove_client(client_id);
            room.remove_client(&ClientId::loopback());
            let new_room = if room.occupancy() > 0 {
                if let Some(remaining) = room.other_client_mut(client_id) {
                    remaining.on_peer_leave();
                }
                Some(room)
            } else {
                None
            };

            let remaining_state = new_room.as_ref().map(Room::state);
            if self.store.swap(&key, version, new_room).await {
                info!("removed client {client_id} from room {room_id}");
                return Ok(LeaveOutcome::Removed { remaining_state });
            }
        }
    }

    /// Buffer `payload` for later handoff while `client_id` waits alone in
    /// the room. Once the peer is present the outcome says `saved: false`
    /// and the caller must forward through the relay bridge instead.
    pub async fn post_message(
        &self,
        host: &str,
        room_id: &RoomId,
        client_id: &ClientId,
        payload: &[u8],
    ) -> Result<PostOutcome, Contention> {
        let key = RoomKey::new(host, room_id.clone());
        let mut attempts = 0;
        loop {
            self.charge(&mut attempts)?;

            let (room, version) = self.store.get(&key).await;
            let Some(mut room) = room else {
                warn!("unknown room: {room_id}");
                return Ok(PostOutcome::error(PostError::UnknownRoom));
            };
            if !room.has_client(client_id) {
                warn!("unknown client: {client_id}");
                return Ok(PostOutcome::error(PostError::UnknownClient));
            }

            // Strict encoding check; a malformed payload is never stored or
            // relayed, whatever the occupancy.
            let Ok(text) = std::str::from_utf8(payload) else {
                return Ok(PostOutcome::error(PostError::EncodeError));
            };

            if room.occupancy() > 1 {
                return Ok(PostOutcome::must_relay());
            }

            if let Some(client) = room.client_mut(client_id) {
                client.add_message(text.to_string());
            }
            if self.store.swap(&key, version, Some(room)).await {
                info!("saved message from client {client_id} for room {room_id}");
                return Ok(PostOutcome::saved());
            }
        }
    }

    fn charge(&self, attempts: &mut u32) -> Result<(), Contention> {
        *attempts += 1;
        match self.max_cas_attempts {
            Some(cap) if *attempts > cap.get() => Err(Contention {
                attempts: *attempts - 1,
            }),
            _ => Ok(()),
        }
    }
}
