use crate::model::{Client, ClientId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const ROOM_CAPACITY: usize = 2;

/// Coordination unit for one call session: up to two signaling participants
/// (a reserved loopback id may occupy the second slot).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    clients: HashMap<ClientId, Client>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_client(&mut self, client_id: ClientId, client: Client) {
        self.clients.insert(client_id, client);
    }

    pub fn remove_client(&mut self, client_id: &ClientId) -> Option<Client> {
        self.clients.remove(client_id)
    }

    pub fn occupancy(&self) -> usize {
        self.clients.len()
    }

    pub fn is_full(&self) -> bool {
        self.clients.len() >= ROOM_CAPACITY
    }

    pub fn has_client(&self, client_id: &ClientId) -> bool {
        self.clients.contains_key(client_id)
    }

    pub fn client_mut(&mut self, client_id: &ClientId) -> Option<&mut Client> {
        self.clients.get_mut(client_id)
    }

    /// The participant other than `client_id`, if any.
    pub fn other_client_mut(&mut self, client_id: &ClientId) -> Option<&mut Client> {
        self.clients
            .iter_mut()
            .find(|(id, _)| *id != client_id)
            .map(|(_, client)| client)
    }

    /// Descriptive state for logging: the sorted client-id list.
    pub fn state(&self) -> String {
        let mut ids: Vec<&str> = self.clients.keys().map(|id| id.0.as_str()).collect();
        ids.sort_unstable();
        format!("[{}]", ids.join(", "))
    }
}
