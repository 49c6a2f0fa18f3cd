use serde::{Deserialize, Serialize};

/// One participant's membership record within a room. Holds the messages
/// posted while this client waited alone for its peer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub is_initiator: bool,
    messages: Vec<String>,
}

impl Client {
    pub fn new(is_initiator: bool) -> Self {
        Self {
            is_initiator,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, msg: String) {
        self.messages.push(msg);
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Hand the buffer off to the joining peer. The buffer only fires once.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// Called when the other client leaves: this client becomes the
    /// initiator of a fresh negotiation cycle, so stale messages are dropped.
    pub fn on_peer_leave(&mut self) {
        self.is_initiator = true;
        self.messages.clear();
    }
}
