use crate::relay::{RelayBridge, RelayError};
use async_trait::async_trait;
use bytes::Bytes;
use parley_core::{ClientId, RoomId};
use tracing::info;

/// Relay bridge over a POST-style message sink: the payload goes to
/// `{base_url}/{room_id}/{client_id}` and any non-success status is a
/// delivery failure.
pub struct HttpRelayBridge {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRelayBridge {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RelayBridge for HttpRelayBridge {
    async fn forward(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
        payload: Bytes,
    ) -> Result<(), RelayError> {
        info!("forwarding message to relay for room {room_id} client {client_id}");

        let url = format!("{}/{room_id}/{client_id}", self.base_url);
        let response = self
            .client
            .post(url)
            .body(payload)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status.as_u16()));
        }
        Ok(())
    }
}
