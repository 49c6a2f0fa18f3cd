use async_trait::async_trait;
use bytes::Bytes;
use parley_core::{ClientId, RoomId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay transport error: {0}")]
    Transport(String),

    #[error("relay rejected message with status {0}")]
    Status(u16),
}

/// Live-delivery side channel for messages posted after both participants
/// are present and the one-shot join-time buffer handoff has already fired.
///
/// Fire-and-forget from the coordinator's perspective: the caller invokes it
/// only after the store evaluation committed, and a failure is reported
/// upward rather than retried here.
#[async_trait]
pub trait RelayBridge: Send + Sync {
    async fn forward(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
        payload: Bytes,
    ) -> Result<(), RelayError>;
}
