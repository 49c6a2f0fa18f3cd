mod config;
pub mod coordinator;
pub mod http;
pub mod relay;
pub mod store;

pub use config::ServerConfig;
pub use coordinator::{Contention, Coordinator};
pub use http::{AppState, build_router};
pub use relay::{HttpRelayBridge, RelayBridge, RelayError};
pub use store::{MemoryRoomStore, RoomKey, RoomStore, Version};
