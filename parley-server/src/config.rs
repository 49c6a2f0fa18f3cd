use std::net::SocketAddr;
use std::num::NonZeroU32;

/// Server configuration. The relay default points at the public AppRTC
/// message sink.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the relay bridge POST sink.
    pub relay_base_url: String,
    /// Optional cap on compare-and-swap retries; `None` retries unboundedly.
    pub max_cas_attempts: Option<NonZeroU32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            relay_base_url: "https://apprtc-ws.webrtc.org:8089".to_string(),
            max_cas_attempts: None,
        }
    }
}
