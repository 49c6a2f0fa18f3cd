mod http_relay;
mod relay_bridge;

pub use http_relay::*;
pub use relay_bridge::*;
