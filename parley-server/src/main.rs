use anyhow::Result;
use clap::Parser;
use parley_server::{
    AppState, Coordinator, HttpRelayBridge, MemoryRoomStore, ServerConfig, build_router,
};
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parley-server")]
#[command(about = "Two-party WebRTC signaling room coordinator")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "PARLEY_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Base URL of the relay bridge POST sink.
    #[arg(
        long,
        env = "PARLEY_RELAY_URL",
        default_value = "https://apprtc-ws.webrtc.org:8089"
    )]
    relay_url: String,

    /// Cap on compare-and-swap retries per operation (unbounded if unset).
    #[arg(long, env = "PARLEY_MAX_CAS_ATTEMPTS")]
    max_cas_attempts: Option<NonZeroU32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = ServerConfig {
        bind_addr: args.bind,
        relay_base_url: args.relay_url,
        max_cas_attempts: args.max_cas_attempts,
    };

    let store = Arc::new(MemoryRoomStore::new());
    let mut coordinator = Coordinator::new(store);
    if let Some(cap) = config.max_cas_attempts {
        coordinator = coordinator.with_retry_cap(cap);
    }

    let relay = Arc::new(HttpRelayBridge::new(config.relay_base_url.clone()));
    let app = build_router(AppState::new(Arc::new(coordinator), relay));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
