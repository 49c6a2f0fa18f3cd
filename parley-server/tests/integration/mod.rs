
use std::sync::Arc;
use tracing::Level;

use parley_server::{Coordinator, MemoryRoomStore};

pub const HOST: &str = "https://apprtc.example.org";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_coordinator() -> (Coordinator, Arc<MemoryRoomStore>) {
    let store = Arc::new(MemoryRoomStore::new());
    (Coordinator::new(store.clone()), store)
}
