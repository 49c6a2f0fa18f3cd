use crate::coordinator::Coordinator;
use crate::http::handlers::{join_handler, leave_handler, message_handler};
use crate::relay::RelayBridge;
use axum::Router;
use axum::routing::post;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<Coordinator>,
    pub relay: Arc<dyn RelayBridge>,
}

impl AppState {
    pub fn new(coordinator: Arc<Coordinator>, relay: Arc<dyn RelayBridge>) -> Self {
        Self { coordinator, relay }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/join/{room_id}", post(join_handler))
        .route("/message/{room_id}/{client_id}", post(message_handler))
        .route("/leave/{room_id}/{client_id}", post(leave_handler))
        .with_state(state)
}
