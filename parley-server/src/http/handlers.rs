use crate::http::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use bytes::Bytes;
use parley_core::{ClientId, LeaveOutcome, RoomId};
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, info};

/// Registers a freshly generated client in the room and returns the
/// buffered messages owed to it.
pub async fn join_handler(
    Path(room_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let room_id = RoomId::from(room_id);
    let client_id = ClientId::generate();
    let is_loopback = params.get("debug").is_some_and(|v| v == "loopback");
    let host = host_origin(&headers);

    match state
        .coordinator
        .join(&host, &room_id, &client_id, is_loopback)
        .await
    {
        Ok(outcome) if outcome.is_full => {
            info!("room {room_id} is full");
            (StatusCode::OK, Json(json!({ "result": "FULL", "params": {} })))
        }
        Ok(outcome) if !outcome.success => {
            (StatusCode::OK, Json(json!({ "result": "ERROR", "params": {} })))
        }
        Ok(outcome) => {
            info!("client {client_id} registered in room {room_id}");
            (
                StatusCode::OK,
                Json(json!({
                    "result": "SUCCESS",
                    "params": {
                        "room_id": room_id,
                        "client_id": client_id,
                        "is_initiator": outcome.is_initiator,
                        "messages": outcome.messages,
                    },
                })),
            )
        }
        Err(e) => contention_response(e),
    }
}

/// Buffers a message for a still-absent peer, or forwards it through the
/// relay bridge when the peer is already registered.
pub async fn message_handler(
    Path((room_id, client_id)): Path<(String, String)>,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let room_id = RoomId::from(room_id);
    let client_id = ClientId::from(client_id);
    let host = host_origin(&headers);

    let outcome = match state
        .coordinator
        .post_message(&host, &room_id, &client_id, &body)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return contention_response(e),
    };

    if let Some(err) = outcome.error {
        return (StatusCode::OK, Json(json!({ "result": err.to_string() })));
    }
    if outcome.saved {
        return (StatusCode::OK, Json(json!({ "result": "SUCCESS" })));
    }

    // Peer already registered: the buffering window is closed, deliver live.
    match state.relay.forward(&room_id, &client_id, body).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "result": "SUCCESS" }))),
        Err(e) => {
            error!("failed to relay message for room {room_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "result": "ERROR" })),
            )
        }
    }
}

/// Removes a client from its room, deleting the room when it empties.
pub async fn leave_handler(
    Path((room_id, client_id)): Path<(String, String)>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let room_id = RoomId::from(room_id);
    let client_id = ClientId::from(client_id);
    let host = host_origin(&headers);

    match state.coordinator.leave(&host, &room_id, &client_id).await {
        Ok(LeaveOutcome::Removed { remaining_state }) => {
            match remaining_state {
                Some(room_state) => info!("room {room_id} has state {room_state}"),
                None => info!("room {room_id} deleted"),
            }
            StatusCode::OK.into_response()
        }
        Ok(LeaveOutcome::UnknownRoom | LeaveOutcome::UnknownClient) => {
            StatusCode::OK.into_response()
        }
        Err(e) => contention_response(e).into_response(),
    }
}

fn host_origin(headers: &HeaderMap) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

fn contention_response(e: crate::coordinator::Contention) -> (StatusCode, Json<serde_json::Value>) {
    error!("operation abandoned: {e}");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "result": "ERROR" })),
    )
}
