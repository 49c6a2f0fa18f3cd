use parley_core::{ClientId, LeaveOutcome, RoomId};
use parley_server::{RoomKey, RoomStore};

use crate::integration::{HOST, create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_last_leave_deletes_room_and_rejoin_is_fresh() {
    init_tracing();

    let (coordinator, store) = create_test_coordinator();
    let room_id = RoomId::from("r1");
    let client_a = ClientId::from("aaa");

    coordinator
        .join(HOST, &room_id, &client_a, false)
        .await
        .unwrap();
    coordinator
        .post_message(HOST, &room_id, &client_a, b"offer-sdp")
        .await
        .unwrap();

    let outcome = coordinator
        .leave(HOST, &room_id, &client_a)
        .await
        .unwrap();
    assert_eq!(
        outcome,
        LeaveOutcome::Removed {
            remaining_state: None
        }
    );

    let key = RoomKey::new(HOST, room_id.clone());
    let (room, _) = store.get(&key).await;
    assert!(room.is_none());

    // A later join behaves like a first join to an empty room: fresh
    // initiator, no leftover buffer.
    let rejoin = coordinator
        .join(HOST, &room_id, &ClientId::from("bbb"), false)
        .await
        .unwrap();
    assert!(rejoin.success);
    assert!(rejoin.is_initiator);
    assert!(rejoin.messages.is_empty());
}

#[tokio::test]
async fn test_same_room_id_on_other_host_is_independent() {
    init_tracing();

    let (coordinator, _store) = create_test_coordinator();
    let room_id = RoomId::from("r1");

    coordinator
        .join(HOST, &room_id, &ClientId::from("aaa"), false)
        .await
        .unwrap();
    let outcome = coordinator
        .join("https://other.example.org", &room_id, &ClientId::from("bbb"), false)
        .await
        .unwrap();

    // Different host origin, different room: this joiner starts its own.
    assert!(outcome.is_initiator);
}
