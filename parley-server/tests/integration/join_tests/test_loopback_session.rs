use parley_core::{ClientId, RoomId};
use parley_server::{RoomKey, RoomStore};

use crate::integration::{HOST, create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_loopback_join_fills_the_room() {
    init_tracing();

    let (coordinator, _store) = create_test_coordinator();
    let room_id = RoomId::from("r1");
    let client_a = ClientId::from("aaa");

    let outcome = coordinator
        .join(HOST, &room_id, &client_a, true)
        .await
        .unwrap();
    assert!(outcome.success);
    assert!(outcome.is_initiator);

    // The synthetic peer occupies the second slot.
    let rejected = coordinator
        .join(HOST, &room_id, &ClientId::from("bbb"), false)
        .await
        .unwrap();
    assert!(rejected.is_full);

    // Loopback sessions are never buffered: the peer is already "present",
    // so posts take the relay path.
    let post = coordinator
        .post_message(HOST, &room_id, &client_a, b"offer-sdp")
        .await
        .unwrap();
    assert!(!post.saved);
    assert!(post.error.is_none());
}

#[tokio::test]
async fn test_loopback_client_leaves_in_tandem() {
    init_tracing();

    let (coordinator, store) = create_test_coordinator();
    let room_id = RoomId::from("r1");
    let client_a = ClientId::from("aaa");

    coordinator
        .join(HOST, &room_id, &client_a, true)
        .await
        .unwrap();
    coordinator
        .leave(HOST, &room_id, &client_a)
        .await
        .unwrap();

    // Removing the real client takes the loopback client with it, so the
    // room empties and is deleted.
    let key = RoomKey::new(HOST, room_id);
    let (room, _) = store.get(&key).await;
    assert!(room.is_none());
}
