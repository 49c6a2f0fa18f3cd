use parley_core::{ClientId, RoomId};
use parley_server::{RoomKey, RoomStore};

use crate::integration::{HOST, create_test_coordinator, init_tracing};

#[tokio::test]
async fn test_third_join_returns_full_and_mutates_nothing() {
    init_tracing();

    let (coordinator, store) = create_test_coordinator();
    let room_id = RoomId::from("r1");

    coordinator
        .join(HOST, &room_id, &ClientId::from("aaa"), false)
        .await
        .unwrap();
    coordinator
        .join(HOST, &room_id, &ClientId::from("bbb"), false)
        .await
        .unwrap();

    let key = RoomKey::new(HOST, room_id.clone());
    let (_, version_before) = store.get(&key).await;

    let outcome = coordinator
        .join(HOST, &room_id, &ClientId::from("ccc"), false)
        .await
        .unwrap();

    assert!(!outcome.success);
    assert!(outcome.is_full);

    // No swap happened: the version is untouched.
    let (room, version_after) = store.get(&key).await;
    assert_eq!(version_before, version_after);
    assert_eq!(room.unwrap().occupancy(), 2);
}
