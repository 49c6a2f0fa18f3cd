use parley_core::{ClientId, RoomId};
use std::sync::Arc;

use crate::integration::{HOST, create_test_coordinator, init_tracing};

/// However many joins race on one room, exactly two succeed and exactly one
/// of those is the initiator; everyone else observes a full room.
#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_joins_admit_exactly_two() {
    init_tracing();

    let (coordinator, _store) = create_test_coordinator();
    let coordinator = Arc::new(coordinator);
    let room_id = RoomId::from("contended");

    let mut handles = Vec::new();
    for i in 0..16 {
        let coordinator = coordinator.clone();
        let room_id = room_id.clone();
        handles.push(tokio::spawn(async move {
            let client_id = ClientId::from(format!("client-{i}"));
            coordinator
                .join(HOST, &room_id, &client_id, false)
                .await
                .unwrap()
        }));
    }

    let mut successes = 0;
    let mut initiators = 0;
    let mut fulls = 0;
    for handle in handles {
        let outcome = handle.await.unwrap();
        if outcome.success {
            successes += 1;
            if outcome.is_initiator {
                initiators += 1;
            }
        } else {
            assert!(outcome.is_full);
            fulls += 1;
        }
    }

    assert_eq!(successes, 2);
    assert_eq!(initiators, 1);
    assert_eq!(fulls, 14);
}
