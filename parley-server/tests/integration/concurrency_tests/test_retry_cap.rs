use parley_core::{ClientId, LeaveOutcome, RoomId};
use parley_server::Coordinator;
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::integration::{HOST, init_tracing};
use crate::utils::ConflictedStore;

/// With a configured cap, sustained version conflicts surface as a
/// `Contention` error instead of spinning forever. Definitive answers are
/// still reached on the first attempt and never charged against the cap.
#[tokio::test]
async fn test_retry_cap_surfaces_contention() {
    init_tracing();

    let coordinator = Coordinator::new(Arc::new(ConflictedStore))
        .with_retry_cap(NonZeroU32::new(3).unwrap());
    let room_id = RoomId::from("hot");

    let err = coordinator
        .post_message(HOST, &room_id, &ClientId::from("occupant"), b"offer")
        .await
        .unwrap_err();
    assert_eq!(err.attempts, 3);

    // A definitive rejection resolves within the first attempt even under
    // permanent contention: the fetched state already settles it.
    let outcome = coordinator
        .leave(HOST, &room_id, &ClientId::from("stranger"))
        .await
        .unwrap();
    assert_eq!(outcome, LeaveOutcome::UnknownClient);
}
