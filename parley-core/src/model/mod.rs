mod client;
mod ids;
mod outcome;
mod room;

pub use client::Client;
pub use ids::{ClientId, RoomId};
pub use outcome::{JoinOutcome, LeaveOutcome, PostError, PostOutcome};
pub use room::Room;
