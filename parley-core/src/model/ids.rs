use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved id for the synthetic second participant of a loopback session.
/// Never produced by `ClientId::generate` and never addressable from outside.
const LOOPBACK_CLIENT_ID: &str = "LOOPBACK_CLIENT_ID";

const GENERATED_ID_LEN: usize = 8;

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn generate() -> Self {
        Self(random_digits(GENERATED_ID_LEN))
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClientId(pub String);

impl ClientId {
    /// Fresh random id for a joining client. Uniqueness is probabilistic,
    /// not enforced; the coordinator treats a collision as a join failure.
    pub fn generate() -> Self {
        Self(random_digits(GENERATED_ID_LEN))
    }

    pub fn loopback() -> Self {
        Self(LOOPBACK_CLIENT_ID.to_string())
    }

    pub fn is_loopback(&self) -> bool {
        self.0 == LOOPBACK_CLIENT_ID
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn random_digits(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range('0'..='9')).collect()
}
