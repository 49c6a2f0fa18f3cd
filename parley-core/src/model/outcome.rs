use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a join attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinOutcome {
    pub success: bool,
    pub is_initiator: bool,
    /// Messages the earlier occupant buffered for this client. Only ever
    /// non-empty for the second joiner.
    pub messages: Vec<String>,
    pub is_full: bool,
    /// Descriptive room state after the join, for logging.
    pub room_state: String,
}

impl JoinOutcome {
    pub fn full() -> Self {
        Self {
            success: false,
            is_initiator: false,
            messages: Vec::new(),
            is_full: true,
            room_state: String::new(),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            is_initiator: false,
            messages: Vec::new(),
            is_full: false,
            room_state: String::new(),
        }
    }
}

/// Result of a leave attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveOutcome {
    /// The client was removed. `remaining_state` describes the room left
    /// behind, or is `None` when the room was deleted with it.
    Removed { remaining_state: Option<String> },
    UnknownRoom,
    UnknownClient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostError {
    UnknownRoom,
    UnknownClient,
    EncodeError,
}

impl fmt::Display for PostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            PostError::UnknownRoom => "UNKNOWN_ROOM",
            PostError::UnknownClient => "UNKNOWN_CLIENT",
            PostError::EncodeError => "ENCODE_ERROR",
        };
        write!(f, "{code}")
    }
}

/// Result of a post-message attempt. `saved == false` with no error means
/// the peer is already present and the caller must deliver through the
/// relay bridge instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOutcome {
    pub error: Option<PostError>,
    pub saved: bool,
}

impl PostOutcome {
    pub fn saved() -> Self {
        Self {
            error: None,
            saved: true,
        }
    }

    pub fn must_relay() -> Self {
        Self {
            error: None,
            saved: false,
        }
    }

    pub fn error(error: PostError) -> Self {
        Self {
            error: Some(error),
            saved: false,
        }
    }
}
