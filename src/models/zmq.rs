//! Payloads published on the ZeroMQ sockets.

use serde::{Deserialize, Serialize};

/// Outbound email handed to the mailer worker.
#[derive(Debug, Deserialize, Serialize)]
pub struct ZmqEmailMessage {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Created,
    Updated,
    Deleted,
}

impl std::fmt::Display for ChangeOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeOp::Created => write!(f, "created"),
            ChangeOp::Updated => write!(f, "updated"),
            ChangeOp::Deleted => write!(f, "deleted"),
        }
    }
}

/// Row-change notification published after every successful admin mutation.
#[derive(Debug, Deserialize, Serialize)]
pub struct ZmqChangeEvent {
    pub entity: String,
    pub entity_id: i32,
    pub op: ChangeOp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_event_round_trips() {
        let event = ZmqChangeEvent {
            entity: "projects".to_string(),
            entity_id: 7,
            op: ChangeOp::Updated,
        };
        let bytes = serde_json::to_vec(&event).unwrap();
        let parsed: ZmqChangeEvent = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.entity, "projects");
        assert_eq!(parsed.entity_id, 7);
        assert_eq!(parsed.op, ChangeOp::Updated);
    }
}
