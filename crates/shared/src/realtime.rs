//! Wire protocol for the backend's realtime change feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Topic carrying row changes for one user's notifications.
pub fn notifications_topic(user_id: &Uuid) -> String {
    format!("notifications:user={user_id}")
}

/// Envelope wrapping every message in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeEnvelope<T> {
    pub id: String,
    #[serde(flatten)]
    pub payload: T,
    pub ts: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ClientMessage {
    Join { topic: String },
    Leave { topic: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ServerMessage {
    JoinAck { topic: String },
    Change { topic: String, change: RowChange },
    Error { code: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// A single row-level change. `record` carries the new row for inserts and
/// updates; `old_record` carries at least the primary key for deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowChange {
    pub table: String,
    pub kind: ChangeKind,
    #[serde(default)]
    pub record: Option<serde_json::Value>,
    #[serde(default)]
    pub old_record: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_message_round_trips() {
        let envelope = RealtimeEnvelope {
            id: "m1".to_string(),
            payload: ServerMessage::Change {
                topic: "notifications:user=abc".to_string(),
                change: RowChange {
                    table: "notifications".to_string(),
                    kind: ChangeKind::Insert,
                    record: Some(serde_json::json!({"id": "x"})),
                    old_record: None,
                },
            },
            ts: Utc::now(),
        };
        let json = serde_json::to_string(&envelope).unwrap();
        let back: RealtimeEnvelope<ServerMessage> = serde_json::from_str(&json).unwrap();
        match back.payload {
            ServerMessage::Change { change, .. } => {
                assert_eq!(change.kind, ChangeKind::Insert);
                assert_eq!(change.table, "notifications");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn join_serializes_with_type_tag() {
        let envelope = RealtimeEnvelope {
            id: "m2".to_string(),
            payload: ClientMessage::Join {
                topic: "notifications:user=abc".to_string(),
            },
            ts: Utc::now(),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["type"], "join");
        assert_eq!(value["data"]["topic"], "notifications:user=abc");
    }
}
