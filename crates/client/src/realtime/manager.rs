//! Realtime subscription manager.
//!
//! Owns the single socket to the backend, joins the signed-in user's
//! notification topic once connected, and folds incoming row changes into
//! the notification store.

use std::rc::Rc;

use dioxus::prelude::*;
use monolite_shared::{
    notifications_topic, ChangeKind, Notification, RealtimeEnvelope, RowChange, ServerMessage,
};
use uuid::Uuid;

use super::connection::{ConnectionState, RealtimeConnection, RealtimeHandle};
use crate::auth::AuthContext;
use crate::stores::{NotificationChange, NOTIFICATIONS};

/// Current state of the realtime socket
pub static REALTIME_STATE: GlobalSignal<ConnectionState> =
    Signal::global(|| ConnectionState::Disconnected);

/// Handle for sending on the realtime socket, present once a connection exists
pub static REALTIME_HANDLE: GlobalSignal<Option<RealtimeHandle>> = Signal::global(|| None);

/// Tear down realtime state (used during sign-out)
pub fn clear_connection() {
    *REALTIME_HANDLE.write() = None;
    *REALTIME_STATE.write() = ConnectionState::Disconnected;
}

/// Fold a row change into the notification store. Returns `true` when the
/// cached list changed. Only the `notifications` table is handled; changes
/// for unknown tables are logged and dropped.
pub fn dispatch_change(user_id: Uuid, change: RowChange) -> bool {
    if change.table != "notifications" {
        crate::log_warn!("Ignoring change for unhandled table '{}'", change.table);
        return false;
    }

    let feed_change = match change.kind {
        ChangeKind::Insert | ChangeKind::Update => {
            let Some(record) = change.record else {
                crate::log_error!("Row change without a record payload");
                return false;
            };
            match serde_json::from_value::<Notification>(record) {
                Ok(notification) => {
                    if change.kind == ChangeKind::Insert {
                        NotificationChange::Insert(notification)
                    } else {
                        NotificationChange::Update(notification)
                    }
                }
                Err(e) => {
                    crate::log_error!("Failed to decode notification row: {}", e);
                    return false;
                }
            }
        }
        ChangeKind::Delete => {
            let old = change.old_record.unwrap_or(serde_json::Value::Null);
            match old.get("id").and_then(|v| v.as_str()).map(Uuid::parse_str) {
                Some(Ok(id)) => NotificationChange::Delete(id),
                _ => {
                    crate::log_error!("Delete change without a usable id");
                    return false;
                }
            }
        }
    };

    let is_insert = matches!(feed_change, NotificationChange::Insert(_));
    let applied = {
        let mut store = NOTIFICATIONS.resolve();
        let mut feed = store.write();
        feed.apply(user_id, feed_change)
    };

    if applied && is_insert {
        crate::audio::play_notification();
    }

    applied
}

/// Component that manages the realtime connection lifecycle
#[component]
pub fn RealtimeManager(children: Element) -> Element {
    let auth = use_context::<AuthContext>();

    // Keep the connection alive across renders
    let mut active_connection = use_signal(|| None::<Rc<RealtimeConnection>>);

    // Track the current user to detect session changes
    let mut last_user_id = use_signal(|| None::<Uuid>);

    // Whether the notification topic join has been sent on this connection
    let mut joined = use_signal(|| false);

    // Establish or tear down the connection when the session changes
    use_effect(move || {
        let current_user_id = auth.user_id();

        if *last_user_id.read() != current_user_id {
            crate::log_info!("RealtimeManager: session changed, dropping old connection");
            active_connection.set(None);
            joined.set(false);
            clear_connection();
            last_user_id.set(current_user_id);
        }

        let Some(user_id) = current_user_id else {
            return;
        };

        if active_connection.read().is_some() {
            return;
        }

        crate::log_info!("RealtimeManager: creating connection for user {}", user_id);

        let auth_for_url = auth;
        let url_builder = move || auth_for_url.realtime_url();

        let on_event = move |envelope: RealtimeEnvelope<ServerMessage>| match envelope.payload {
            ServerMessage::JoinAck { topic } => {
                crate::log_info!("Joined topic '{}'", topic);
            }
            ServerMessage::Change { topic: _, change } => {
                dispatch_change(user_id, change);
            }
            ServerMessage::Error { code, message } => {
                crate::log_error!("Realtime server error {}: {}", code, message);
            }
        };

        let connection = RealtimeConnection::new(url_builder, on_event);
        *REALTIME_HANDLE.write() = Some(connection.handle());
        active_connection.set(Some(Rc::new(connection)));
    });

    // Mirror the connection's state into the global signal and join the
    // notification topic once connected
    use_effect(move || {
        let state = {
            let connection = active_connection.read();
            match connection.as_ref() {
                Some(conn) => conn.state.read().clone(),
                None => ConnectionState::Disconnected,
            }
        };

        let was_connected = state.is_connected();
        *REALTIME_STATE.write() = state;

        if !was_connected {
            joined.set(false);
            return;
        }

        if *joined.read() {
            return;
        }

        let handle = REALTIME_HANDLE.read().clone();
        if let (Some(handle), Some(user_id)) = (handle, auth.user_id()) {
            let topic = notifications_topic(&user_id);
            if let Err(e) = handle.join(&topic) {
                crate::log_error!("Failed to join '{}': {}", topic, e);
            } else {
                joined.set(true);
            }
        }
    });

    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn user() -> Uuid {
        Uuid::from_bytes([5; 16])
    }

    fn notification_json(id: Uuid, user_id: Uuid) -> serde_json::Value {
        json!({
            "id": id,
            "user_id": user_id,
            "title": "Shift approved",
            "body": "Your Friday shift was approved.",
            "kind": "work_hours",
            "read_at": null,
            "created_at": Utc::now(),
        })
    }

    #[test]
    fn change_for_other_tables_is_dropped() {
        let change = RowChange {
            table: "documents".to_string(),
            kind: ChangeKind::Insert,
            record: Some(notification_json(Uuid::from_bytes([1; 16]), user())),
            old_record: None,
        };
        assert!(!dispatch_change(user(), change));
    }

    #[test]
    fn malformed_record_is_dropped() {
        let change = RowChange {
            table: "notifications".to_string(),
            kind: ChangeKind::Insert,
            record: Some(json!({"id": "not-a-uuid"})),
            old_record: None,
        };
        assert!(!dispatch_change(user(), change));
    }

    #[test]
    fn delete_uses_the_old_record_id() {
        let change = RowChange {
            table: "notifications".to_string(),
            kind: ChangeKind::Delete,
            record: None,
            old_record: None,
        };
        // No old record, nothing to delete
        assert!(!dispatch_change(user(), change));
    }
}
