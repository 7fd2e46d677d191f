//! Global notification feed store.
//!
//! Single source of truth for the signed-in user's notifications. A REST
//! fetch seeds the list; realtime row changes patch it in place through
//! [`NotificationFeed::apply`], which is a plain reducer so it can be tested
//! without a live subscription. The unread count is always derived from the
//! cached items, never stored.

use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;
use monolite_shared::{ApiError, Notification};
use uuid::Uuid;

use crate::auth::AuthContext;

/// How long a fetched list stays fresh before `ensure_fresh` refetches.
pub const FRESH_FOR_SECS: i64 = 60;

/// The cached notification list plus its fetch bookkeeping.
#[derive(Store, Default, Clone, PartialEq)]
pub struct NotificationFeed {
    /// Newest first, as served by the backend.
    pub items: Vec<Notification>,
    /// Whether an initial fetch has completed.
    pub is_loaded: bool,
    /// When the list was last fetched; `None` after invalidation.
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Global notification store.
pub static NOTIFICATIONS: GlobalStore<NotificationFeed> = Global::new(NotificationFeed::default);

/// A row change scoped to the notifications table.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationChange {
    Insert(Notification),
    Update(Notification),
    Delete(Uuid),
}

impl NotificationFeed {
    /// Replace the list with a fresh fetch result.
    pub fn set_list(&mut self, items: Vec<Notification>, now: DateTime<Utc>) {
        self.items = items;
        self.is_loaded = true;
        self.fetched_at = Some(now);
    }

    /// Whether the cached list is still considered fresh at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.fetched_at {
            Some(at) => now - at < Duration::seconds(FRESH_FOR_SECS),
            None => false,
        }
    }

    /// Drop freshness so the next read refetches (called after mutations).
    pub fn invalidate(&mut self) {
        self.fetched_at = None;
    }

    /// Apply a realtime row change. Returns `true` when the cache changed.
    ///
    /// Inserts for other users, or for ids already cached, are ignored, so
    /// duplicate delivery across reconnects is harmless. Updates for ids
    /// that were never fetched (older than the cached page) are ignored
    /// rather than appended out of order.
    pub fn apply(&mut self, user_id: Uuid, change: NotificationChange) -> bool {
        match change {
            NotificationChange::Insert(notification) => {
                if notification.user_id != user_id {
                    return false;
                }
                if self.items.iter().any(|n| n.id == notification.id) {
                    return false;
                }
                self.items.insert(0, notification);
                true
            }
            NotificationChange::Update(notification) => {
                match self.items.iter_mut().find(|n| n.id == notification.id) {
                    Some(slot) => {
                        *slot = notification;
                        true
                    }
                    None => false,
                }
            }
            NotificationChange::Delete(id) => {
                let before = self.items.len();
                self.items.retain(|n| n.id != id);
                self.items.len() != before
            }
        }
    }

    /// Count of cached notifications with no read timestamp.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| n.read_at.is_none()).count()
    }
}

/// Fetch the list from the backend, replacing the cache.
pub async fn refresh(auth: AuthContext) -> Result<(), ApiError> {
    let Some(user_id) = auth.user_id() else {
        return Ok(());
    };
    let items = auth.client().list_notifications(user_id).await?;
    let mut store = NOTIFICATIONS.resolve();
    store.write().set_list(items, Utc::now());
    Ok(())
}

/// Fetch the list only when the cache is stale. Called by views on render.
pub async fn ensure_fresh(auth: AuthContext) -> Result<(), ApiError> {
    let fresh = NOTIFICATIONS.resolve().read().is_fresh(Utc::now());
    if fresh {
        return Ok(());
    }
    refresh(auth).await
}

/// Mark one notification read on the backend, then reconcile the cache.
pub async fn mark_read(auth: AuthContext, id: Uuid) -> Result<(), ApiError> {
    auth.client().mark_notification_read(id).await?;
    NOTIFICATIONS.resolve().write().invalidate();
    refresh(auth).await
}

/// Mark every unread notification read, then reconcile the cache.
pub async fn mark_all_read(auth: AuthContext) -> Result<(), ApiError> {
    let Some(user_id) = auth.user_id() else {
        return Ok(());
    };
    auth.client().mark_all_notifications_read(user_id).await?;
    NOTIFICATIONS.resolve().write().invalidate();
    refresh(auth).await
}

/// Delete one notification, then reconcile the cache.
pub async fn remove(auth: AuthContext, id: Uuid) -> Result<(), ApiError> {
    auth.client().delete_notification(id).await?;
    NOTIFICATIONS.resolve().write().invalidate();
    refresh(auth).await
}

/// Reset the store (used during sign-out).
pub fn clear() {
    let mut store = NOTIFICATIONS.resolve();
    *store.write() = NotificationFeed::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use monolite_shared::NotificationKind;

    fn notification(id_byte: u8, user_byte: u8, read: bool) -> Notification {
        Notification {
            id: Uuid::from_bytes([id_byte; 16]),
            user_id: Uuid::from_bytes([user_byte; 16]),
            title: format!("n{id_byte}"),
            body: "body".to_string(),
            kind: NotificationKind::System,
            read_at: read.then(Utc::now),
            created_at: Utc::now(),
        }
    }

    fn user() -> Uuid {
        Uuid::from_bytes([7; 16])
    }

    #[test]
    fn insert_prepends_for_the_scoped_user() {
        let mut feed = NotificationFeed::default();
        feed.set_list(vec![notification(1, 7, true)], Utc::now());

        assert!(feed.apply(user(), NotificationChange::Insert(notification(2, 7, false))));
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.items[0].id, Uuid::from_bytes([2; 16]));
    }

    #[test]
    fn insert_for_another_user_is_ignored() {
        let mut feed = NotificationFeed::default();
        assert!(!feed.apply(user(), NotificationChange::Insert(notification(2, 9, false))));
        assert!(feed.items.is_empty());
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut feed = NotificationFeed::default();
        assert!(feed.apply(user(), NotificationChange::Insert(notification(2, 7, false))));
        assert!(!feed.apply(user(), NotificationChange::Insert(notification(2, 7, false))));
        assert_eq!(feed.items.len(), 1);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut feed = NotificationFeed::default();
        feed.set_list(
            vec![notification(1, 7, false), notification(2, 7, false)],
            Utc::now(),
        );

        let mut updated = notification(2, 7, true);
        updated.title = "seen".to_string();
        assert!(feed.apply(user(), NotificationChange::Update(updated)));
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.items[1].title, "seen");
        assert!(feed.items[1].read_at.is_some());
    }

    #[test]
    fn update_for_unknown_id_is_ignored() {
        let mut feed = NotificationFeed::default();
        assert!(!feed.apply(user(), NotificationChange::Update(notification(3, 7, true))));
        assert!(feed.items.is_empty());
    }

    #[test]
    fn delete_removes_the_row() {
        let mut feed = NotificationFeed::default();
        feed.set_list(
            vec![notification(1, 7, false), notification(2, 7, false)],
            Utc::now(),
        );

        assert!(feed.apply(user(), NotificationChange::Delete(Uuid::from_bytes([1; 16]))));
        assert_eq!(feed.items.len(), 1);
        assert!(!feed.apply(user(), NotificationChange::Delete(Uuid::from_bytes([1; 16]))));
    }

    #[test]
    fn unread_count_tracks_missing_read_timestamps() {
        let mut feed = NotificationFeed::default();
        feed.set_list(
            vec![
                notification(1, 7, false),
                notification(2, 7, true),
                notification(3, 7, false),
            ],
            Utc::now(),
        );
        assert_eq!(feed.unread_count(), 2);

        feed.apply(user(), NotificationChange::Update(notification(1, 7, true)));
        assert_eq!(feed.unread_count(), 1);
    }

    #[test]
    fn freshness_expires_after_the_window() {
        let mut feed = NotificationFeed::default();
        let fetched = Utc::now();
        feed.set_list(Vec::new(), fetched);

        assert!(feed.is_fresh(fetched + Duration::seconds(FRESH_FOR_SECS - 1)));
        assert!(!feed.is_fresh(fetched + Duration::seconds(FRESH_FOR_SECS)));

        feed.invalidate();
        assert!(!feed.is_fresh(fetched));
    }
}
