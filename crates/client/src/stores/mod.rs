//! Global client-side state.
//!
//! Views read these stores directly; background tasks (the realtime
//! manager, fetch helpers) write into them. Nothing here talks to the
//! network except the async helpers in `notifications`.

pub mod notifications;
pub mod profile;
pub mod toasts;

pub use notifications::{NotificationChange, NotificationFeed, NOTIFICATIONS};
pub use profile::CURRENT_PROFILE;
pub use toasts::{dismiss_toast, push_error, push_success, Toast, ToastLevel, TOASTS};

/// Reset every store. Called on sign-out so the next user starts clean.
pub fn clear_all() {
    notifications::clear();
    profile::clear();
    toasts::clear();
}
