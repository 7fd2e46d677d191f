//! Notification feed.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::components::notifications::NotificationItem;
use crate::components::ui::{Button, ButtonVariant};
use crate::stores::{self, push_error, NOTIFICATIONS};

#[component]
pub fn Notifications() -> Element {
    let auth = use_context::<AuthContext>();

    use_effect(move || {
        spawn(async move {
            if let Err(e) = stores::notifications::ensure_fresh(auth).await {
                push_error(e.user_message());
            }
        });
    });

    let feed = NOTIFICATIONS.resolve().read().clone();
    let unread = feed.unread_count();

    let on_mark_read = move |id: Uuid| {
        spawn(async move {
            if let Err(e) = stores::notifications::mark_read(auth, id).await {
                push_error(e.user_message());
            }
        });
    };

    let on_delete = move |id: Uuid| {
        spawn(async move {
            if let Err(e) = stores::notifications::remove(auth, id).await {
                push_error(e.user_message());
            }
        });
    };

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-4 p-6",
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-white", "Notifications" }
                if unread > 0 {
                    Button {
                        variant: Some(ButtonVariant::Secondary),
                        onclick: move |_| {
                            spawn(async move {
                                if let Err(e) = stores::notifications::mark_all_read(auth).await {
                                    push_error(e.user_message());
                                }
                            });
                        },
                        "Mark all read ({unread})"
                    }
                }
            }

            if !feed.is_loaded {
                p { class: "text-sm text-gray-500", "Loading notifications..." }
            } else if feed.items.is_empty() {
                div { class: "rounded-lg border border-[#22302d] p-8 text-center text-gray-500",
                    "Nothing here yet."
                }
            } else {
                div { class: "space-y-2",
                    for notification in feed.items {
                        NotificationItem {
                            key: "{notification.id}",
                            notification,
                            on_mark_read,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}
