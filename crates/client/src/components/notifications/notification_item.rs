use dioxus::prelude::*;
use monolite_shared::{Notification, NotificationKind};
use uuid::Uuid;

#[derive(Props, Clone, PartialEq)]
pub struct NotificationItemProps {
    pub notification: Notification,
    pub on_mark_read: EventHandler<Uuid>,
    pub on_delete: EventHandler<Uuid>,
}

fn kind_badge(kind: &NotificationKind) -> (&'static str, &'static str) {
    match kind {
        NotificationKind::System => ("System", "bg-gray-500/20 text-gray-300"),
        NotificationKind::WorkHours => ("Hours", "bg-teal-500/20 text-teal-300"),
        NotificationKind::Request => ("Request", "bg-amber-500/20 text-amber-300"),
        NotificationKind::Document => ("Document", "bg-sky-500/20 text-sky-300"),
    }
}

#[component]
pub fn NotificationItem(props: NotificationItemProps) -> Element {
    let notification = &props.notification;
    let unread = notification.is_unread();
    let (badge_label, badge_class) = kind_badge(&notification.kind);
    let id = notification.id;

    let container = if unread {
        "border-teal-500/40 bg-[#1a2a27]"
    } else {
        "border-[#22302d] bg-[#16211f]"
    };

    rsx! {
        div { class: "flex items-start gap-3 rounded-lg border p-4 {container}",
            div { class: "flex-1 min-w-0",
                div { class: "flex items-center gap-2",
                    if unread {
                        span { class: "h-2 w-2 rounded-full bg-teal-400" }
                    }
                    span { class: "font-semibold text-white truncate", "{notification.title}" }
                    span { class: "rounded px-1.5 py-0.5 text-xs {badge_class}", "{badge_label}" }
                }
                p { class: "mt-1 text-sm text-gray-400", "{notification.body}" }
                p { class: "mt-1 text-xs text-gray-500",
                    {notification.created_at.format("%Y-%m-%d %H:%M").to_string()}
                }
            }
            div { class: "flex shrink-0 gap-2",
                if unread {
                    button {
                        class: "text-xs text-teal-300 hover:text-teal-100",
                        onclick: move |_| props.on_mark_read.call(id),
                        "Mark read"
                    }
                }
                button {
                    class: "text-xs text-gray-500 hover:text-rose-300",
                    onclick: move |_| props.on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
