//! Shell for the signed-in area: top navigation with the unread badge and
//! the realtime connection indicator.

use dioxus::prelude::*;

use crate::auth::AuthContext;
use crate::realtime::{use_connection_state, ConnectionState};
use crate::stores::NOTIFICATIONS;
use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let route = use_route::<Route>();

    // Signed-out users get bounced to sign-in
    use_effect(move || {
        if !auth.is_authenticated() {
            nav.replace(Route::SignIn {});
        }
    });

    let unread = NOTIFICATIONS.resolve().read().unread_count();
    let connection_state = use_connection_state();

    let nav_link = |target: Route, label: &'static str, current: &Route| {
        let active = std::mem::discriminant(current) == std::mem::discriminant(&target);
        let class = if active {
            "rounded-lg px-3 py-1.5 text-sm font-medium bg-[#22302d] text-white"
        } else {
            "rounded-lg px-3 py-1.5 text-sm font-medium text-gray-400 hover:text-white hover:bg-[#1a2623] transition-colors"
        };
        rsx! {
            Link { to: target, class, "{label}" }
        }
    };

    let (dot_class, dot_title) = match &connection_state {
        ConnectionState::Connected => ("bg-emerald-400", "Live updates on"),
        ConnectionState::Connecting | ConnectionState::Reconnecting { .. } => {
            ("bg-amber-400", "Connecting...")
        }
        ConnectionState::Disconnected => ("bg-gray-500", "Offline"),
        ConnectionState::Failed { .. } => ("bg-rose-500", "Connection failed"),
    };

    rsx! {
        div { class: "min-h-screen bg-[#101917]",
            header { class: "sticky top-0 z-40 border-b border-[#22302d] bg-[#101917]/95 backdrop-blur",
                div { class: "mx-auto flex h-14 max-w-5xl items-center gap-2 px-4",
                    Link { to: Route::Home {}, class: "mr-4 font-bold text-white", "Monolite HR" }
                    nav { class: "flex flex-1 items-center gap-1 overflow-x-auto",
                        {nav_link(Route::Home {}, "Home", &route)}
                        {nav_link(Route::Activities {}, "Hours", &route)}
                        {nav_link(Route::Requests {}, "Requests", &route)}
                        {nav_link(Route::ProfileView {}, "Profile", &route)}
                    }
                    span {
                        class: "h-2.5 w-2.5 rounded-full {dot_class}",
                        title: "{dot_title}",
                    }
                    Link {
                        to: Route::Notifications {},
                        class: "relative ml-2 rounded-lg p-2 text-gray-400 hover:text-white hover:bg-[#1a2623] transition-colors",
                        "🔔"
                        if unread > 0 {
                            span { class: "absolute -right-0.5 -top-0.5 flex h-4 min-w-4 items-center justify-center rounded-full bg-teal-500 px-1 text-[10px] font-bold text-white",
                                "{unread}"
                            }
                        }
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}
