//! Signed-in dashboard.

use dioxus::prelude::*;

use crate::auth::AuthContext;
use crate::components::ui::{Card, CardBody, CardHeader};
use crate::stores::{self, CURRENT_PROFILE, NOTIFICATIONS};
use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();

    // Seed the profile cache and the notification feed
    use_effect(move || {
        let Some(user_id) = auth.user_id() else {
            return;
        };

        spawn(async move {
            if CURRENT_PROFILE.read().is_none() {
                match auth.client().get_employee_profile(user_id).await {
                    Ok(profile) => stores::profile::set_profile(profile),
                    Err(e) => crate::log_warn!("Failed to load profile: {}", e),
                }
            }
            if let Err(e) = stores::notifications::ensure_fresh(auth).await {
                crate::log_warn!("Failed to load notifications: {}", e);
            }
        });
    });

    let greeting = CURRENT_PROFILE
        .read()
        .as_ref()
        .map(|p| p.display_name())
        .or_else(|| auth.user_email())
        .unwrap_or_else(|| "there".to_string());

    let unread = NOTIFICATIONS.resolve().read().unread_count();

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-6 p-6",
            h1 { class: "text-3xl font-bold text-white", "Hi, {greeting}" }

            div { class: "grid gap-4 sm:grid-cols-2",
                Link { to: Route::Activities {},
                    Card { class: Some("hover:border-teal-500/40 transition-colors".to_string()),
                        CardHeader {
                            title: "Work hours".to_string(),
                            subtitle: Some("Log and review your hours".to_string()),
                        }
                        CardBody {
                            p { class: "text-sm text-gray-400", "Open your activity log" }
                        }
                    }
                }
                Link { to: Route::Requests {},
                    Card { class: Some("hover:border-teal-500/40 transition-colors".to_string()),
                        CardHeader {
                            title: "Requests".to_string(),
                            subtitle: Some("Leave and material requests".to_string()),
                        }
                        CardBody {
                            p { class: "text-sm text-gray-400", "Submit or track a request" }
                        }
                    }
                }
                Link { to: Route::Notifications {},
                    Card { class: Some("hover:border-teal-500/40 transition-colors".to_string()),
                        CardHeader {
                            title: "Notifications".to_string(),
                            subtitle: Some(
                                if unread == 0 {
                                    "You're all caught up".to_string()
                                } else {
                                    format!("{unread} unread")
                                },
                            ),
                        }
                        CardBody {
                            p { class: "text-sm text-gray-400", "See what's new" }
                        }
                    }
                }
                Link { to: Route::ProfileView {},
                    Card { class: Some("hover:border-teal-500/40 transition-colors".to_string()),
                        CardHeader {
                            title: "Profile".to_string(),
                            subtitle: Some("Your details and documents".to_string()),
                        }
                        CardBody {
                            p { class: "text-sm text-gray-400", "Manage your account" }
                        }
                    }
                }
            }
        }
    }
}
