//! Accept an organization invitation delivered by email.

use dioxus::prelude::*;

use crate::auth::AuthContext;
use crate::components::ui::{Button, Card, CardBody, CardHeader};
use crate::Route;

#[component]
pub fn AcceptInvitation(token: String) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    let mut error = use_signal(|| None::<String>);
    let mut accepted_email = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| true);

    // Accept on mount; the token is single-use so there is no retry button
    use_effect({
        let token = token.clone();
        move || {
            let token = token.clone();
            spawn(async move {
                match auth.client().accept_invitation(&token).await {
                    Ok(response) if response.accepted => {
                        accepted_email.set(response.email);
                        is_loading.set(false);
                    }
                    Ok(_) => {
                        error.set(Some(
                            "This invitation is no longer valid. Ask your manager to send a new one.".to_string(),
                        ));
                        is_loading.set(false);
                    }
                    Err(e) => {
                        error.set(Some(e.user_message()));
                        is_loading.set(false);
                    }
                }
            });
        }
    });

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-[#101917] p-4",
            Card { class: Some("w-full max-w-md".to_string()),
                CardHeader { title: "Join your team".to_string() }
                CardBody {
                    if *is_loading.read() {
                        p { class: "text-sm text-gray-400", "Checking your invitation..." }
                    } else if let Some(err) = error.read().as_ref() {
                        div { class: "space-y-4",
                            div { class: "p-3 bg-rose-500/10 border border-rose-500/30 rounded-lg text-rose-400 text-sm",
                                "{err}"
                            }
                            Link {
                                to: Route::SignIn {},
                                class: "block text-center text-sm text-teal-300 hover:text-teal-100",
                                "Back to sign in"
                            }
                        }
                    } else {
                        div { class: "space-y-4 text-center",
                            p { class: "text-sm text-gray-300",
                                if let Some(email) = accepted_email.read().as_ref() {
                                    "Invitation accepted for {email}. Sign in to get started."
                                } else {
                                    "Invitation accepted. Sign in to get started."
                                }
                            }
                            Button {
                                class: Some("w-full".to_string()),
                                onclick: move |_| {
                                    nav.replace(Route::SignIn {});
                                },
                                "Go to sign in"
                            }
                        }
                    }
                }
            }
        }
    }
}
