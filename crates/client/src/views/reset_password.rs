//! Request a password-reset email.

use dioxus::prelude::*;

use crate::auth::AuthContext;
use crate::components::ui::{Button, Card, CardBody, CardHeader, InputType, TextInput};
use crate::Route;

#[component]
pub fn ResetPassword() -> Element {
    let auth = use_context::<AuthContext>();

    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let email_value = email.read().trim().to_string();
        if email_value.is_empty() {
            error.set(Some("Email is required".to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);

        spawn(async move {
            match auth.client().request_password_reset(&email_value).await {
                Ok(()) => {
                    sent.set(true);
                    is_loading.set(false);
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    is_loading.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-[#101917] p-4",
            Card { class: Some("w-full max-w-md".to_string()),
                CardHeader {
                    title: "Reset password".to_string(),
                    subtitle: Some("We'll email you a recovery link".to_string()),
                }
                CardBody {
                    if *sent.read() {
                        div { class: "space-y-4 text-center",
                            p { class: "text-sm text-gray-300",
                                "If an account exists for that address, a reset link is on its way."
                            }
                            Link {
                                to: Route::SignIn {},
                                class: "text-sm text-teal-300 hover:text-teal-100",
                                "Back to sign in"
                            }
                        }
                    } else {
                        form { onsubmit: handle_submit, class: "space-y-4",
                            div {
                                label { class: "block text-sm font-medium text-gray-300 mb-2", "Email" }
                                TextInput {
                                    value: email.read().clone(),
                                    input_type: Some(InputType::Email),
                                    placeholder: Some("you@company.com".to_string()),
                                    oninput: move |e: FormEvent| {
                                        email.set(e.value());
                                        error.set(None);
                                    },
                                }
                            }
                            if let Some(err) = error.read().as_ref() {
                                div { class: "p-3 bg-rose-500/10 border border-rose-500/30 rounded-lg text-rose-400 text-sm",
                                    "{err}"
                                }
                            }
                            Button {
                                r#type: Some("submit".to_string()),
                                class: Some("w-full".to_string()),
                                disabled: Some(*is_loading.read()),
                                if *is_loading.read() { "Sending..." } else { "Send reset link" }
                            }
                        }
                    }
                }
            }
        }
    }
}
