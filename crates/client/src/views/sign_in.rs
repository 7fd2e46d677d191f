//! Email/password sign-in screen.

use dioxus::prelude::*;

use crate::auth::AuthContext;
use crate::components::ui::{Button, Card, CardBody, CardHeader, InputType, TextInput};
use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    // Already signed in, skip the form
    use_effect(move || {
        if auth.is_authenticated() {
            nav.replace(Route::Home {});
        }
    });

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();

        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);

        spawn(async move {
            match auth
                .client()
                .sign_in_with_password(&email_value, &password_value)
                .await
            {
                Ok(session) => {
                    auth.apply_session(session);
                    nav.replace(Route::Home {});
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
                    title: "Monolite HR".to_string(),
                    subtitle: Some("Sign in to your workspace".to_string()),
                }
                CardBody {
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
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2", "Password" }
                            TextInput {
                                value: password.read().clone(),
                                input_type: Some(InputType::Password),
                                oninput: move |e: FormEvent| {
                                    password.set(e.value());
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
                            if *is_loading.read() { "Signing in..." } else { "Sign in" }
                        }
                        div { class: "text-center",
                            Link {
                                to: Route::ResetPassword {},
                                class: "text-sm text-teal-300 hover:text-teal-100",
                                "Forgot your password?"
                            }
                        }
                    }
                }
            }
        }
    }
}
