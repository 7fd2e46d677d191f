//! Set a new password after a recovery callback.

use dioxus::prelude::*;

use crate::auth::AuthContext;
use crate::components::ui::{Button, Card, CardBody, CardHeader, InputType, TextInput};
use crate::stores::push_success;
use crate::Route;

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn UpdatePassword() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_loading = use_signal(|| false);

    // Recovery callbacks establish a session before landing here
    use_effect(move || {
        if !auth.is_authenticated() {
            nav.replace(Route::SignIn {});
        }
    });

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let password_value = password.read().clone();
        let confirm_value = confirm.read().clone();

        if password_value.len() < MIN_PASSWORD_LEN {
            error.set(Some(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
            return;
        }
        if password_value != confirm_value {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        is_loading.set(true);
        error.set(None);

        spawn(async move {
            match auth.client().update_password(&password_value).await {
                Ok(_) => {
                    push_success("Password updated");
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
                    title: "Choose a new password".to_string(),
                    subtitle: Some("You're almost back in".to_string()),
                }
                CardBody {
                    form { onsubmit: handle_submit, class: "space-y-4",
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2", "New password" }
                            TextInput {
                                value: password.read().clone(),
                                input_type: Some(InputType::Password),
                                oninput: move |e: FormEvent| {
                                    password.set(e.value());
                                    error.set(None);
                                },
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-300 mb-2", "Confirm password" }
                            TextInput {
                                value: confirm.read().clone(),
                                input_type: Some(InputType::Password),
                                oninput: move |e: FormEvent| {
                                    confirm.set(e.value());
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
                            if *is_loading.read() { "Saving..." } else { "Update password" }
                        }
                    }
                }
            }
        }
    }
}
