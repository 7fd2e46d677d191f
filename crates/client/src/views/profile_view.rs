//! Profile screen: personal details, documents, and account actions.

use dioxus::prelude::*;
use monolite_shared::UpdateProfileRequest;

use crate::auth::AuthContext;
use crate::components::ui::{Button, ButtonVariant, Card, CardBody, CardHeader, TextInput};
use crate::stores::{self, push_error, push_success, CURRENT_PROFILE};
use crate::Route;

#[component]
pub fn ProfileView() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut is_saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);

    // Load the profile and seed the form
    use_effect(move || {
        let Some(user_id) = auth.user_id() else {
            return;
        };
        spawn(async move {
            match auth.client().get_employee_profile(user_id).await {
                Ok(profile) => {
                    first_name.set(profile.first_name.clone().unwrap_or_default());
                    last_name.set(profile.last_name.clone().unwrap_or_default());
                    phone.set(profile.phone.clone().unwrap_or_default());
                    department.set(profile.department.clone().unwrap_or_default());
                    stores::profile::set_profile(profile);
                }
                Err(e) => push_error(e.user_message()),
            }
        });
    });

    let documents = use_resource(move || async move {
        let Some(user_id) = auth.user_id() else {
            return Err("Not signed in".to_string());
        };
        auth.client()
            .list_documents(user_id)
            .await
            .map_err(|e| e.user_message())
    });

    let handle_save = move |e: FormEvent| {
        e.prevent_default();
        let Some(user_id) = auth.user_id() else {
            return;
        };

        is_saving.set(true);
        let non_empty = |s: &Signal<String>| {
            let value = s.read().trim().to_string();
            if value.is_empty() {
                None
            } else {
                Some(value)
            }
        };
        let update = UpdateProfileRequest {
            first_name: non_empty(&first_name),
            last_name: non_empty(&last_name),
            phone: non_empty(&phone),
            department: non_empty(&department),
        };

        spawn(async move {
            match auth.client().update_employee_profile(user_id, &update).await {
                Ok(profile) => {
                    stores::profile::set_profile(profile);
                    push_success("Profile saved");
                }
                Err(e) => push_error(e.user_message()),
            }
            is_saving.set(false);
        });
    };

    let handle_sign_out = move |_| {
        let client = auth.client();
        spawn(async move {
            // Revoke server-side first; local teardown happens regardless
            if let Err(e) = client.sign_out().await {
                crate::log_warn!("Backend sign-out failed: {}", e);
            }
            auth.sign_out();
            nav.replace(Route::SignIn {});
        });
    };

    let handle_delete_account = move |_| {
        if !*confirm_delete.read() {
            confirm_delete.set(true);
            return;
        }
        spawn(async move {
            match auth.client().delete_account().await {
                Ok(()) => {
                    auth.sign_out();
                    nav.replace(Route::SignIn {});
                }
                Err(e) => {
                    push_error(e.user_message());
                    confirm_delete.set(false);
                }
            }
        });
    };

    let email = CURRENT_PROFILE
        .read()
        .as_ref()
        .map(|p| p.email.clone())
        .or_else(|| auth.user_email())
        .unwrap_or_default();

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-6 p-6",
            h1 { class: "text-2xl font-bold text-white", "Profile" }

            Card {
                CardHeader {
                    title: "Personal details".to_string(),
                    subtitle: Some(email),
                }
                CardBody {
                    form { onsubmit: handle_save, class: "space-y-4",
                        div { class: "grid gap-4 sm:grid-cols-2",
                            div {
                                label { class: "block text-sm font-medium text-gray-300 mb-2", "First name" }
                                TextInput {
                                    value: first_name.read().clone(),
                                    oninput: move |e: FormEvent| first_name.set(e.value()),
                                }
                            }
                            div {
                                label { class: "block text-sm font-medium text-gray-300 mb-2", "Last name" }
                                TextInput {
                                    value: last_name.read().clone(),
                                    oninput: move |e: FormEvent| last_name.set(e.value()),
                                }
                            }
                            div {
                                label { class: "block text-sm font-medium text-gray-300 mb-2", "Phone" }
                                TextInput {
                                    value: phone.read().clone(),
                                    oninput: move |e: FormEvent| phone.set(e.value()),
                                }
                            }
                            div {
                                label { class: "block text-sm font-medium text-gray-300 mb-2", "Department" }
                                TextInput {
                                    value: department.read().clone(),
                                    oninput: move |e: FormEvent| department.set(e.value()),
                                }
                            }
                        }
                        Button {
                            r#type: Some("submit".to_string()),
                            disabled: Some(*is_saving.read()),
                            if *is_saving.read() { "Saving..." } else { "Save changes" }
                        }
                    }
                }
            }

            Card {
                CardHeader { title: "Documents".to_string() }
                CardBody {
                    match documents.read().as_ref() {
                        Some(Ok(docs)) => rsx! {
                            if docs.is_empty() {
                                p { class: "text-sm text-gray-500", "No documents shared with you yet." }
                            } else {
                                div { class: "space-y-2",
                                    for doc in docs.iter() {
                                        a {
                                            key: "{doc.id}",
                                            href: "{doc.url}",
                                            target: "_blank",
                                            class: "flex items-center justify-between rounded-lg border border-[#22302d] px-4 py-3 hover:border-teal-500/40 transition-colors",
                                            span { class: "text-white", "{doc.name}" }
                                            span { class: "text-xs text-gray-500",
                                                {doc.uploaded_at.format("%d %b %Y").to_string()}
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Some(Err(e)) => rsx! {
                            p { class: "text-sm text-rose-400", "{e}" }
                        },
                        None => rsx! {
                            p { class: "text-sm text-gray-500", "Loading..." }
                        },
                    }
                }
            }

            Card {
                CardHeader { title: "Account".to_string() }
                CardBody {
                    div { class: "flex flex-wrap gap-3",
                        Button {
                            variant: Some(ButtonVariant::Secondary),
                            onclick: handle_sign_out,
                            "Sign out"
                        }
                        Button {
                            variant: Some(ButtonVariant::Danger),
                            onclick: handle_delete_account,
                            if *confirm_delete.read() {
                                "Really delete? This cannot be undone"
                            } else {
                                "Delete account"
                            }
                        }
                    }
                }
            }
        }
    }
}
