//! Confirmation screen shown after a signup or email-change callback.

use dioxus::prelude::*;

use crate::components::ui::{Button, Card, CardBody};
use crate::Route;

#[component]
pub fn EmailConfirmed() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-[#101917] p-4",
            Card { class: Some("w-full max-w-md".to_string()),
                CardBody {
                    div { class: "space-y-4 py-4 text-center",
                        div { class: "mx-auto flex h-14 w-14 items-center justify-center rounded-full bg-emerald-500/20 text-2xl",
                            "✓"
                        }
                        h2 { class: "text-2xl font-bold text-white", "Email confirmed" }
                        p { class: "text-sm text-gray-400",
                            "Your address is verified and your account is ready to use."
                        }
                        Button {
                            class: Some("w-full".to_string()),
                            onclick: move |_| {
                                nav.replace(Route::Home {});
                            },
                            "Continue"
                        }
                    }
                }
            }
        }
    }
}
