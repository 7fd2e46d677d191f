//! Toast host rendering the global toast queue.

use dioxus::prelude::*;

use crate::auth::deep_link::sleep_ms;
use crate::stores::{dismiss_toast, ToastLevel, TOASTS};

const TOAST_LIFETIME_MS: u32 = 5000;

#[component]
pub fn ToastHost() -> Element {
    let toasts = TOASTS.read().clone();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2",
            for toast in toasts {
                ToastItem { key: "{toast.id}", id: toast.id, level: toast.level, message: toast.message }
            }
        }
    }
}

#[component]
fn ToastItem(id: u64, level: ToastLevel, message: String) -> Element {
    // Auto-dismiss after a fixed lifetime
    use_effect(move || {
        spawn(async move {
            sleep_ms(TOAST_LIFETIME_MS).await;
            dismiss_toast(id);
        });
    });

    let accent = match level {
        ToastLevel::Success => "border-emerald-500/50 text-emerald-200",
        ToastLevel::Error => "border-rose-500/50 text-rose-200",
    };

    rsx! {
        div {
            class: "flex items-center gap-3 rounded-lg border bg-[#16211f]/95 px-4 py-3 text-sm shadow-lg {accent}",
            span { "{message}" }
            button {
                class: "ml-2 text-gray-400 hover:text-white",
                onclick: move |_| dismiss_toast(id),
                "✕"
            }
        }
    }
}
