//! Entry route that forwards to sign-in or the signed-in home screen.

use dioxus::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

#[component]
pub fn Landing() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    use_effect(move || {
        if auth.is_authenticated() {
            nav.replace(Route::Home {});
        } else {
            nav.replace(Route::SignIn {});
        }
    });

    rsx! {
        div { class: "flex items-center justify-center min-h-screen bg-[#101917] text-white",
            "Loading..."
        }
    }
}
