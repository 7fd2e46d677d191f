//! Landing view for authentication redirects.
//!
//! Email confirmation links, password recovery links, and magic links all
//! arrive here, either as in-app navigation with query parameters or as a
//! deep-link URL whose token material sits in the fragment. The view runs
//! the dispatch exactly once, applies the resulting session, and routes to
//! the right screen.

use dioxus::prelude::*;
use monolite_shared::OtpType;

use crate::auth::deep_link;
use crate::auth::{
    resolve, AuthContext, CallbackAction, CallbackPayload, CallbackQuery, CallbackState,
    Destination,
};
use crate::stores::push_error;
use crate::Route;

/// How long the error screen stays up before redirecting to sign-in.
const ERROR_REDIRECT_MS: u32 = 3000;

fn destination_route(destination: Destination) -> Route {
    match destination {
        Destination::EmailConfirmed => Route::EmailConfirmed {},
        Destination::UpdatePassword => Route::UpdatePassword {},
        Destination::Home => Route::Home {},
    }
}

/// Route params win when they carry token material. The raw URL is the
/// fallback for fragment-encoded tokens the router never sees; on desktop
/// that keeps a stale launch argument from shadowing fresh navigation.
fn select_payload(from_route: CallbackPayload, from_url: Option<CallbackPayload>) -> CallbackPayload {
    if from_route.is_actionable() {
        return from_route;
    }
    from_url
        .filter(CallbackPayload::is_actionable)
        .unwrap_or(from_route)
}

#[component]
pub fn AuthCallback(query: CallbackQuery) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();

    let mut state = use_signal(CallbackState::default);
    let mut error_message = use_signal(|| None::<String>);

    use_effect(move || {
        // Route params and the live URL can both trigger this effect;
        // only the first run dispatches.
        if !state.write().try_begin() {
            return;
        }

        let from_url = deep_link::current_url().map(|url| CallbackPayload::from_url(&url));
        let payload = select_payload(query.0.clone(), from_url);

        if let Some(raw) = payload.otp_type.as_deref() {
            if OtpType::from_raw(raw).is_none() {
                crate::log_warn!("Unrecognized callback type '{}', treating as signup", raw);
            }
        }

        match resolve(&payload) {
            CallbackAction::SurfaceError { message } => {
                crate::log_warn!("Auth callback reported an error: {}", message);
                push_error(message.clone());
                error_message.set(Some(message));
                spawn(async move {
                    deep_link::sleep_ms(ERROR_REDIRECT_MS).await;
                    nav.replace(Route::SignIn {});
                });
            }
            CallbackAction::EstablishSession {
                access_token,
                refresh_token,
                destination,
            } => {
                spawn(async move {
                    match auth.client().set_session(&access_token, &refresh_token).await {
                        Ok(session) => {
                            auth.apply_session(session);
                            nav.replace(destination_route(destination));
                        }
                        Err(e) => {
                            let message = e.user_message();
                            crate::log_error!("Failed to establish session: {}", e);
                            push_error(message.clone());
                            error_message.set(Some(message));
                            deep_link::sleep_ms(ERROR_REDIRECT_MS).await;
                            nav.replace(Route::SignIn {});
                        }
                    }
                });
            }
            CallbackAction::VerifyOtp {
                token_hash,
                otp_type,
                destination,
            } => {
                spawn(async move {
                    match auth.client().verify_otp(&token_hash, otp_type).await {
                        Ok(session) => {
                            auth.apply_session(session);
                            nav.replace(destination_route(destination));
                        }
                        Err(e) => {
                            let message = e.user_message();
                            crate::log_error!("OTP verification failed: {}", e);
                            push_error(message.clone());
                            error_message.set(Some(message));
                            deep_link::sleep_ms(ERROR_REDIRECT_MS).await;
                            nav.replace(Route::SignIn {});
                        }
                    }
                });
            }
            CallbackAction::Absent => {
                crate::log_info!("Auth callback with no token material, routing to sign-in");
                nav.replace(Route::SignIn {});
            }
        }
    });

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-[#101917] text-white",
            match error_message.read().as_ref() {
                Some(message) => rsx! {
                    div { class: "max-w-md space-y-3 text-center",
                        h2 { class: "text-xl font-bold text-rose-300", "Sign-in link failed" }
                        p { class: "text-sm text-gray-400", "{message}" }
                        p { class: "text-xs text-gray-500", "Taking you back to sign-in..." }
                    }
                },
                None => rsx! {
                    div { class: "text-gray-400", "Signing you in..." }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_payload_with_hash() -> CallbackPayload {
        CallbackPayload {
            token_hash: Some("route-hash".to_string()),
            otp_type: Some("recovery".to_string()),
            ..CallbackPayload::default()
        }
    }

    #[test]
    fn route_params_win_over_the_launch_url() {
        let stale = CallbackPayload::from_url(
            "monolite-hr://auth/callback?token_hash=stale-hash&type=signup",
        );
        let chosen = select_payload(route_payload_with_hash(), Some(stale));
        assert_eq!(chosen.token_hash.as_deref(), Some("route-hash"));
    }

    #[test]
    fn fragment_tokens_are_picked_up_when_route_params_are_empty() {
        let from_url = CallbackPayload::from_url(
            "https://app.example.test/auth/callback#access_token=at&refresh_token=rt",
        );
        let chosen = select_payload(CallbackPayload::default(), Some(from_url));
        assert_eq!(chosen.access_token.as_deref(), Some("at"));
        assert_eq!(chosen.refresh_token.as_deref(), Some("rt"));
    }

    #[test]
    fn empty_route_params_and_no_url_stay_absent() {
        let chosen = select_payload(CallbackPayload::default(), None);
        assert!(!chosen.is_actionable());
    }
}
