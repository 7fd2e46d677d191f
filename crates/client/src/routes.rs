//! Application routing configuration.

use dioxus::prelude::*;

use crate::auth::CallbackQuery;
use crate::views::{
    AcceptInvitation, Activities, AppLayout, AuthCallback, EmailConfirmed, Home, Landing,
    Notifications, ProfileView, Requests, ResetPassword, SignIn, UpdatePassword,
};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Landing page redirects to sign-in or home
    #[route("/")]
    Landing {},

    // Auth routes
    #[route("/sign-in")]
    SignIn {},
    #[route("/reset-password")]
    ResetPassword {},
    #[route("/update-password")]
    UpdatePassword {},
    #[route("/email-confirmed")]
    EmailConfirmed {},
    #[route("/accept-invitation/:token")]
    AcceptInvitation { token: String },

    // Deep-link landing route for auth redirects
    #[route("/auth/callback?:..query")]
    AuthCallback { query: CallbackQuery },

    // Signed-in area
    #[layout(AppLayout)]
        #[route("/home")]
        Home {},
        #[route("/activities")]
        Activities {},
        #[route("/requests")]
        Requests {},
        #[route("/notifications")]
        Notifications {},
        #[route("/profile")]
        ProfileView {},
}
