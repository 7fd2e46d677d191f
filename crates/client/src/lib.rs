//! Monolite HR client - Dioxus application crate.
//!
//! Cross-platform (web/WASM and desktop) employee self-service client for
//! the Monolite HR backend: sign-in, work-hour logging, material and leave
//! requests, realtime notifications, profile and document management.

pub mod api;
pub mod audio;
pub mod auth;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod realtime;
pub mod routes;
pub mod storage;
pub mod stores;
pub mod views;

pub use api::BackendClient;
pub use auth::{AuthContext, AuthProvider, AuthSession};
pub use routes::Route;
