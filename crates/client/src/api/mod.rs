//! HTTP surface of the Monolite HR backend.
//!
//! `BackendClient` carries the project key and (when signed in) the user's
//! access token; `auth` adds the session endpoints and serverless function
//! calls, `tables` the per-table REST operations.

mod auth;
mod client;
mod tables;

pub use client::BackendClient;
pub use tables::NOTIFICATION_PAGE_SIZE;
