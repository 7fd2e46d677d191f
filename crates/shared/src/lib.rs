//! Shared types for the Monolite HR client.

pub mod error;
pub mod models;
pub mod realtime;

pub use error::*;
pub use models::*;
pub use realtime::*;
