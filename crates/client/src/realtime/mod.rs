//! Realtime notification delivery over WebSocket.

pub mod connection;
pub mod hooks;
pub mod manager;

pub use connection::{ConnectionState, RealtimeHandle, ReconnectConfig};
pub use hooks::use_connection_state;
pub use manager::{clear_connection, dispatch_change, RealtimeManager, REALTIME_STATE};
