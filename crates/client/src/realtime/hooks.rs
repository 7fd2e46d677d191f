//! Hooks for reading realtime connection state from components.

use dioxus::prelude::*;

use super::connection::ConnectionState;
use super::manager::REALTIME_STATE;

/// Subscribe to the realtime connection state.
pub fn use_connection_state() -> ConnectionState {
    REALTIME_STATE.read().clone()
}
