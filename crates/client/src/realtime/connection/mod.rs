//! Realtime WebSocket connection with state tracking and auto-reconnect.
//!
//! Shared types live here; the platform-specific connection loop is
//! conditionally included below.

use chrono::Utc;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_channel::oneshot;
use monolite_shared::{ClientMessage, RealtimeEnvelope};

/// State of the realtime socket
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting { attempt: u32 },
    Failed { reason: String },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    pub fn is_connecting(&self) -> bool {
        matches!(
            self,
            ConnectionState::Connecting | ConnectionState::Reconnecting { .. }
        )
    }
}

/// Configuration for auto-reconnect behavior
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    /// Maximum number of reconnect attempts (0 = infinite)
    pub max_attempts: u32,
    /// Initial delay in milliseconds
    pub initial_delay_ms: u32,
    /// Maximum delay in milliseconds
    pub max_delay_ms: u32,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f32,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            initial_delay_ms: 1000,
            max_delay_ms: 30000,
            backoff_multiplier: 1.5,
        }
    }
}

impl ReconnectConfig {
    /// Calculate delay for a given attempt number
    pub fn delay_for_attempt(&self, attempt: u32) -> u32 {
        let delay = self.initial_delay_ms as f32 * self.backoff_multiplier.powi(attempt as i32);
        (delay as u32).min(self.max_delay_ms)
    }
}

/// Handle for sending messages through the realtime connection
#[derive(Clone)]
pub struct RealtimeHandle {
    sender: UnboundedSender<RealtimeEnvelope<ClientMessage>>,
}

impl RealtimeHandle {
    pub(crate) fn new(sender: UnboundedSender<RealtimeEnvelope<ClientMessage>>) -> Self {
        Self { sender }
    }

    /// Send a message to the server
    pub fn send(&self, message: ClientMessage) -> Result<(), String> {
        crate::log_debug!("RealtimeHandle::send: {:?}", message);
        let envelope = RealtimeEnvelope {
            id: uuid::Uuid::new_v4().to_string(),
            payload: message,
            ts: Utc::now(),
        };
        self.sender
            .unbounded_send(envelope)
            .map_err(|e| format!("Failed to send: {}", e))
    }

    /// Join a topic
    pub fn join(&self, topic: &str) -> Result<(), String> {
        self.send(ClientMessage::Join {
            topic: topic.to_string(),
        })
    }

    /// Leave a topic
    pub fn leave(&self, topic: &str) -> Result<(), String> {
        self.send(ClientMessage::Leave {
            topic: topic.to_string(),
        })
    }
}

/// True once the owning `RealtimeConnection` has been dropped.
///
/// The connection holds the sender half and never sends on it; the
/// background loop polls this between connection attempts so a dropped
/// connection cannot keep reconnecting against a rebuilt URL.
pub(crate) fn owner_gone(shutdown: &mut oneshot::Receiver<()>) -> bool {
    shutdown.try_recv().is_err()
}

// Include platform-specific implementation
#[cfg(target_arch = "wasm32")]
mod connection_wasm;
#[cfg(target_arch = "wasm32")]
pub use connection_wasm::RealtimeConnection;

#[cfg(not(target_arch = "wasm32"))]
mod connection_native;
#[cfg(not(target_arch = "wasm32"))]
pub use connection_native::RealtimeConnection;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_then_caps() {
        let config = ReconnectConfig::default();
        assert_eq!(config.delay_for_attempt(0), 1000);
        assert_eq!(config.delay_for_attempt(1), 1500);
        assert_eq!(config.delay_for_attempt(2), 2250);
        assert_eq!(config.delay_for_attempt(20), config.max_delay_ms);
    }

    #[test]
    fn shutdown_signal_fires_when_owner_dropped() {
        let (tx, mut rx) = oneshot::channel::<()>();
        assert!(!owner_gone(&mut rx));
        drop(tx);
        assert!(owner_gone(&mut rx));
    }

    #[test]
    fn state_predicates() {
        assert!(ConnectionState::Connected.is_connected());
        assert!(ConnectionState::Connecting.is_connecting());
        assert!(ConnectionState::Reconnecting { attempt: 3 }.is_connecting());
        assert!(!ConnectionState::Disconnected.is_connected());
    }
}
