//! Native/Desktop realtime socket implementation using tokio-tungstenite.

use dioxus::prelude::*;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_channel::oneshot;
use futures_util::{SinkExt, StreamExt};
use monolite_shared::{ClientMessage, RealtimeEnvelope, ServerMessage};
use std::sync::Arc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::{owner_gone, ConnectionState, ReconnectConfig, RealtimeHandle};

/// A managed realtime connection to the backend (Native implementation)
pub struct RealtimeConnection {
    /// Current connection state
    pub state: SyncSignal<ConnectionState>,
    /// Channel for outgoing messages
    sender: UnboundedSender<RealtimeEnvelope<ClientMessage>>,
    /// Dropping this tells the background loop to stop
    _shutdown: oneshot::Sender<()>,
}

impl RealtimeConnection {
    /// Create a new realtime connection
    pub fn new(
        url_builder: impl Fn() -> Option<String> + Send + Sync + 'static,
        on_event: impl Fn(RealtimeEnvelope<ServerMessage>) + Send + Sync + 'static,
    ) -> Self {
        let (sender, receiver) = unbounded();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let state = Signal::new_maybe_sync(ConnectionState::Disconnected);

        start_connection_loop(
            state,
            receiver,
            shutdown_rx,
            Arc::new(url_builder),
            Arc::new(on_event),
            ReconnectConfig::default(),
        );

        Self {
            state,
            sender,
            _shutdown: shutdown_tx,
        }
    }

    /// Get a handle for sending messages
    pub fn handle(&self) -> RealtimeHandle {
        RealtimeHandle::new(self.sender.clone())
    }
}

/// Start the connection management loop in a background tokio task
fn start_connection_loop(
    mut state: SyncSignal<ConnectionState>,
    receiver: UnboundedReceiver<RealtimeEnvelope<ClientMessage>>,
    mut shutdown: oneshot::Receiver<()>,
    url_builder: Arc<dyn Fn() -> Option<String> + Send + Sync>,
    on_event: Arc<dyn Fn(RealtimeEnvelope<ServerMessage>) + Send + Sync>,
    reconnect_config: ReconnectConfig,
) {
    tokio::spawn(async move {
        // Shared between connection attempts so queued messages survive a drop
        let receiver = Arc::new(tokio::sync::Mutex::new(receiver));
        let mut attempt = 0u32;

        loop {
            // The connection object is gone; the URL builder may still
            // produce URLs for a newer session, so stop instead of
            // reconnecting on its behalf.
            if owner_gone(&mut shutdown) {
                crate::log_info!("Realtime connection dropped, stopping loop");
                return;
            }

            let Some(url) = url_builder() else {
                // No URL available (signed out)
                state.set(ConnectionState::Disconnected);
                tokio::time::sleep(tokio::time::Duration::from_millis(1000)).await;
                continue;
            };

            if attempt == 0 {
                state.set(ConnectionState::Connecting);
            } else {
                state.set(ConnectionState::Reconnecting { attempt });
            }

            match connect_async(&url).await {
                Ok((ws_stream, _response)) => {
                    state.set(ConnectionState::Connected);
                    attempt = 0;
                    crate::log_info!("Realtime socket connected");

                    let (mut write, mut read) = ws_stream.split();

                    // Channel to signal when the connection closes
                    let (close_tx, mut close_rx) = tokio::sync::mpsc::unbounded_channel::<()>();

                    // Read task
                    let on_event_clone = on_event.clone();
                    let close_tx_for_read = close_tx.clone();
                    tokio::spawn(async move {
                        while let Some(msg_result) = read.next().await {
                            match msg_result {
                                Ok(Message::Text(text)) => {
                                    crate::log_debug!("Realtime received: {}", text);
                                    match serde_json::from_str::<RealtimeEnvelope<ServerMessage>>(
                                        &text,
                                    ) {
                                        Ok(event) => on_event_clone(event),
                                        Err(e) => {
                                            crate::log_error!("Failed to parse message: {}", e)
                                        }
                                    }
                                }
                                Ok(Message::Close(_)) => {
                                    crate::log_info!("Realtime socket received close frame");
                                    break;
                                }
                                Ok(Message::Ping(data)) => {
                                    // Pong is handled automatically by tungstenite
                                    crate::log_debug!("Received ping: {:?}", data);
                                }
                                Ok(_) => {
                                    // Ignore binary, pong, etc.
                                }
                                Err(e) => {
                                    crate::log_error!("Realtime read error: {}", e);
                                    break;
                                }
                            }
                        }
                        let _ = close_tx_for_read.send(());
                    });

                    // Write task
                    let receiver_for_write = receiver.clone();
                    tokio::spawn(async move {
                        loop {
                            let msg = {
                                let mut rx = receiver_for_write.lock().await;
                                rx.next().await
                            };

                            match msg {
                                Some(envelope) => match serde_json::to_string(&envelope) {
                                    Ok(json) => {
                                        crate::log_debug!("Realtime sending: {}", json);
                                        if let Err(e) = write.send(Message::Text(json.into())).await
                                        {
                                            crate::log_error!("Send failed: {}", e);
                                            break;
                                        }
                                    }
                                    Err(e) => {
                                        crate::log_error!("Serialize failed: {}", e);
                                    }
                                },
                                None => {
                                    crate::log_info!("Sender dropped, stopping write task");
                                    break;
                                }
                            }
                        }
                        let _ = close_tx.send(());
                    });

                    // Wait for the connection to close
                    close_rx.recv().await;
                    crate::log_info!("Realtime socket closed");
                    if owner_gone(&mut shutdown) {
                        return;
                    }
                    state.set(ConnectionState::Disconnected);
                }
                Err(e) => {
                    crate::log_error!("Realtime connection error: {}", e);

                    if reconnect_config.max_attempts > 0
                        && attempt >= reconnect_config.max_attempts
                    {
                        state.set(ConnectionState::Failed {
                            reason: format!(
                                "Max reconnect attempts ({}) exceeded",
                                reconnect_config.max_attempts
                            ),
                        });
                        break;
                    }

                    let delay = reconnect_config.delay_for_attempt(attempt);
                    crate::log_info!("Reconnecting in {}ms (attempt {})", delay, attempt + 1);
                    tokio::time::sleep(tokio::time::Duration::from_millis(delay as u64)).await;
                    attempt += 1;
                }
            }
        }
    });
}
