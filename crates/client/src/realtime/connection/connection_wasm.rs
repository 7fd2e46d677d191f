//! WASM/Web realtime socket implementation using web_sys::WebSocket.

use dioxus::prelude::*;
use futures_channel::mpsc::{unbounded, UnboundedReceiver};
use futures_channel::oneshot;
use futures_util::StreamExt;
use monolite_shared::{ClientMessage, RealtimeEnvelope, ServerMessage};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys;

use super::{owner_gone, ConnectionState, ReconnectConfig, RealtimeHandle};

/// A managed realtime connection to the backend (WASM implementation)
pub struct RealtimeConnection {
    /// Current connection state
    pub state: Signal<ConnectionState>,
    /// Channel for outgoing messages
    sender: futures_channel::mpsc::UnboundedSender<RealtimeEnvelope<ClientMessage>>,
    /// Reconnect configuration
    reconnect_config: ReconnectConfig,
    /// URL builder function (called on each reconnect attempt)
    url_builder: std::rc::Rc<dyn Fn() -> Option<String>>,
    /// Event callback
    on_event: std::rc::Rc<dyn Fn(RealtimeEnvelope<ServerMessage>)>,
    /// Dropping this tells the background loop to stop
    _shutdown: oneshot::Sender<()>,
}

impl RealtimeConnection {
    /// Create a new realtime connection
    pub fn new(
        url_builder: impl Fn() -> Option<String> + 'static,
        on_event: impl Fn(RealtimeEnvelope<ServerMessage>) + 'static,
    ) -> Self {
        let (sender, receiver) = unbounded();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let state = Signal::new(ConnectionState::Disconnected);

        let connection = Self {
            state,
            sender,
            reconnect_config: ReconnectConfig::default(),
            url_builder: std::rc::Rc::new(url_builder),
            on_event: std::rc::Rc::new(on_event),
            _shutdown: shutdown_tx,
        };

        connection.start_connection_loop(receiver, shutdown_rx);

        connection
    }

    /// Get a handle for sending messages
    pub fn handle(&self) -> RealtimeHandle {
        RealtimeHandle::new(self.sender.clone())
    }

    /// Start the connection management loop
    fn start_connection_loop(
        &self,
        receiver: UnboundedReceiver<RealtimeEnvelope<ClientMessage>>,
        mut shutdown: oneshot::Receiver<()>,
    ) {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut state = self.state;
        let url_builder = self.url_builder.clone();
        let on_event = self.on_event.clone();
        let reconnect_config = self.reconnect_config.clone();

        // Wrap receiver in Rc<RefCell> so the send task can access it
        let receiver = Rc::new(RefCell::new(receiver));

        spawn_local(async move {
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
                    gloo_timers::future::TimeoutFuture::new(1000).await;
                    continue;
                };

                if attempt == 0 {
                    state.set(ConnectionState::Connecting);
                } else {
                    state.set(ConnectionState::Reconnecting { attempt });
                }

                match connect_websocket(&url, on_event.clone()).await {
                    Ok(ws) => {
                        state.set(ConnectionState::Connected);
                        attempt = 0;
                        crate::log_info!("Realtime socket connected");

                        // Channel to signal when the connection closes
                        let (close_tx, mut close_rx) = futures_channel::mpsc::unbounded::<()>();

                        let onclose_callback =
                            Closure::wrap(Box::new(move |_: web_sys::CloseEvent| {
                                let _ = close_tx.unbounded_send(());
                            }) as Box<dyn FnMut(web_sys::CloseEvent)>);
                        ws.set_onclose(Some(onclose_callback.as_ref().unchecked_ref()));
                        onclose_callback.forget();

                        // Send task awaiting on the receiver
                        let ws_for_send = ws.clone();
                        let receiver_for_send = receiver.clone();
                        spawn_local(async move {
                            loop {
                                // Take receiver, await next message, put it back
                                let msg = {
                                    let mut rx = receiver_for_send.borrow_mut();
                                    rx.next().await
                                };

                                match msg {
                                    Some(envelope) => {
                                        // readyState 1 = OPEN
                                        if ws_for_send.ready_state() != 1 {
                                            crate::log_info!(
                                                "Socket no longer open, stopping send task"
                                            );
                                            break;
                                        }
                                        match serde_json::to_string(&envelope) {
                                            Ok(json) => {
                                                crate::log_debug!("Realtime sending: {}", json);
                                                if let Err(e) = ws_for_send.send_with_str(&json) {
                                                    crate::log_error!("Send failed: {:?}", e);
                                                }
                                            }
                                            Err(e) => {
                                                crate::log_error!("Serialize failed: {}", e);
                                            }
                                        }
                                    }
                                    None => {
                                        crate::log_info!("Sender dropped, stopping send task");
                                        // Close the socket so the outer loop
                                        // wakes up and can observe the drop
                                        let _ = ws_for_send.close();
                                        break;
                                    }
                                }
                            }
                        });

                        // Wait for the connection to close
                        close_rx.next().await;
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
                        gloo_timers::future::TimeoutFuture::new(delay).await;
                        attempt += 1;
                    }
                }
            }
        });
    }
}

/// Establish a WebSocket connection and return it once open.
/// The caller owns the send loop and close handling.
async fn connect_websocket(
    url: &str,
    on_event: std::rc::Rc<dyn Fn(RealtimeEnvelope<ServerMessage>)>,
) -> Result<web_sys::WebSocket, String> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_sys::{CloseEvent, MessageEvent, WebSocket};

    let ws = WebSocket::new(url).map_err(|e| format!("Failed to create WebSocket: {:?}", e))?;

    let is_open = Rc::new(RefCell::new(false));
    let error_reason = Rc::new(RefCell::new(None::<String>));

    let is_open_clone = is_open.clone();
    let onopen_callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
        crate::log_debug!("Realtime socket onopen fired");
        *is_open_clone.borrow_mut() = true;
    }) as Box<dyn FnMut(web_sys::Event)>);
    ws.set_onopen(Some(onopen_callback.as_ref().unchecked_ref()));
    onopen_callback.forget();

    let error_reason_close = error_reason.clone();
    let onclose_callback = Closure::wrap(Box::new(move |e: CloseEvent| {
        let reason = if e.reason().is_empty() {
            format!("Code {}", e.code())
        } else {
            e.reason()
        };
        crate::log_info!("Realtime socket onclose: {}", reason);
        *error_reason_close.borrow_mut() = Some(reason);
    }) as Box<dyn FnMut(CloseEvent)>);
    ws.set_onclose(Some(onclose_callback.as_ref().unchecked_ref()));
    onclose_callback.forget();

    let error_reason_err = error_reason.clone();
    let onerror_callback = Closure::wrap(Box::new(move |_: web_sys::ErrorEvent| {
        crate::log_error!("Realtime socket onerror fired");
        *error_reason_err.borrow_mut() = Some("WebSocket error".to_string());
    }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
    ws.set_onerror(Some(onerror_callback.as_ref().unchecked_ref()));
    onerror_callback.forget();

    let onmessage_callback = Closure::wrap(Box::new(move |e: MessageEvent| {
        if let Ok(text) = e.data().dyn_into::<js_sys::JsString>() {
            let text: String = text.into();
            crate::log_debug!("Realtime received: {}", text);
            if let Ok(event) = serde_json::from_str::<RealtimeEnvelope<ServerMessage>>(&text) {
                on_event(event);
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    ws.set_onmessage(Some(onmessage_callback.as_ref().unchecked_ref()));
    onmessage_callback.forget();

    // Wait for the connection to open (5 second timeout)
    for _ in 0..500 {
        if *is_open.borrow() {
            return Ok(ws);
        }
        if let Some(reason) = error_reason.borrow().clone() {
            return Err(reason);
        }
        // Yield to allow callbacks to fire
        gloo_timers::future::TimeoutFuture::new(10).await;
    }

    Err("Connection timeout".to_string())
}
