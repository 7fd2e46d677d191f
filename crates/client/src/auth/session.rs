//! Authentication session context with persistent storage.

use dioxus::prelude::*;
use monolite_shared::{ApiError, AuthUser, Session};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::BackendClient;
use crate::config::{DEFAULT_ANON_KEY, DEFAULT_BACKEND_URL};
use crate::{realtime, storage, stores};

const SESSION_KEY: &str = "monolite_session";
const BACKEND_URL_KEY: &str = "monolite_backend_url";

/// Auth context provided to the app.
///
/// The session signal has a single writer (the sign-in flows and the
/// callback resolver); every other component only reads it.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub session: SyncSignal<Option<AuthSession>>,
    pub backend_url: SyncSignal<String>,
}

/// Stored session data: the backend-issued token pair plus the identity it
/// belongs to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: AuthUser,
}

impl From<Session> for AuthSession {
    fn from(session: Session) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            user: session.user,
        }
    }
}

/// Provider component that sets up the auth context
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal_sync(|| storage::load::<AuthSession>(SESSION_KEY));
    let backend_url = use_signal_sync(|| {
        storage::load::<String>(BACKEND_URL_KEY)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
    });

    // Mirror the session into persistent storage
    use_effect(move || match session.read().as_ref() {
        Some(sess) => {
            storage::save(SESSION_KEY, sess);
        }
        None => storage::remove(SESSION_KEY),
    });

    use_effect(move || {
        let url = backend_url.cloned();
        storage::save(BACKEND_URL_KEY, &url);
    });

    // Revalidate a hydrated session once per launch. A refresh token the
    // backend rejects means the session is gone; anything else (offline
    // start, flaky network) leaves the stored tokens alone.
    use_future(move || async move {
        let ctx = AuthContext {
            session,
            backend_url,
        };
        let Some(refresh) = session.peek().as_ref().map(|s| s.refresh_token.clone()) else {
            return;
        };
        match ctx.client().refresh_session(&refresh).await {
            Ok(fresh) => ctx.apply_session(fresh),
            Err(ApiError::Http { status, .. }) if status == 400 || status == 401 || status == 403 => {
                crate::log_warn!("Stored session rejected by the backend, signing out");
                ctx.sign_out();
            }
            Err(e) => crate::log_warn!("Session refresh failed: {}", e.user_message()),
        }
    });

    use_context_provider(|| AuthContext {
        session,
        backend_url,
    });

    children
}

impl AuthContext {
    /// Apply a backend session (password sign-in or callback resolution).
    pub fn apply_session(&self, session: Session) {
        let mut slot = self.session;
        slot.set(Some(session.into()));
    }

    /// Drop the local session and every cache derived from it. Revoking the
    /// session on the backend is the caller's job (it needs the token that
    /// is being dropped).
    pub fn sign_out(&self) {
        realtime::clear_connection();
        stores::clear_all();
        storage::remove(SESSION_KEY);
        let mut slot = self.session;
        slot.set(None);
    }

    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// Get the current user id
    pub fn user_id(&self) -> Option<Uuid> {
        self.session.read().as_ref().map(|s| s.user.id)
    }

    /// Get the current user's email, when the backend reported one
    pub fn user_email(&self) -> Option<String> {
        self.session
            .read()
            .as_ref()
            .and_then(|s| s.user.email.clone())
    }

    /// Create a backend client configured for the current session
    pub fn client(&self) -> BackendClient {
        let access = self
            .session
            .read()
            .as_ref()
            .map(|s| s.access_token.clone());
        BackendClient::new(self.api_base_url(), DEFAULT_ANON_KEY).with_access_token(access)
    }

    /// The backend base URL with a scheme attached
    fn api_base_url(&self) -> String {
        let configured = self.backend_url.read().clone();
        let trimmed = configured.trim_end_matches('/');

        if trimmed.contains("://") {
            return trimmed.to_string();
        }

        // Bare hosts get a scheme inferred: plain http for local development
        // addresses, https for everything else
        let host_part = trimmed.split(':').next().unwrap_or(trimmed);
        let is_local = host_part == "localhost"
            || host_part == "127.0.0.1"
            || host_part == "0.0.0.0"
            || host_part.starts_with("192.168.")
            || host_part.starts_with("10.");

        if is_local {
            format!("http://{trimmed}")
        } else {
            format!("https://{trimmed}")
        }
    }

    /// Construct a URL under the backend base
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_base_url();
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Realtime WebSocket URL for the current session, or `None` while
    /// signed out. Credentials ride in the query string because browser
    /// WebSockets cannot set headers.
    pub fn realtime_url(&self) -> Option<String> {
        let access = self
            .session
            .read()
            .as_ref()
            .map(|s| s.access_token.clone())?;
        let http_url = self.api_url("/realtime/v1/socket");
        let ws_url = http_to_ws(&http_url);
        Some(format!(
            "{}?apikey={}&access_token={}",
            ws_url,
            urlencoding::encode(DEFAULT_ANON_KEY),
            urlencoding::encode(&access)
        ))
    }
}

/// Convert an HTTP/HTTPS URL to WS/WSS
fn http_to_ws(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = url.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::http_to_ws;

    #[test]
    fn rewrites_schemes() {
        assert_eq!(
            http_to_ws("https://api.example.test/realtime/v1/socket"),
            "wss://api.example.test/realtime/v1/socket"
        );
        assert_eq!(
            http_to_ws("http://localhost:8000/realtime/v1/socket"),
            "ws://localhost:8000/realtime/v1/socket"
        );
    }
}
