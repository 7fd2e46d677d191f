//! Deep-link URL access for cold-start and live callback events.

/// URL scheme registered for OS-level deep links into the app.
pub const SCHEME: &str = "monolite-hr";

/// The URL the app is currently looking at, if the platform exposes one.
///
/// On web this is the full window location, including the query string and
/// fragment the router cannot see.
#[cfg(target_arch = "wasm32")]
pub fn current_url() -> Option<String> {
    let window = web_sys::window()?;
    window.location().href().ok()
}

/// On desktop the OS hands a cold-start deep link to the process as its
/// first argument. There is no warm-start URL event source.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_url() -> Option<String> {
    std::env::args()
        .nth(1)
        .filter(|arg| arg.starts_with(&format!("{SCHEME}://")))
}

/// Suspend the current task for `ms` milliseconds. Backed by the browser
/// timer on web and the tokio timer on desktop.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
