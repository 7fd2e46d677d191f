//! Backend endpoint configuration.
//!
//! The project URL and publishable API key are baked in at build time and
//! can be overridden with `MONOLITE_BACKEND_URL` / `MONOLITE_ANON_KEY`.
//! The URL can additionally be changed at runtime (persisted through the
//! storage layer) for pointing a build at a staging backend.

/// Default backend project URL.
pub const DEFAULT_BACKEND_URL: &str = match option_env!("MONOLITE_BACKEND_URL") {
    Some(url) => url,
    None => "https://api.monolite-hr.dev",
};

/// Publishable API key sent with every request. Row-level security on the
/// backend is what actually scopes data access; this key only identifies
/// the project.
pub const DEFAULT_ANON_KEY: &str = match option_env!("MONOLITE_ANON_KEY") {
    Some(key) => key,
    None => "monolite-dev-publishable-key",
};
