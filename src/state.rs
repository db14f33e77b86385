//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is built once in `main` from the parsed config and handed to
//! the router before serving starts. Handlers reach it through the `State`
//! extractor; the signed cookie jar reaches the signing key through
//! `FromRef`. Nothing in here is mutated after startup.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    cookie_key: Key,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let cookie_key = derive_cookie_key(&config.secret_key);
        Self { config: Arc::new(config), cookie_key }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Stretch the configured secret to the 64 bytes the signing key requires.
fn derive_cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
