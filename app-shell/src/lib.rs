//! Dashboard chrome state: sidebar collapse and the sign-in session.
//!
//! The state is tiny and persisted whole as JSON in `localStorage`.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::Storage;

/// Storage key for [`ShellState`].
pub const STORAGE_KEY: &str = "bi-dashboard.shell";

/// Signed-in session. The token is opaque to the dashboard and only forwarded
/// as a bearer credential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ShellState {
    pub sidebar_collapsed: bool,
    pub session: Option<Session>,
}

impl ShellState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Starts a session. Blank users or tokens are rejected.
    pub fn sign_in(&mut self, user: &str, token: &str) -> bool {
        let (user, token) = (user.trim(), token.trim());
        if user.is_empty() || token.is_empty() {
            return false;
        }
        self.session = Some(Session {
            user: user.to_string(),
            token: token.to_string(),
        });
        true
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }

    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a stored state; anything unreadable starts fresh.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }
}

// ---------- Persistence: localStorage ---------------------------------------
#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<Storage, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let storage = window
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    Ok(storage)
}

/// Save shell state to localStorage as JSON.
#[cfg(target_arch = "wasm32")]
pub fn save(state: &ShellState) -> Result<(), JsValue> {
    let storage = local_storage()?;
    let json = state.to_json().map_err(|e| JsValue::from_str(&e.to_string()))?;
    storage.set_item(STORAGE_KEY, &json)?;
    Ok(())
}

/// Load shell state from localStorage; missing or corrupt entries give the default.
#[cfg(target_arch = "wasm32")]
pub fn load() -> ShellState {
    match local_storage().and_then(|s| s.get_item(STORAGE_KEY)) {
        Ok(Some(json)) => ShellState::from_json(&json),
        _ => ShellState::default(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_state: &ShellState) -> Result<(), String> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> ShellState {
    ShellState::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_requires_user_and_token() {
        let mut state = ShellState::default();
        assert!(!state.sign_in("ana", "  "));
        assert!(!state.signed_in());
        assert!(state.sign_in(" ana ", "abc"));
        assert_eq!(state.token(), Some("abc"));
        assert_eq!(state.session.as_ref().map(|s| s.user.as_str()), Some("ana"));
        state.sign_out();
        assert_eq!(state.token(), None);
    }

    #[test]
    fn state_roundtrip() {
        let mut state = ShellState::default();
        state.toggle_sidebar();
        state.sign_in("ana", "t0k");
        let json = state.to_json().unwrap();
        assert_eq!(ShellState::from_json(&json), state);
    }

    #[test]
    fn stale_or_partial_json_falls_back() {
        assert_eq!(ShellState::from_json("not json"), ShellState::default());
        let partial = ShellState::from_json(r#"{"sidebar_collapsed":true}"#);
        assert!(partial.sidebar_collapsed);
        assert!(partial.session.is_none());
    }
}
