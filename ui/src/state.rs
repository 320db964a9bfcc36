use app_shell::ShellState;
use bi_core::{resolve, Route};
use leptos::*;

use crate::api::HttpFetch;

pub const DEFAULT_API_BASE: &str = "/api";

/// Deployment settings injected by the host page through `/config.js`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub api_base: String,
    pub require_auth: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            require_auth: false,
        }
    }
}

impl RuntimeConfig {
    /// Builds the config from raw global values; blanks fall back to defaults.
    pub fn from_values(api_base: Option<String>, require_auth: Option<String>) -> Self {
        let api_base = api_base
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let require_auth = require_auth
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);
        Self { api_base, require_auth }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_globals() -> Self {
        Self::from_values(read_global("BI_API_BASE"), read_global("BI_REQUIRE_AUTH"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_globals() -> Self {
        Self::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global(key: &str) -> Option<String> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(key)).ok()?;
    value
        .as_string()
        .or_else(|| value.as_bool().map(|b| b.to_string()))
}

#[derive(Clone, Copy)]
pub struct AppCtx {
    pub config: StoredValue<RuntimeConfig>,
    pub shell: RwSignal<ShellState>,
    pub route: RwSignal<Route>,
    /// Page requested before the auth guard redirected to sign-in.
    pub login_from: RwSignal<Option<String>>,
}

impl AppCtx {
    /// Transport for the current session.
    pub fn fetcher(&self) -> HttpFetch {
        let base = self.config.with_value(|c| c.api_base.clone());
        let token = self.shell.with_untracked(|s| s.token().map(str::to_string));
        HttpFetch::new(base, token)
    }

    pub fn require_auth(&self) -> bool {
        self.config.with_value(|c| c.require_auth)
    }
}

pub fn provide_app_ctx(config: RuntimeConfig, initial_path: &str) -> AppCtx {
    let ctx = AppCtx {
        config: store_value(config),
        shell: create_rw_signal(app_shell::load()),
        route: create_rw_signal(resolve(initial_path).route),
        login_from: create_rw_signal(None),
    };
    provide_context(ctx.clone());

    let shell = ctx.shell;
    create_effect(move |_| {
        let snapshot = shell.get();
        if let Err(e) = app_shell::save(&snapshot) {
            crate::log::error(&format!("could not persist shell state: {e:?}"));
        }
    });
    ctx
}

pub fn use_app_ctx() -> AppCtx {
    use_context::<AppCtx>().expect("AppCtx not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_globals_use_defaults() {
        let cfg = RuntimeConfig::from_values(Some("  ".into()), None);
        assert_eq!(cfg, RuntimeConfig::default());
    }

    #[test]
    fn auth_flag_accepts_common_truthy_values() {
        for raw in ["true", "TRUE", "1", " yes "] {
            assert!(RuntimeConfig::from_values(None, Some(raw.into())).require_auth);
        }
        assert!(!RuntimeConfig::from_values(None, Some("false".into())).require_auth);
    }

    #[test]
    fn api_base_is_trimmed() {
        let cfg = RuntimeConfig::from_values(Some(" https://bi.example.com/api ".into()), None);
        assert_eq!(cfg.api_base, "https://bi.example.com/api");
    }
}
