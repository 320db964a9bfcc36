use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DIST_DIR: &str = "ui/dist";
pub const DEFAULT_PUBLIC_API_BASE: &str = "/api";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub dist_dir: PathBuf,
    /// Analytics API the `/api` prefix forwards to. `None` disables the proxy.
    pub upstream_url: Option<String>,
    /// Base URL handed to the SPA through `/config.js`.
    pub public_api_base: String,
    pub require_auth: bool,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let upstream_url = lookup("BI_UPSTREAM_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());
        if upstream_url.is_none() {
            info!("BI_UPSTREAM_URL not set, /api proxy disabled");
        }

        Self {
            port: try_load(&lookup, "BI_PORT", DEFAULT_PORT),
            dist_dir: PathBuf::from(try_load(&lookup, "BI_DIST_DIR", DEFAULT_DIST_DIR.to_string())),
            upstream_url,
            public_api_base: try_load(
                &lookup,
                "BI_PUBLIC_API_BASE",
                DEFAULT_PUBLIC_API_BASE.to_string(),
            ),
            require_auth: flag(&lookup, "BI_REQUIRE_AUTH"),
            upstream_timeout: Duration::from_secs(try_load(
                &lookup,
                "BI_UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key).filter(|s| !s.trim().is_empty()) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    match lookup(key).map(|s| s.trim().to_ascii_lowercase()) {
        None => false,
        Some(v) => match v.as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" | "" => false,
            other => {
                warn!("Invalid {key} value {other:?}, auth stays off");
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let c = config(&[]);
        assert_eq!(c.port, DEFAULT_PORT);
        assert_eq!(c.dist_dir, PathBuf::from("ui/dist"));
        assert_eq!(c.upstream_url, None);
        assert_eq!(c.public_api_base, "/api");
        assert!(!c.require_auth);
        assert_eq!(c.upstream_timeout, Duration::from_secs(15));
    }

    #[test]
    fn reads_overrides() {
        let c = config(&[
            ("BI_PORT", "9000"),
            ("BI_UPSTREAM_URL", "http://analytics:5000/"),
            ("BI_REQUIRE_AUTH", "Yes"),
            ("BI_UPSTREAM_TIMEOUT_SECS", "3"),
        ]);
        assert_eq!(c.port, 9000);
        assert_eq!(c.upstream_url.as_deref(), Some("http://analytics:5000"));
        assert!(c.require_auth);
        assert_eq!(c.upstream_timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config(&[("BI_PORT", "eighty"), ("BI_REQUIRE_AUTH", "maybe"), ("BI_UPSTREAM_URL", "  ")]);
        assert_eq!(c.port, DEFAULT_PORT);
        assert!(!c.require_auth);
        assert_eq!(c.upstream_url, None);
    }
}
