//! `gloo-net` transport for the analytics API.

use std::future::Future;

use bi_core::{Endpoint, Fetch, FetchError};
use serde_json::Value;

/// Per-request deadline.
pub const TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpFetch {
    base: String,
    token: Option<String>,
}

impl HttpFetch {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(&self.base)
    }

    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

/// Parses a response body; an empty body reads as JSON `null`.
pub fn parse_body(text: &str) -> Result<Value, FetchError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn send(url: String, authorization: Option<String>) -> Result<Value, FetchError> {
    use gloo_net::http::Request;

    let mut req = Request::get(&url).header("Accept", "application/json");
    if let Some(auth) = &authorization {
        req = req.header("Authorization", auth);
    }
    let resp = req
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status {
            status: resp.status(),
            url,
        });
    }
    let text = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    parse_body(&text)
}

#[cfg(target_arch = "wasm32")]
async fn get_with_timeout(url: String, authorization: Option<String>) -> Result<Value, FetchError> {
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let request = Box::pin(send(url.clone(), authorization));
    let timeout = Box::pin(TimeoutFuture::new(TIMEOUT_MS));
    let result = match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(FetchError::Timeout(TIMEOUT_MS)),
    };
    if let Err(e) = &result {
        crate::log::warn(&format!("GET {url} failed: {e}"));
    }
    result
}

impl Fetch for HttpFetch {
    #[cfg(target_arch = "wasm32")]
    fn get_json(&self, endpoint: &Endpoint) -> impl Future<Output = Result<Value, FetchError>> {
        get_with_timeout(self.url(endpoint), self.authorization())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_json(&self, endpoint: &Endpoint) -> impl Future<Output = Result<Value, FetchError>> {
        std::future::ready(Err(FetchError::Network(format!(
            "no browser transport for {}",
            self.url(endpoint)
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bi_core::endpoint::paths;

    #[test]
    fn urls_join_base_and_query() {
        let fetch = HttpFetch::new("https://bi.example.com/api/", None);
        let ep = Endpoint::new(paths::INVESTOR_KPIS).param("city", "San Luis Potosí");
        assert_eq!(
            fetch.url(&ep),
            "https://bi.example.com/api/investor/kpis?city=San+Luis+Potos%C3%AD"
        );
    }

    #[test]
    fn bearer_header_only_with_token() {
        assert_eq!(HttpFetch::new("/api", None).authorization(), None);
        assert_eq!(
            HttpFetch::new("/api", Some("abc".into())).authorization().as_deref(),
            Some("Bearer abc")
        );
    }

    #[test]
    fn empty_body_is_null() {
        assert_eq!(parse_body("  "), Ok(Value::Null));
        assert_eq!(parse_body("[1]"), Ok(serde_json::json!([1])));
        assert!(matches!(parse_body("<html>"), Err(FetchError::Decode(_))));
    }
}
