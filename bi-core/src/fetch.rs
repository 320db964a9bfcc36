use std::future::Future;

use futures::future::{join_all, try_join_all};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::endpoint::Endpoint;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("http status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("decode error: {0}")]
    Decode(String),
}

/// Transport for analytics GETs. The browser build implements this with
/// `gloo-net`; tests use an in-memory table.
pub trait Fetch {
    fn get_json(&self, endpoint: &Endpoint) -> impl Future<Output = Result<Value, FetchError>>;
}

/// Issues every request concurrently and fails on the first error.
pub async fn fetch_all<F: Fetch>(
    fetch: &F,
    endpoints: &[Endpoint],
) -> Result<Vec<Value>, FetchError> {
    try_join_all(endpoints.iter().map(|ep| fetch.get_json(ep))).await
}

/// Issues every request concurrently; each result settles on its own.
pub async fn fetch_settled<F: Fetch>(
    fetch: &F,
    endpoints: &[Endpoint],
) -> Vec<Result<Value, FetchError>> {
    join_all(endpoints.iter().map(|ep| fetch.get_json(ep))).await
}

/// Decodes a payload; a `null` body yields the shape's empty default.
pub fn decode<T: DeserializeOwned + Default>(value: Value) -> Result<T, FetchError> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Splits a positional response list into a fixed-size array.
pub(crate) fn take<const N: usize>(values: Vec<Value>) -> Result<[Value; N], FetchError> {
    let got = values.len();
    values
        .try_into()
        .map_err(|_| FetchError::Decode(format!("expected {N} responses, got {got}")))
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Canned responses keyed by `Endpoint::relative()`; unknown endpoints 404.
    #[derive(Default)]
    pub struct StaticFetch {
        responses: HashMap<String, Result<Value, FetchError>>,
        pub seen: RefCell<Vec<String>>,
    }

    impl StaticFetch {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn ok(mut self, relative: &str, body: Value) -> Self {
            self.responses.insert(relative.to_string(), Ok(body));
            self
        }

        pub fn fail(mut self, relative: &str, err: FetchError) -> Self {
            self.responses.insert(relative.to_string(), Err(err));
            self
        }
    }

    impl Fetch for StaticFetch {
        fn get_json(&self, endpoint: &Endpoint) -> impl Future<Output = Result<Value, FetchError>> {
            let key = endpoint.relative();
            self.seen.borrow_mut().push(key.clone());
            let result = self.responses.get(&key).cloned().unwrap_or(Err(FetchError::Status {
                status: 404,
                url: key,
            }));
            std::future::ready(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::StaticFetch;
    use super::*;
    use crate::endpoint::paths;
    use crate::model::LabelValues;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn fetch_all_keeps_request_order() {
        let fetch = StaticFetch::new()
            .ok("/metrics/by-city", json!([1]))
            .ok("/metrics/kpis", json!({"avg_rating": 4}));
        let eps = [Endpoint::new(paths::METRICS_KPIS), Endpoint::new(paths::BY_CITY)];
        let values = block_on(fetch_all(&fetch, &eps)).unwrap();
        assert_eq!(values, vec![json!({"avg_rating": 4}), json!([1])]);
    }

    #[test]
    fn fetch_all_fails_when_any_request_fails() {
        let fetch = StaticFetch::new().ok("/metrics/kpis", json!({}));
        let eps = [Endpoint::new(paths::METRICS_KPIS), Endpoint::new(paths::BY_CITY)];
        let err = block_on(fetch_all(&fetch, &eps)).unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[test]
    fn fetch_settled_reports_each_result() {
        let fetch = StaticFetch::new()
            .ok("/metrics/kpis", json!({}))
            .fail("/metrics/by-city", FetchError::Timeout(15_000));
        let eps = [Endpoint::new(paths::METRICS_KPIS), Endpoint::new(paths::BY_CITY)];
        let results = block_on(fetch_settled(&fetch, &eps));
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(FetchError::Timeout(15_000)));
    }

    #[test]
    fn decode_null_is_default() {
        let lv: LabelValues = decode(Value::Null).unwrap();
        assert_eq!(lv, LabelValues::default());
    }

    #[test]
    fn decode_wrong_shape_is_error() {
        let err = decode::<LabelValues>(json!("oops")).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn take_checks_arity() {
        assert!(take::<2>(vec![json!(1), json!(2)]).is_ok());
        assert!(take::<3>(vec![json!(1)]).is_err());
    }
}
