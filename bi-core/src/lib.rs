//! Core of the restaurant BI dashboard: the lenient model for the analytics
//! API payloads, the matrix pivot used by every chart, fallback formatting,
//! the client-side route table and one loader per dashboard page.
//!
//! Nothing in here touches the DOM or the network directly; page loaders are
//! generic over [`Fetch`] so the browser transport lives in the `ui` crate.

pub mod de;
pub mod endpoint;
pub mod fetch;
pub mod format;
pub mod model;
pub mod pages;
pub mod pivot;
pub mod routes;

pub use endpoint::Endpoint;
pub use fetch::{decode, fetch_all, fetch_settled, Fetch, FetchError};
pub use model::*;
pub use pivot::{percent_table, pivot, series_table, stack_keys, zip, Row, Table};
pub use routes::{resolve, Page, Resolved, Route, DEFAULT_PAGE};
