//! Per-page data loaders.
//!
//! Every page module exposes the same shape: `endpoints()` lists the GETs the
//! page issues, `assemble` turns the positional responses into the page's
//! view model, and `load` runs both against a [`Fetch`](crate::Fetch)
//! transport. KPI rows are produced by `kpis`, which renders loading and
//! missing values consistently across pages.

pub mod analytics;
pub mod consumers;
pub mod home;
pub mod investment;
pub mod marketing;
pub mod owners;
pub mod preferences;
pub mod restaurant;

use crate::format::loading_or;

/// Banner shown when a page could not reach the analytics service.
pub const LOAD_ERROR: &str = "Error: unable to retrieve data from the API.";

/// Accent colour of a KPI tile's left border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Info,
    Warning,
    Danger,
    Secondary,
    Dark,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Primary => "border-left-primary",
            Tone::Success => "border-left-success",
            Tone::Info => "border-left-info",
            Tone::Warning => "border-left-warning",
            Tone::Danger => "border-left-danger",
            Tone::Secondary => "border-left-secondary",
            Tone::Dark => "border-left-dark",
        }
    }
}

/// A rendered headline metric.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiTile {
    pub title: String,
    pub value: String,
    pub tone: Tone,
}

impl KpiTile {
    pub(crate) fn new(title: impl Into<String>, tone: Tone, loading: bool, value: impl FnOnce() -> String) -> Self {
        Self {
            title: title.into(),
            value: loading_or(loading, value),
            tone,
        }
    }
}
