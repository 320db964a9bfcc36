//! Franchise owners: loyalty and density KPIs plus the predictive model
//! summary. Unlike other pages each request settles on its own, so a missing
//! model does not hide the KPIs.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{KpiTile, Tone};
use crate::endpoint::{paths, Endpoint};
use crate::fetch::{decode, fetch_settled, Fetch, FetchError};
use crate::format::{fmt_fixed, fmt_percent};
use crate::model::{Kpi, PredictiveSummary};
use crate::pivot::{Row, Table};

pub const LOAD_ERROR: &str = "Unable to retrieve the Franchise Owners data.";
pub const SUMMARY_UNAVAILABLE: &str =
    "The predictive model could not be computed (endpoint /predictive/summary).";
pub const MOCK_WARNING: &str = "Demo mode: mock data in use (CSV files missing).";

pub const LOYALTY_LABEL: &str = "Loyalty Rate %";
pub const DENSITY_LABEL: &str = "Restaurant Density";
pub const KEY_VALUE: &str = "value";
/// Predicted ratings share the 0..5 rating scale.
pub const PREDICTED_DOMAIN: (f64, f64) = (0.0, 5.0);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnersView {
    pub loyalty: Kpi,
    pub density: Kpi,
    pub summary: PredictiveSummary,
    /// Informational notes: the model's own plus any local ones.
    pub messages: Vec<String>,
}

impl OwnersView {
    /// Feature importances, dimension `name`.
    pub fn drivers(&self) -> Table {
        Table::with_rows(
            "name",
            self.summary
                .drivers
                .iter()
                .map(|d| Row::new(d.feature.clone()).with(KEY_VALUE, d.importance))
                .collect(),
        )
    }

    /// Predicted rating per cuisine, dimension `name`.
    pub fn cuisines(&self) -> Table {
        Table::with_rows(
            "name",
            self.summary
                .top_cuisines
                .iter()
                .map(|c| Row::new(c.cuisine.clone()).with(KEY_VALUE, c.predicted_rating))
                .collect(),
        )
    }

    pub fn mock_used(&self) -> bool {
        self.summary.mock_used
    }
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(paths::KPI_LOYALTY_RATE),
        Endpoint::new(paths::KPI_RESTAURANT_DENSITY),
        Endpoint::new(paths::PREDICTIVE_SUMMARY),
    ]
}

fn settle<T: DeserializeOwned + Default>(result: Result<Value, FetchError>) -> Result<T, FetchError> {
    result.and_then(decode::<T>)
}

/// Combines settled results. Fails only when every part failed; the first
/// error is returned in that case.
pub fn assemble(results: Vec<Result<Value, FetchError>>) -> Result<OwnersView, FetchError> {
    let mut results = results.into_iter();
    let mut next = || {
        results
            .next()
            .unwrap_or_else(|| Err(FetchError::Decode("missing response".into())))
    };
    let loyalty: Result<Kpi, _> = settle(next());
    let density: Result<Kpi, _> = settle(next());
    let summary: Result<PredictiveSummary, _> = settle(next());

    if let (Err(e), Err(_), Err(_)) = (&loyalty, &density, &summary) {
        return Err(e.clone());
    }

    let mut view = OwnersView {
        loyalty: loyalty.unwrap_or_default(),
        density: density.unwrap_or_default(),
        ..OwnersView::default()
    };
    match summary {
        Ok(summary) => {
            view.messages = summary.messages.clone();
            view.summary = summary;
        }
        Err(_) => view.messages.push(SUMMARY_UNAVAILABLE.to_string()),
    }
    Ok(view)
}

pub async fn load<F: Fetch>(fetch: &F) -> Result<OwnersView, FetchError> {
    assemble(fetch_settled(fetch, &endpoints()).await)
}

pub fn kpis(view: Option<&OwnersView>, loading: bool) -> Vec<KpiTile> {
    let v = view.cloned().unwrap_or_default();
    vec![
        KpiTile::new(v.loyalty.label_or(LOYALTY_LABEL), Tone::Success, loading, || {
            fmt_percent(v.loyalty.value)
        }),
        KpiTile::new(v.density.label_or(DENSITY_LABEL), Tone::Info, loading, || {
            fmt_fixed(v.density.value, 2)
        }),
        KpiTile::new("Model R²", Tone::Primary, loading, || fmt_fixed(v.summary.r2, 4)),
        KpiTile::new("Model MAE", Tone::Warning, loading, || fmt_fixed(v.summary.mae, 4)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fake::StaticFetch;
    use futures::executor::block_on;
    use serde_json::json;

    fn summary() -> Value {
        json!({
            "r2": 0.41234567,
            "mae": 0.5,
            "n_obs": 1161,
            "drivers": [{"feature": "price", "importance": 0.31}],
            "top_cuisines": [{"cuisine": "Mexican", "predicted_rating": 1.4}],
            "messages": ["trained on 1161 ratings"],
            "mock_used": false
        })
    }

    #[test]
    fn all_parts_present() {
        let fetch = StaticFetch::new()
            .ok("/kpi/loyalty-rate", json!({"value": 62.5, "label": "Loyalty"}))
            .ok("/kpi/restaurant-density", json!({"value": 1.23456}))
            .ok("/predictive/summary", summary());
        let view = block_on(load(&fetch)).unwrap();
        assert_eq!(view.messages, vec!["trained on 1161 ratings"]);
        assert_eq!(view.drivers().rows[0].value(KEY_VALUE), 0.31);
        assert_eq!(view.cuisines().labels(), vec!["Mexican"]);

        let tiles = kpis(Some(&view), false);
        let titles: Vec<&str> = tiles.iter().map(|t| t.title.as_str()).collect();
        let values: Vec<&str> = tiles.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(titles, vec!["Loyalty", DENSITY_LABEL, "Model R²", "Model MAE"]);
        assert_eq!(values, vec!["62.5%", "1.23", "0.4123", "0.5000"]);
    }

    #[test]
    fn summary_failure_keeps_kpis_and_adds_message() {
        let fetch = StaticFetch::new()
            .ok("/kpi/loyalty-rate", json!({"value": 62.5}))
            .ok("/kpi/restaurant-density", json!({"value": 2}))
            .fail("/predictive/summary", FetchError::Status { status: 500, url: "/predictive/summary".into() });
        let view = block_on(load(&fetch)).unwrap();
        assert_eq!(view.loyalty.value, Some(62.5));
        assert_eq!(view.messages, vec![SUMMARY_UNAVAILABLE]);
        assert!(view.drivers().is_empty());
        assert_eq!(kpis(Some(&view), false)[2].value, "—");
    }

    #[test]
    fn one_kpi_failure_is_tolerated() {
        let fetch = StaticFetch::new()
            .ok("/kpi/restaurant-density", json!({"value": 2}))
            .ok("/predictive/summary", summary());
        let view = block_on(load(&fetch)).unwrap();
        assert_eq!(view.loyalty, Kpi::default());
        assert!(view.messages.iter().all(|m| m != SUMMARY_UNAVAILABLE));
    }

    #[test]
    fn total_failure_is_an_error() {
        let fetch = StaticFetch::new().fail("/kpi/loyalty-rate", FetchError::Timeout(15_000));
        assert_eq!(block_on(load(&fetch)), Err(FetchError::Timeout(15_000)));
    }

    #[test]
    fn mock_flag_is_exposed() {
        let fetch = StaticFetch::new().ok("/predictive/summary", json!({"mock_used": true}));
        let view = block_on(load(&fetch)).unwrap();
        assert!(view.mock_used());
        assert!(view.summary.r2.is_none());
    }
}
