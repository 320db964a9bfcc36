//! Payload shapes returned by the analytics service.
//!
//! All shapes implement `Default` so a `null` body or a missing field
//! degrades to an empty chart instead of an error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::de::{self, serde_fields};

/// A single headline metric (`{value, label}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpi {
    #[serde(deserialize_with = "serde_fields::opt_f64")]
    pub value: Option<f64>,
    #[serde(deserialize_with = "serde_fields::opt_label")]
    pub label: Option<String>,
}

impl Kpi {
    /// Label from the payload, or `fallback` when absent or blank.
    pub fn label_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.label.as_deref() {
            Some(l) if !l.trim().is_empty() => l,
            _ => fallback,
        }
    }
}

/// Parallel `labels` / `values` arrays, optionally with `percents`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelValues {
    #[serde(deserialize_with = "serde_fields::labels")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "serde_fields::numbers")]
    pub values: Vec<f64>,
    #[serde(deserialize_with = "serde_fields::numbers")]
    pub percents: Vec<f64>,
}

/// Histogram as bin starts and counts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Histogram {
    #[serde(deserialize_with = "serde_fields::numbers")]
    pub bins: Vec<f64>,
    #[serde(deserialize_with = "serde_fields::numbers")]
    pub counts: Vec<f64>,
}

/// A `(row labels, column labels, matrix)` triple. The service names the
/// three arrays per endpoint (`cities`/`prices`/`matrix`,
/// `occupations`/`buckets`/`matrix`, `cuisines`/`buckets`/`matrix_pct`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabeledMatrix {
    #[serde(
        alias = "cities",
        alias = "occupations",
        alias = "names",
        alias = "cuisines",
        deserialize_with = "serde_fields::labels"
    )]
    pub rows: Vec<String>,
    #[serde(
        alias = "prices",
        alias = "levels",
        alias = "buckets",
        alias = "budgets",
        alias = "categories",
        deserialize_with = "serde_fields::labels"
    )]
    pub cols: Vec<String>,
    #[serde(alias = "matrix_pct", deserialize_with = "serde_fields::matrix")]
    pub matrix: Vec<Vec<f64>>,
}

impl LabeledMatrix {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty() || self.matrix.is_empty()
    }
}

/// Several named series over shared labels (`{labels, series: {High: [..]}}`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MultiSeries {
    #[serde(deserialize_with = "serde_fields::labels")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "serde_fields::series_map")]
    pub series: BTreeMap<String, Vec<f64>>,
}

/// `/metrics/kpis`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RestaurantKpis {
    #[serde(deserialize_with = "serde_fields::opt_f64")]
    pub total_reviews: Option<f64>,
    #[serde(deserialize_with = "serde_fields::opt_f64")]
    pub avg_rating: Option<f64>,
    #[serde(deserialize_with = "serde_fields::opt_f64")]
    pub restaurants: Option<f64>,
    #[serde(deserialize_with = "serde_fields::opt_f64")]
    pub alcohol_clean_pct: Option<f64>,
}

/// `/investor/kpis`, optionally filtered by city.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvestorKpis {
    #[serde(deserialize_with = "serde_fields::f64_or_zero")]
    pub restaurants: f64,
    #[serde(deserialize_with = "serde_fields::f64_or_zero")]
    pub consumers: f64,
    #[serde(deserialize_with = "serde_fields::f64_or_zero")]
    pub cities: f64,
    #[serde(deserialize_with = "serde_fields::opt_f64")]
    pub avg_rating: Option<f64>,
}

/// Row of `/metrics/top-restaurants`. Column casing differs between
/// backend versions, so every field has a list of accepted keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopRestaurant {
    pub name: String,
    pub rating_count: f64,
    pub avg_rating: f64,
}

impl<'de> Deserialize<'de> for TopRestaurant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        let name = de::pick_label(&v, &["Name", "name"])
            .or_else(|| de::pick_label(&v, &["Restaurant_ID", "id"]))
            .unwrap_or_default();
        Ok(Self {
            name,
            rating_count: de::pick_number(&v, &["Rating_Count", "rating_count", "count"])
                .unwrap_or(0.0),
            avg_rating: de::pick_number(&v, &["Avg_Rating", "avg_rating", "avg"]).unwrap_or(0.0),
        })
    }
}

/// Row of `/metrics/by-city`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityRating {
    pub city: String,
    pub avg: f64,
}

impl<'de> Deserialize<'de> for CityRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        Ok(Self {
            city: de::pick_label(&v, &["City", "city"]).unwrap_or_default(),
            avg: de::pick_number(&v, &["Avg_Rating", "avg_rating"]).unwrap_or(0.0),
        })
    }
}

/// Row of `/analytics/avg-vs-count`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AvgVsCount {
    #[serde(deserialize_with = "serde_fields::labels_one")]
    pub label: String,
    #[serde(deserialize_with = "serde_fields::f64_or_zero")]
    pub ratings_count: f64,
    #[serde(deserialize_with = "serde_fields::f64_or_zero")]
    pub avg_overall: f64,
}

/// Feature importance from the predictive model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Driver {
    pub feature: String,
    pub importance: f64,
}

impl<'de> Deserialize<'de> for Driver {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        Ok(Self {
            feature: de::pick_label(&v, &["feature", "raw_feature"]).unwrap_or_default(),
            importance: de::pick_number(&v, &["importance"]).unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CuisinePrediction {
    #[serde(deserialize_with = "serde_fields::labels_one")]
    pub cuisine: String,
    #[serde(deserialize_with = "serde_fields::f64_or_zero")]
    pub predicted_rating: f64,
}

/// `/predictive/summary`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PredictiveSummary {
    #[serde(deserialize_with = "serde_fields::opt_f64")]
    pub r2: Option<f64>,
    #[serde(deserialize_with = "serde_fields::opt_f64")]
    pub mae: Option<f64>,
    #[serde(deserialize_with = "serde_fields::f64_or_zero")]
    pub n_obs: f64,
    #[serde(deserialize_with = "serde_fields::list")]
    pub drivers: Vec<Driver>,
    #[serde(deserialize_with = "serde_fields::list")]
    pub top_cuisines: Vec<CuisinePrediction>,
    #[serde(deserialize_with = "serde_fields::strings")]
    pub messages: Vec<String>,
    #[serde(deserialize_with = "serde_fields::loose_bool")]
    pub mock_used: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::decode;
    use serde_json::json;

    #[test]
    fn kpi_missing_fields_are_none() {
        let kpi: Kpi = decode(json!({})).unwrap();
        assert_eq!(kpi.value, None);
        assert_eq!(kpi.label_or("Average rating"), "Average rating");

        let kpi: Kpi = decode(json!({"value": "3.87", "label": "Moyenne"})).unwrap();
        assert_eq!(kpi.value, Some(3.87));
        assert_eq!(kpi.label_or("x"), "Moyenne");
    }

    #[test]
    fn matrix_accepts_every_field_naming() {
        let m: LabeledMatrix = decode(json!({
            "cuisines": ["Mexican", "Bar"],
            "buckets": ["Low", "High"],
            "matrix_pct": [[0.25, 0.75], [1.0, null]]
        }))
        .unwrap();
        assert_eq!(m.rows, vec!["Mexican", "Bar"]);
        assert_eq!(m.cols, vec!["Low", "High"]);
        assert_eq!(m.matrix, vec![vec![0.25, 0.75], vec![1.0, 0.0]]);

        let m: LabeledMatrix = decode(json!({"names": ["A"], "categories": ["good"], "matrix": null}))
            .unwrap();
        assert!(m.matrix.is_empty());
        assert!(m.is_empty());
    }

    #[test]
    fn top_restaurant_falls_back_through_key_variants() {
        let rows: Vec<TopRestaurant> = decode(json!([
            {"Name": "Tortas Locas", "Rating_Count": 36, "Avg_Rating": 1.5},
            {"Restaurant_ID": 132825, "count": "12", "avg": 1.2},
            {}
        ]))
        .unwrap();
        assert_eq!(rows[0].name, "Tortas Locas");
        assert_eq!(rows[1].name, "132825");
        assert_eq!(rows[1].rating_count, 12.0);
        assert_eq!(rows[2], TopRestaurant::default());
    }

    #[test]
    fn predictive_summary_tolerates_partial_payload() {
        let s: PredictiveSummary = decode(json!({
            "r2": 0.4123,
            "drivers": [{"raw_feature": "price", "importance": 0.3}],
            "mock_used": "true"
        }))
        .unwrap();
        assert_eq!(s.r2, Some(0.4123));
        assert_eq!(s.mae, None);
        assert_eq!(s.drivers[0].feature, "price");
        assert!(s.mock_used);
        assert!(s.top_cuisines.is_empty());
    }

    #[test]
    fn multi_series_reads_named_arrays() {
        let m: MultiSeries = decode(json!({
            "labels": [20, 30],
            "series": {"High": [1, 2], "Low": [3]}
        }))
        .unwrap();
        assert_eq!(m.labels, vec!["20", "30"]);
        assert_eq!(m.series["Low"], vec![3.0]);
    }
}
