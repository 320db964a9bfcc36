//! Marketing insights.

use serde_json::Value;

use super::{KpiTile, Tone};
use crate::endpoint::{paths, Endpoint};
use crate::fetch::{decode, fetch_all, take, Fetch, FetchError};
use crate::format::fmt_fixed;
use crate::model::{Kpi, LabelValues, LabeledMatrix};
use crate::pivot::{pivot, zip, Row, Table};

pub const KPI_FALLBACK_LABEL: &str = "Average rating";
pub const KEY_VALUE: &str = "value";
pub const KEY_PERCENT: &str = "percent";
pub const KEY_COUNT: &str = "Count";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketingView {
    pub avg_rating: Kpi,
    pub occupation_budget: Table,
    /// Dimension `name`, series [`KEY_VALUE`] and [`KEY_PERCENT`].
    pub top_restaurants: Table,
    /// Grouped, not stacked: one series per rating quality.
    pub quality_by_name: Table,
    pub cuisine_preferences: Table,
    pub age_bins: Table,
}

fn donut(lv: &LabelValues) -> Table {
    let rows = lv
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            Row::new(label.clone())
                .with(KEY_VALUE, lv.values.get(i).copied().unwrap_or(0.0))
                .with(KEY_PERCENT, lv.percents.get(i).copied().unwrap_or(0.0))
        })
        .collect();
    Table::with_rows("name", rows)
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(paths::KPI_AVG_RATING),
        Endpoint::new(paths::CONSUMERS_OCCUPATION_BUDGET),
        Endpoint::new(paths::RATINGS_COUNT_TOP10),
        Endpoint::new(paths::RATINGS_QUAL_BY_NAME),
        Endpoint::new(paths::PREF_CUISINE_TOP10),
        Endpoint::new(paths::CONSUMERS_AGE_BINS),
    ]
}

pub fn assemble(values: Vec<Value>) -> Result<MarketingView, FetchError> {
    let [kpi, occupation, top, quality, cuisine, ages] = take::<6>(values)?;
    let occupation: LabeledMatrix = decode(occupation)?;
    let quality: LabeledMatrix = decode(quality)?;
    let cuisine: LabelValues = decode(cuisine)?;
    let ages: LabelValues = decode(ages)?;
    Ok(MarketingView {
        avg_rating: decode(kpi)?,
        occupation_budget: pivot(&occupation.rows, &occupation.cols, &occupation.matrix, "occupation"),
        top_restaurants: donut(&decode(top)?),
        quality_by_name: pivot(&quality.rows, &quality.cols, &quality.matrix, "name"),
        cuisine_preferences: zip(&cuisine.labels, &cuisine.values, "Cuisine", KEY_COUNT),
        age_bins: zip(&ages.labels, &ages.values, "AgeBin", KEY_COUNT),
    })
}

pub async fn load<F: Fetch>(fetch: &F) -> Result<MarketingView, FetchError> {
    assemble(fetch_all(fetch, &endpoints()).await?)
}

pub fn kpis(view: Option<&MarketingView>, loading: bool) -> Vec<KpiTile> {
    let kpi = view.map(|v| v.avg_rating.clone()).unwrap_or_default();
    let title = kpi.label_or(KPI_FALLBACK_LABEL).to_string();
    vec![KpiTile::new(title, Tone::Warning, loading, || fmt_fixed(kpi.value, 2))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fake::StaticFetch;
    use futures::executor::block_on;
    use serde_json::json;

    fn fixture(kpi: Value) -> StaticFetch {
        StaticFetch::new()
            .ok("/kpi/avg-rating", kpi)
            .ok(
                "/analytics/consumers-occupation-budget",
                json!({"occupations": ["student", "employed"], "budgets": ["low", "medium"], "matrix": [[10, 80], [5]]}),
            )
            .ok(
                "/analytics/ratings-count-top10",
                json!({"labels": ["Tortas", "Cafe"], "values": [36, 12], "percents": [75.0, 25.0]}),
            )
            .ok(
                "/analytics/ratings-qual-by-name",
                json!({"names": ["Tortas"], "categories": ["bad", "good"], "matrix": [[4, 20]]}),
            )
            .ok("/analytics/pref-cuisine-top10", json!({"labels": ["Mexican"], "values": [97]}))
            .ok("/analytics/consumers-age-bins", json!({"labels": ["18-24", "25-34"], "values": [74, 38]}))
    }

    #[test]
    fn load_reshapes_every_chart() {
        let view = block_on(load(&fixture(json!({"value": 1.19934, "label": null})))).unwrap();
        assert_eq!(view.occupation_budget.rows[1].value("medium"), 0.0);
        assert_eq!(view.top_restaurants.rows[0].value(KEY_PERCENT), 75.0);
        assert_eq!(view.quality_by_name.keys(), vec!["bad", "good"]);
        assert_eq!(view.cuisine_preferences.dim, "Cuisine");
        assert_eq!(view.age_bins.rows[1].value(KEY_COUNT), 38.0);
    }

    #[test]
    fn kpi_uses_fallback_label_and_two_decimals() {
        let view = block_on(load(&fixture(json!({"value": 1.19934, "label": ""})))).unwrap();
        let tiles = kpis(Some(&view), false);
        let tile = &tiles[0];
        assert_eq!(tile.title, KPI_FALLBACK_LABEL);
        assert_eq!(tile.value, "1.20");

        let view = block_on(load(&fixture(json!({"value": 4, "label": "Mean rating"})))).unwrap();
        let tiles = kpis(Some(&view), false);
        let tile = &tiles[0];
        assert_eq!(tile.title, "Mean rating");
        assert_eq!(tile.value, "4.00");
    }

    #[test]
    fn kpi_placeholder_when_value_missing() {
        assert_eq!(kpis(None, false)[0].value, "—");
        assert_eq!(kpis(None, true)[0].value, "…");
    }
}
