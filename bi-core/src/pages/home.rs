//! Dashboard: restaurant and consumer KPIs over trimmed restaurant charts.

use serde_json::Value;

use super::analytics::{assemble_charts, chart_endpoints, RestaurantCharts};
use super::{KpiTile, Tone};
use crate::endpoint::{paths, Endpoint};
use crate::fetch::{decode, fetch_all, take, Fetch, FetchError};
use crate::format::{fmt_grouped, fmt_percent, fmt_plain};
use crate::model::{Kpi, RestaurantKpis};

/// Cities shown on the average-rating line.
pub const CITY_LIMIT: usize = 15;
/// Cities shown on the price-level stack.
pub const PRICE_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeView {
    pub restaurant: RestaurantKpis,
    pub average_age: Kpi,
    pub budget_score: Kpi,
    pub abstemious_rate: Kpi,
    pub charts: RestaurantCharts,
}

pub fn endpoints() -> Vec<Endpoint> {
    let mut eps = vec![Endpoint::new(paths::METRICS_KPIS)];
    eps.extend(chart_endpoints());
    eps.extend([
        Endpoint::new(paths::KPI_AVERAGE_AGE),
        Endpoint::new(paths::KPI_AVERAGE_BUDGET_SCORE),
        Endpoint::new(paths::KPI_ABSTEMIOUS_RATE),
    ]);
    eps
}

pub fn assemble(values: Vec<Value>) -> Result<HomeView, FetchError> {
    let [kpis, top, by_city, prices, age, budget, abstemious] = take::<7>(values)?;
    let mut charts = assemble_charts([top, by_city, prices])?;
    charts.by_city = charts.by_city.truncated(CITY_LIMIT);
    charts.price_by_city = charts.price_by_city.truncated(PRICE_LIMIT);
    Ok(HomeView {
        restaurant: decode(kpis)?,
        average_age: decode(age)?,
        budget_score: decode(budget)?,
        abstemious_rate: decode(abstemious)?,
        charts,
    })
}

pub async fn load<F: Fetch>(fetch: &F) -> Result<HomeView, FetchError> {
    assemble(fetch_all(fetch, &endpoints()).await?)
}

/// Restaurant KPI row.
pub fn restaurant_kpis(view: Option<&HomeView>, loading: bool) -> Vec<KpiTile> {
    let k = view.map(|v| v.restaurant.clone()).unwrap_or_default();
    vec![
        KpiTile::new("Reviews", Tone::Primary, loading, || fmt_grouped(k.total_reviews)),
        KpiTile::new("Average Rating", Tone::Success, loading, || fmt_plain(k.avg_rating)),
        KpiTile::new("Restaurants", Tone::Info, loading, || fmt_grouped(k.restaurants)),
        KpiTile::new("Alcohol Clean %", Tone::Warning, loading, || fmt_percent(k.alcohol_clean_pct)),
    ]
}

/// Consumer KPI row.
pub fn consumer_kpis(view: Option<&HomeView>, loading: bool) -> Vec<KpiTile> {
    let (age, budget, abstemious) = match view {
        Some(v) => (v.average_age.value, v.budget_score.value, v.abstemious_rate.value),
        None => (None, None, None),
    };
    vec![
        KpiTile::new("Average Age", Tone::Dark, loading, || fmt_plain(age)),
        KpiTile::new("Budget Score (1–3)", Tone::Secondary, loading, || fmt_plain(budget)),
        KpiTile::new("% Abstemious", Tone::Danger, loading, || fmt_percent(abstemious)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fake::StaticFetch;
    use futures::executor::block_on;
    use serde_json::json;

    fn cities(n: usize) -> Value {
        Value::Array((0..n).map(|i| json!({"City": format!("c{i}"), "Avg_Rating": 1.0})).collect())
    }

    fn fixture() -> StaticFetch {
        let price_cities: Vec<String> = (0..12).map(|i| format!("c{i}")).collect();
        StaticFetch::new()
            .ok(
                "/metrics/kpis",
                json!({"total_reviews": 1161, "avg_rating": 1.1993, "restaurants": 130, "alcohol_clean_pct": 33.8}),
            )
            .ok("/metrics/top-restaurants?n=10", json!([]))
            .ok("/metrics/by-city", cities(20))
            .ok(
                "/analytics/price-by-city",
                json!({"cities": price_cities, "prices": ["low"], "matrix": []}),
            )
            .ok("/kpi/average-age", json!({"value": 26.7, "label": "Average age"}))
            .ok("/kpi/average-budget-score", json!({"value": null}))
            .ok("/kpi/abstemious-rate", json!({"value": 27.3}))
    }

    #[test]
    fn load_issues_seven_requests_and_trims_charts() {
        let fetch = fixture();
        let view = block_on(load(&fetch)).unwrap();
        assert_eq!(fetch.seen.borrow().len(), 7);
        assert_eq!(view.charts.by_city.len(), CITY_LIMIT);
        assert_eq!(view.charts.price_by_city.len(), PRICE_LIMIT);
        assert_eq!(view.charts.price_by_city.rows[3].value("low"), 0.0);
    }

    #[test]
    fn kpi_rows_format_values() {
        let view = block_on(load(&fixture())).unwrap();
        let values: Vec<String> = restaurant_kpis(Some(&view), false).into_iter().map(|t| t.value).collect();
        assert_eq!(values, vec!["1,161", "1.1993", "130", "33.8%"]);

        let values: Vec<String> = consumer_kpis(Some(&view), false).into_iter().map(|t| t.value).collect();
        assert_eq!(values, vec!["26.7", "—", "27.3%"]);
    }

    #[test]
    fn kpi_rows_while_loading_and_after_failure() {
        assert!(restaurant_kpis(None, true).iter().all(|t| t.value == "…"));
        assert!(consumer_kpis(None, false).iter().all(|t| t.value == "—"));
    }

    #[test]
    fn a_single_failed_kpi_fails_the_page() {
        let fetch = fixture().fail("/kpi/abstemious-rate", FetchError::Timeout(15_000));
        assert_eq!(block_on(load(&fetch)), Err(FetchError::Timeout(15_000)));
    }
}
