//! Restaurant analytics: top restaurants, average rating by city and price
//! levels by city. The dashboard shows a trimmed copy of the same charts.

use serde_json::Value;

use crate::endpoint::{paths, Endpoint};
use crate::fetch::{decode, fetch_all, take, Fetch, FetchError};
use crate::model::{CityRating, LabeledMatrix, TopRestaurant};
use crate::pivot::{pivot, Row, Table};

pub const TOP_N: u32 = 10;

pub const KEY_RATINGS: &str = "rating_count";
pub const KEY_AVG: &str = "avg_rating";
pub const KEY_CITY_AVG: &str = "avg";

/// The three restaurant charts shared by the dashboard and analytics pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantCharts {
    /// Dimension `name`, series [`KEY_RATINGS`] and [`KEY_AVG`].
    pub top: Table,
    /// Dimension `city`, series [`KEY_CITY_AVG`].
    pub by_city: Table,
    /// Dimension `city`, one series per price level.
    pub price_by_city: Table,
}

impl RestaurantCharts {
    pub fn from_parts(top: Vec<TopRestaurant>, by_city: Vec<CityRating>, prices: LabeledMatrix) -> Self {
        let top = Table::with_rows(
            "name",
            top.into_iter()
                .map(|r| Row::new(r.name).with(KEY_RATINGS, r.rating_count).with(KEY_AVG, r.avg_rating))
                .collect(),
        );
        let by_city = Table::with_rows(
            "city",
            by_city
                .into_iter()
                .map(|c| Row::new(c.city).with(KEY_CITY_AVG, c.avg))
                .collect(),
        );
        Self {
            top,
            by_city,
            price_by_city: pivot(&prices.rows, &prices.cols, &prices.matrix, "city"),
        }
    }

    /// `[0, max + 1]` over the city averages, so the line never touches the top.
    pub fn city_domain(&self) -> (f64, f64) {
        let max = self
            .by_city
            .rows
            .iter()
            .map(|r| r.value(KEY_CITY_AVG))
            .fold(0.0_f64, f64::max);
        (0.0, max + 1.0)
    }
}

pub(crate) fn chart_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(paths::TOP_RESTAURANTS).param("n", TOP_N),
        Endpoint::new(paths::BY_CITY),
        Endpoint::new(paths::PRICE_BY_CITY),
    ]
}

pub(crate) fn assemble_charts(values: [Value; 3]) -> Result<RestaurantCharts, FetchError> {
    let [top, by_city, prices] = values;
    Ok(RestaurantCharts::from_parts(decode(top)?, decode(by_city)?, decode(prices)?))
}

pub fn endpoints() -> Vec<Endpoint> {
    chart_endpoints()
}

pub fn assemble(values: Vec<Value>) -> Result<RestaurantCharts, FetchError> {
    assemble_charts(take::<3>(values)?)
}

pub async fn load<F: Fetch>(fetch: &F) -> Result<RestaurantCharts, FetchError> {
    assemble(fetch_all(fetch, &endpoints()).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fake::StaticFetch;
    use futures::executor::block_on;
    use serde_json::json;

    fn fixture() -> StaticFetch {
        StaticFetch::new()
            .ok(
                "/metrics/top-restaurants?n=10",
                json!([
                    {"Name": "Tortas Locas", "Rating_Count": 36, "Avg_Rating": 1.5},
                    {"Restaurant_ID": 132825, "Rating_Count": 32, "Avg_Rating": 1.2}
                ]),
            )
            .ok(
                "/metrics/by-city",
                json!([{"City": "Cuernavaca", "Avg_Rating": 1.5}, {"city": "Jiutepec", "avg_rating": "0.9"}]),
            )
            .ok(
                "/analytics/price-by-city",
                json!({"cities": ["Cuernavaca"], "prices": ["low", "medium"], "matrix": [[4, 9]]}),
            )
    }

    #[test]
    fn load_builds_all_three_tables() {
        let charts = block_on(load(&fixture())).unwrap();
        assert_eq!(charts.top.labels(), vec!["Tortas Locas", "132825"]);
        assert_eq!(charts.top.rows[0].value(KEY_RATINGS), 36.0);
        assert_eq!(charts.by_city.rows[1].value(KEY_CITY_AVG), 0.9);
        assert_eq!(charts.price_by_city.rows[0].value("medium"), 9.0);
    }

    #[test]
    fn city_domain_pads_the_maximum() {
        let charts = block_on(load(&fixture())).unwrap();
        assert_eq!(charts.city_domain(), (0.0, 2.5));
        assert_eq!(RestaurantCharts::default().city_domain(), (0.0, 1.0));
    }

    #[test]
    fn any_failure_fails_the_page() {
        let fetch = fixture().fail("/metrics/by-city", FetchError::Network("refused".into()));
        assert!(block_on(load(&fetch)).is_err());
    }
}
