//! Investment: city-filtered KPIs and market structure charts.
//!
//! The city list is loaded once from the price-by-city matrix; every other
//! request is reissued when the selection changes. Responses for a superseded
//! selection are discarded through [`Generation`].

use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;

use super::preferences::name_value;
use super::{KpiTile, Tone};
use crate::endpoint::{paths, Endpoint};
use crate::fetch::{decode, fetch_all, take, Fetch, FetchError};
use crate::format::fmt_plain;
use crate::model::{InvestorKpis, LabelValues, LabeledMatrix};
use crate::pivot::{percent_table, pivot, zip, Table};

/// Selector entry meaning "no city filter".
pub const ALL_CITIES: &str = "All";
pub const BOOT_ERROR: &str = "Unable to load the city list.";
pub const KEY_COUNT: &str = "count";

/// City list plus the full price-by-city matrix it was read from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityIndex {
    pub cities: Vec<String>,
    pub price_by_city: Table,
}

impl CityIndex {
    /// Selector entries: [`ALL_CITIES`] first, then every city.
    pub fn options(&self) -> Vec<String> {
        std::iter::once(ALL_CITIES.to_string())
            .chain(self.cities.iter().cloned())
            .collect()
    }

    /// Price levels for the selection: every city, or only the selected
    /// one (empty when the city is not in the matrix).
    pub fn price_chart(&self, city: Option<&str>) -> Table {
        match city {
            Some(c) => self.price_by_city.select(c),
            None => self.price_by_city.clone(),
        }
    }
}

/// Maps a selector value to the `city` query parameter.
pub fn city_filter(selection: &str) -> Option<&str> {
    match selection.trim() {
        "" | ALL_CITIES => None,
        city => Some(city),
    }
}

pub fn boot_endpoint() -> Endpoint {
    Endpoint::new(paths::PRICE_BY_CITY)
}

pub fn assemble_boot(value: Value) -> Result<CityIndex, FetchError> {
    let m: LabeledMatrix = decode(value)?;
    Ok(CityIndex {
        price_by_city: pivot(&m.rows, &m.cols, &m.matrix, "city"),
        cities: m.rows,
    })
}

pub async fn load_boot<F: Fetch>(fetch: &F) -> Result<CityIndex, FetchError> {
    assemble_boot(fetch.get_json(&boot_endpoint()).await?)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentView {
    pub kpis: InvestorKpis,
    /// Restaurants per price level for the selection.
    pub price_counts: Table,
    pub top_cuisines: Table,
    /// Dimension `name`, series [`KEY_COUNT`].
    pub franchises: Table,
    /// Percent shares per price bucket, each row summing to about 100.
    pub cuisines_by_price: Table,
}

pub fn endpoints(city: Option<&str>) -> Vec<Endpoint> {
    [
        paths::INVESTOR_KPIS,
        paths::PRICE_COUNT_STACKED,
        paths::TOP_CUISINES,
        paths::FRANCHISE_COUNT,
        paths::TOP_CUISINES_BY_PRICE_100,
    ]
    .into_iter()
    .map(|p| Endpoint::new(p).opt_param("city", city))
    .collect()
}

pub fn assemble(values: Vec<Value>) -> Result<InvestmentView, FetchError> {
    let [kpis, price_counts, top, franchises, shares] = take::<5>(values)?;
    let franchises: LabelValues = decode(franchises)?;
    let shares: LabeledMatrix = decode(shares)?;
    Ok(InvestmentView {
        kpis: decode(kpis)?,
        price_counts: name_value(&decode(price_counts)?),
        top_cuisines: name_value(&decode(top)?),
        franchises: zip(&franchises.labels, &franchises.values, "name", KEY_COUNT),
        cuisines_by_price: percent_table(&shares.rows, &shares.cols, &shares.matrix, "cuisine"),
    })
}

pub async fn load<F: Fetch>(fetch: &F, city: Option<&str>) -> Result<InvestmentView, FetchError> {
    assemble(fetch_all(fetch, &endpoints(city)).await?)
}

pub fn kpis(view: Option<&InvestmentView>, loading: bool) -> Vec<KpiTile> {
    let k = view.map(|v| v.kpis.clone()).unwrap_or_default();
    let have = view.is_some();
    let count = |v: f64| fmt_plain(have.then_some(v));
    vec![
        KpiTile::new("Restaurants", Tone::Primary, loading, || count(k.restaurants)),
        KpiTile::new("Consumers", Tone::Success, loading, || count(k.consumers)),
        KpiTile::new("Cities", Tone::Info, loading, || count(k.cities)),
        KpiTile::new("Avg Rating", Tone::Warning, loading, || fmt_plain(k.avg_rating)),
    ]
}

/// Monotonic load counter. Each reload takes a ticket with [`begin`]; a
/// response is applied only while its ticket is still the latest.
///
/// [`begin`]: Generation::begin
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fake::StaticFetch;
    use futures::executor::block_on;
    use serde_json::json;

    fn boot() -> StaticFetch {
        StaticFetch::new().ok(
            "/analytics/price-by-city",
            json!({"cities": ["Cuernavaca", "San Luis Potosi"], "prices": ["Low", "High"], "matrix": [[3, 1], [20, 4]]}),
        )
    }

    fn city_data(fetch: StaticFetch, q: &str) -> StaticFetch {
        fetch
            .ok(&format!("/investor/kpis{q}"), json!({"restaurants": 18, "consumers": 40, "cities": 1, "avg_rating": null}))
            .ok(&format!("/analytics/price-count-stacked{q}"), json!({"labels": ["Low", "High"], "values": [12, 6]}))
            .ok(&format!("/analytics/top-cuisines{q}"), json!({"labels": ["Mexican"], "values": [9]}))
            .ok(&format!("/analytics/franchise-count{q}"), json!({"labels": ["Tacos Abi"], "values": [2]}))
            .ok(
                &format!("/analytics/top-cuisines-by-price-100{q}"),
                json!({"cuisines": ["Mexican"], "buckets": ["Low", "High"], "matrix_pct": [[0.6667, 0.3333]]}),
            )
    }

    #[test]
    fn boot_lists_all_then_cities() {
        let index = block_on(load_boot(&boot())).unwrap();
        assert_eq!(index.options(), vec!["All", "Cuernavaca", "San Luis Potosi"]);
    }

    #[test]
    fn price_chart_narrows_to_selected_city() {
        let index = block_on(load_boot(&boot())).unwrap();
        assert_eq!(index.price_chart(None).len(), 2);
        let one = index.price_chart(Some("San Luis Potosi"));
        assert_eq!(one.labels(), vec!["San Luis Potosi"]);
        assert_eq!(one.rows[0].value("Low"), 20.0);
        assert!(index.price_chart(Some("Atlantis")).is_empty());
    }

    #[test]
    fn selection_maps_to_city_param() {
        assert_eq!(city_filter("All"), None);
        assert_eq!(city_filter(""), None);
        assert_eq!(city_filter("Cuernavaca"), Some("Cuernavaca"));

        let fetch = city_data(StaticFetch::new(), "?city=San+Luis+Potosi");
        let view = block_on(load(&fetch, city_filter("San Luis Potosi"))).unwrap();
        assert!(fetch.seen.borrow().iter().all(|k| k.ends_with("?city=San+Luis+Potosi")));
        assert_eq!(view.franchises.rows[0].value(KEY_COUNT), 2.0);
    }

    #[test]
    fn all_cities_omits_the_query() {
        let fetch = city_data(StaticFetch::new(), "");
        let view = block_on(load(&fetch, None)).unwrap();
        assert_eq!(fetch.seen.borrow().len(), 5);
        assert_eq!(view.cuisines_by_price.rows[0].value("Low"), 66.7);
        assert_eq!(view.cuisines_by_price.rows[0].value("High"), 33.3);
    }

    #[test]
    fn kpis_show_counts_and_placeholder_rating() {
        let view = block_on(load(&city_data(StaticFetch::new(), ""), None)).unwrap();
        let values: Vec<String> = kpis(Some(&view), false).into_iter().map(|t| t.value).collect();
        assert_eq!(values, vec!["18", "40", "1", "—"]);
        assert!(kpis(None, false).iter().all(|t| t.value == "—"));
    }

    #[test]
    fn stale_generation_is_rejected() {
        let generation = Generation::default();
        let first = generation.begin();
        let second = generation.clone().begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
