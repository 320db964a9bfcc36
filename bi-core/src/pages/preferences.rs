//! Preferences and quality: cuisine share, alcohol service, ratings per
//! restaurant and average rating against rating volume.

use serde_json::Value;

use crate::endpoint::{paths, Endpoint};
use crate::fetch::{decode, fetch_all, take, Fetch, FetchError};
use crate::model::{AvgVsCount, LabelValues};
use crate::pivot::{zip, Row, Table};

pub const RESTAURANTS_TOP: u32 = 12;
pub const AVG_VS_COUNT_TOP: u32 = 10;

pub const KEY_VALUE: &str = "value";
pub const KEY_RATINGS: &str = "ratings_count";
pub const KEY_AVG: &str = "avg_overall";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesView {
    pub cuisine_share: Table,
    pub alcohol_service: Table,
    pub ratings_by_restaurant: Table,
    /// Dimension `label`, series [`KEY_RATINGS`] and [`KEY_AVG`].
    pub avg_vs_count: Table,
}

pub(crate) fn name_value(lv: &LabelValues) -> Table {
    zip(&lv.labels, &lv.values, "name", KEY_VALUE)
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(paths::CUISINE_SHARE),
        Endpoint::new(paths::ALCOHOL_SERVICE),
        Endpoint::new(paths::RATINGS_BY_RESTAURANT).param("top", RESTAURANTS_TOP),
        Endpoint::new(paths::AVG_VS_COUNT).param("top", AVG_VS_COUNT_TOP),
    ]
}

pub fn assemble(values: Vec<Value>) -> Result<PreferencesView, FetchError> {
    let [cuisine, alcohol, by_restaurant, avg_count] = take::<4>(values)?;
    let avg_count: Vec<AvgVsCount> = decode(avg_count)?;
    Ok(PreferencesView {
        cuisine_share: name_value(&decode(cuisine)?),
        alcohol_service: name_value(&decode(alcohol)?),
        ratings_by_restaurant: name_value(&decode(by_restaurant)?),
        avg_vs_count: Table::with_rows(
            "label",
            avg_count
                .into_iter()
                .map(|r| Row::new(r.label).with(KEY_RATINGS, r.ratings_count).with(KEY_AVG, r.avg_overall))
                .collect(),
        ),
    })
}

pub async fn load<F: Fetch>(fetch: &F) -> Result<PreferencesView, FetchError> {
    assemble(fetch_all(fetch, &endpoints()).await?)
}
