//! Restaurant ratings: alcohol service, drink level by city, budget by age
//! and satisfaction by drink level.

use serde_json::Value;

use super::preferences::name_value;
use crate::endpoint::{paths, Endpoint};
use crate::fetch::{decode, fetch_all, take, Fetch, FetchError};
use crate::model::{LabelValues, LabeledMatrix, MultiSeries};
use crate::pivot::{pivot, series_table, zip, Table};

pub const BUDGET_KEYS: [&str; 3] = ["High", "Medium", "Low"];
pub const KEY_SATISFACTION: &str = "avg";
/// Ratings are on a 0..5 scale.
pub const SATISFACTION_DOMAIN: (f64, f64) = (0.0, 5.0);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantView {
    pub alcohol: Table,
    pub drink_by_city: Table,
    /// Dimension `age`, one series per [`BUDGET_KEYS`] entry.
    pub budget_by_age: Table,
    /// Dimension `level`, series [`KEY_SATISFACTION`].
    pub satisfaction: Table,
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(paths::ALCOHOL_SERVICE),
        Endpoint::new(paths::DRINK_LEVELS_BY_CITY),
        Endpoint::new(paths::BUDGET_BY_AGE),
        Endpoint::new(paths::DRINK_SATISFACTION),
    ]
}

pub fn assemble(values: Vec<Value>) -> Result<RestaurantView, FetchError> {
    let [alcohol, drink, budget, satisfaction] = take::<4>(values)?;
    let drink: LabeledMatrix = decode(drink)?;
    let budget: MultiSeries = decode(budget)?;
    let satisfaction: LabelValues = decode(satisfaction)?;
    Ok(RestaurantView {
        alcohol: name_value(&decode(alcohol)?),
        drink_by_city: pivot(&drink.rows, &drink.cols, &drink.matrix, "city"),
        budget_by_age: series_table(&budget.labels, &budget.series, &BUDGET_KEYS, "age"),
        satisfaction: zip(&satisfaction.labels, &satisfaction.values, "level", KEY_SATISFACTION),
    })
}

pub async fn load<F: Fetch>(fetch: &F) -> Result<RestaurantView, FetchError> {
    assemble(fetch_all(fetch, &endpoints()).await?)
}
