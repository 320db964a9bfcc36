//! Consumer profile: age histogram, drink level by city, budget by occupation.

use serde_json::Value;

use crate::endpoint::{paths, Endpoint};
use crate::fetch::{decode, fetch_all, take, Fetch, FetchError};
use crate::model::{Histogram, LabeledMatrix};
use crate::pivot::{pivot, Row, Table};

pub const AGE_BINS: u32 = 18;
pub const KEY_COUNT: &str = "count";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumersView {
    /// Dimension `bin` (rounded bin start), series [`KEY_COUNT`].
    pub ages: Table,
    pub drink_by_city: Table,
    pub budget_by_occupation: Table,
}

fn age_table(h: &Histogram) -> Table {
    let rows = h
        .bins
        .iter()
        .enumerate()
        .map(|(i, bin)| {
            let count = h.counts.get(i).copied().unwrap_or(0.0);
            Row::new(format!("{}", bin.round())).with(KEY_COUNT, count)
        })
        .collect();
    Table::with_rows("bin", rows)
}

pub fn endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new(paths::AGE_HISTOGRAM).param("bins", AGE_BINS),
        Endpoint::new(paths::DRINK_LEVELS_BY_CITY),
        Endpoint::new(paths::BUDGET_BY_OCCUPATION),
    ]
}

pub fn assemble(values: Vec<Value>) -> Result<ConsumersView, FetchError> {
    let [ages, drink, budget] = take::<3>(values)?;
    let ages: Histogram = decode(ages)?;
    let drink: LabeledMatrix = decode(drink)?;
    let budget: LabeledMatrix = decode(budget)?;
    Ok(ConsumersView {
        ages: age_table(&ages),
        drink_by_city: pivot(&drink.rows, &drink.cols, &drink.matrix, "city"),
        budget_by_occupation: pivot(&budget.rows, &budget.cols, &budget.matrix, "occupation"),
    })
}

pub async fn load<F: Fetch>(fetch: &F) -> Result<ConsumersView, FetchError> {
    assemble(fetch_all(fetch, &endpoints()).await?)
}
