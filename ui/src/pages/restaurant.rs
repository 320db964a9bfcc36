use bi_core::pages::restaurant::{self, RestaurantView, BUDGET_KEYS, KEY_SATISFACTION, SATISFACTION_DOMAIN};
use bi_core::pages::preferences::KEY_VALUE;
use bi_core::pages::LOAD_ERROR;
use chart_kit::{ChartSpec, Domain};
use leptos::*;

use super::{spawn_load, table_of, LoadError, LoadState};
use crate::components::ChartCard;
use crate::state::use_app_ctx;

fn budget_lines() -> ChartSpec {
    let colors = ["#E74C3C", "#F39C12", "#27AE60"];
    BUDGET_KEYS
        .iter()
        .zip(colors)
        .fold(ChartSpec::lines(), |spec, (key, color)| spec.series(*key, *key).color(color))
}

#[component]
pub fn RestaurantPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let state = create_rw_signal(LoadState::<RestaurantView>::Loading);
    let fetch = ctx.fetcher();
    spawn_load(state, async move { restaurant::load(&fetch).await });
    let (lo, hi) = SATISFACTION_DOMAIN;

    view! {
        <section class="page">
            <LoadError state message=LOAD_ERROR/>
            <div class="chart-grid">
                <ChartCard
                    title="Alcohol service"
                    spec=ChartSpec::horizontal().series(KEY_VALUE, "Restaurants").color("#2E86C1")
                    table=table_of(state, |v: &RestaurantView| v.alcohol.clone())
                />
                <ChartCard
                    title="Drink level by city"
                    spec=ChartSpec::stacked()
                    table=table_of(state, |v: &RestaurantView| v.drink_by_city.clone())
                />
                <ChartCard
                    title="Budget by age"
                    spec=budget_lines()
                    table=table_of(state, |v: &RestaurantView| v.budget_by_age.clone())
                />
                <ChartCard
                    title="Satisfaction by drink level"
                    spec=ChartSpec::horizontal()
                        .series(KEY_SATISFACTION, "Average rating")
                        .color("#1ABC9C")
                        .domain(Domain::Fixed(lo, hi))
                    table=table_of(state, |v: &RestaurantView| v.satisfaction.clone())
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_chart_has_one_line_per_level() {
        let spec = budget_lines();
        let keys: Vec<&str> = spec.series.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, BUDGET_KEYS);
        assert!(spec.series.iter().all(|s| s.color.is_some()));
    }
}
