use bi_core::pages::analytics::{self, RestaurantCharts, KEY_AVG, KEY_CITY_AVG, KEY_RATINGS};
use bi_core::pages::LOAD_ERROR;
use chart_kit::{ChartSpec, Domain};
use leptos::*;

use super::{project, spawn_load, LoadError, LoadState};
use crate::components::ChartCard;
use crate::state::use_app_ctx;

/// Rating-by-city lines. `domain` pins the value axis; `None` lets it follow
/// the data.
fn city_spec(domain: Option<(f64, f64)>) -> ChartSpec {
    let spec = ChartSpec::lines()
        .series(KEY_CITY_AVG, "Average rating")
        .color("#2E86C1");
    match domain {
        Some((lo, hi)) => spec.domain(Domain::Fixed(lo, hi)),
        None => spec,
    }
}

/// Top restaurants, rating by city and price levels by city. Shared with the
/// dashboard, which passes trimmed tables and pins the city axis to
/// `[0, max + 1]`.
#[component]
pub fn RestaurantChartCards(
    #[prop(into)] charts: Signal<Option<RestaurantCharts>>,
    #[prop(optional)] fixed_city_domain: bool,
) -> impl IntoView {
    let top = Signal::derive(move || charts.with(|c| c.as_ref().map(|c| c.top.clone())));
    let by_city = Signal::derive(move || charts.with(|c| c.as_ref().map(|c| c.by_city.clone())));
    let prices = Signal::derive(move || charts.with(|c| c.as_ref().map(|c| c.price_by_city.clone())));
    let city_chart = Signal::derive(move || {
        let domain = fixed_city_domain
            .then(|| charts.with(|c| c.as_ref().map(|c| c.city_domain()).unwrap_or((0.0, 1.0))));
        city_spec(domain)
    });

    view! {
        <div class="chart-grid">
            <ChartCard
                title="Top restaurants by number of ratings"
                spec=ChartSpec::composed()
                    .series(KEY_RATINGS, "# Ratings")
                    .color("#1ABC9C")
                    .series(KEY_AVG, "Average rating")
                    .color("#E74C3C")
                table=top
                wide=true
            />
            <ChartCard title="Average rating by city" spec=city_chart table=by_city/>
            <ChartCard title="Price level by city" spec=ChartSpec::stacked() table=prices/>
        </div>
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let state = create_rw_signal(LoadState::<RestaurantCharts>::Loading);
    let fetch = ctx.fetcher();
    spawn_load(state, async move { analytics::load(&fetch).await });

    view! {
        <section class="page">
            <LoadError state message=LOAD_ERROR/>
            <RestaurantChartCards charts=project(state, RestaurantCharts::clone)/>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_axis_is_pinned_only_when_asked() {
        assert_eq!(city_spec(None).domain, Domain::Auto);
        assert_eq!(city_spec(Some((0.0, 3.0))).domain, Domain::Fixed(0.0, 3.0));
        assert_eq!(city_spec(None).series[0].key, KEY_CITY_AVG);
    }
}
