use bi_core::pages::marketing::{self, MarketingView, KEY_COUNT, KEY_PERCENT, KEY_VALUE};
use bi_core::pages::LOAD_ERROR;
use chart_kit::ChartSpec;
use leptos::*;

use super::{kpis_of, spawn_load, table_of, LoadError, LoadState};
use crate::components::{ChartCard, KpiRow};
use crate::state::use_app_ctx;

#[component]
pub fn MarketingPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let state = create_rw_signal(LoadState::<MarketingView>::Loading);
    let fetch = ctx.fetcher();
    spawn_load(state, async move { marketing::load(&fetch).await });

    view! {
        <section class="page">
            <LoadError state message=LOAD_ERROR/>
            <KpiRow tiles=kpis_of(state, marketing::kpis)/>
            <div class="chart-grid">
                <ChartCard
                    title="Budget by occupation"
                    spec=ChartSpec::stacked()
                    table=table_of(state, |v: &MarketingView| v.occupation_budget.clone())
                />
                <ChartCard
                    title="Top 10 restaurants by ratings"
                    spec=ChartSpec::donut(0.55).series(KEY_VALUE, "Ratings").percent_key(KEY_PERCENT)
                    table=table_of(state, |v: &MarketingView| v.top_restaurants.clone())
                />
                <ChartCard
                    title="Rating quality by restaurant"
                    spec=ChartSpec::bars()
                    table=table_of(state, |v: &MarketingView| v.quality_by_name.clone())
                    wide=true
                />
                <ChartCard
                    title="Preferred cuisines (top 10)"
                    spec=ChartSpec::horizontal().series(KEY_COUNT, "Consumers").color("#8E44AD")
                    table=table_of(state, |v: &MarketingView| v.cuisine_preferences.clone())
                />
                <ChartCard
                    title="Consumers by age group"
                    spec=ChartSpec::bars().series(KEY_COUNT, "Consumers").color("#D35400")
                    table=table_of(state, |v: &MarketingView| v.age_bins.clone())
                />
            </div>
        </section>
    }
}
