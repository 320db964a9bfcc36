use bi_core::pages::consumers::{self, ConsumersView, KEY_COUNT};
use bi_core::pages::LOAD_ERROR;
use chart_kit::ChartSpec;
use leptos::*;

use super::{spawn_load, table_of, LoadError, LoadState};
use crate::components::ChartCard;
use crate::state::use_app_ctx;

#[component]
pub fn ConsumersPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let state = create_rw_signal(LoadState::<ConsumersView>::Loading);
    let fetch = ctx.fetcher();
    spawn_load(state, async move { consumers::load(&fetch).await });

    view! {
        <section class="page">
            <LoadError state message=LOAD_ERROR/>
            <div class="chart-grid">
                <ChartCard
                    title="Age distribution"
                    spec=ChartSpec::bars().series(KEY_COUNT, "Consumers").color("#2E86C1")
                    table=table_of(state, |v: &ConsumersView| v.ages.clone())
                    wide=true
                />
                <ChartCard
                    title="Drink level by city"
                    spec=ChartSpec::stacked()
                    table=table_of(state, |v: &ConsumersView| v.drink_by_city.clone())
                />
                <ChartCard
                    title="Budget by occupation"
                    spec=ChartSpec::stacked().palette_offset(3)
                    table=table_of(state, |v: &ConsumersView| v.budget_by_occupation.clone())
                />
            </div>
        </section>
    }
}
