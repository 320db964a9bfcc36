use bi_core::pages::investment::{
    self, city_filter, CityIndex, Generation, InvestmentView, ALL_CITIES, BOOT_ERROR, KEY_COUNT,
};
use bi_core::pages::preferences::KEY_VALUE;
use bi_core::pages::LOAD_ERROR;
use bi_core::Table;
use chart_kit::palette::PASTEL;
use chart_kit::{ChartSpec, Domain};
use leptos::*;

use super::{kpis_of, spawn_load, table_of, LoadError, LoadState};
use crate::components::{ChartCard, KpiRow};
use crate::state::use_app_ctx;

#[component]
pub fn InvestmentPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let boot = create_rw_signal(LoadState::<CityIndex>::Loading);
    let state = create_rw_signal(LoadState::<InvestmentView>::Loading);
    let selection = create_rw_signal(ALL_CITIES.to_string());
    let generation = Generation::default();

    let fetch = ctx.fetcher();
    spawn_load(boot, async move { investment::load_boot(&fetch).await });

    create_effect(move |_| {
        let selected = selection.get();
        let ticket = generation.begin();
        state.set(LoadState::Loading);
        let fetch = ctx.fetcher();
        let generation = generation.clone();
        spawn_local(async move {
            let result = investment::load(&fetch, city_filter(&selected)).await;
            // A newer selection owns the page now.
            if generation.is_current(ticket) {
                let _ = state.try_set(result.into());
            }
        });
    });

    let options = move || {
        boot.with(|b| b.ready().map(CityIndex::options))
            .unwrap_or_else(|| vec![ALL_CITIES.to_string()])
    };
    let price_by_city = Signal::derive(move || {
        let selected = selection.get();
        boot.with(|b| match b {
            LoadState::Loading => None,
            LoadState::Ready(index) => Some(index.price_chart(city_filter(&selected))),
            LoadState::Failed => Some(Table::default()),
        })
    });

    view! {
        <section class="page">
            <LoadError state=boot message=BOOT_ERROR/>
            <LoadError state message=LOAD_ERROR/>
            <div class="filter-bar">
                <label class="input-label" for="city-select">"City"</label>
                <select
                    id="city-select"
                    class="input"
                    prop:value=move || selection.get()
                    on:change=move |ev| selection.set(event_target_value(&ev))
                >
                    {move || {
                        options()
                            .into_iter()
                            .map(|city| view! { <option value=city.clone()>{city}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <KpiRow tiles=kpis_of(state, investment::kpis)/>
            <div class="chart-grid">
                <ChartCard
                    title="Price level by city"
                    spec=ChartSpec::stacked().palette(&PASTEL)
                    table=price_by_city
                />
                <ChartCard
                    title="Restaurants per price level"
                    spec=ChartSpec::bars().series(KEY_VALUE, "Restaurants").color(PASTEL[0])
                    table=table_of(state, |v: &InvestmentView| v.price_counts.clone())
                />
                <ChartCard
                    title="Top 5 cuisines"
                    spec=ChartSpec::donut(0.6).series(KEY_VALUE, "Restaurants").palette(&PASTEL)
                    table=table_of(state, |v: &InvestmentView| v.top_cuisines.clone())
                />
                <ChartCard
                    title="Franchises"
                    spec=ChartSpec::horizontal().series(KEY_COUNT, "Restaurants").color(PASTEL[3])
                    table=table_of(state, |v: &InvestmentView| v.franchises.clone())
                />
                <ChartCard
                    title="Cuisines by price level (100%)"
                    spec=ChartSpec::stacked()
                        .palette(&PASTEL)
                        .domain(Domain::Fixed(0.0, 100.0))
                        .suffix("%")
                    table=table_of(state, |v: &InvestmentView| v.cuisines_by_price.clone())
                    wide=true
                />
            </div>
        </section>
    }
}
