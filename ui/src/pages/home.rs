use bi_core::pages::home::{self, HomeView};
use bi_core::pages::LOAD_ERROR;
use leptos::*;

use super::analytics::RestaurantChartCards;
use super::{kpis_of, project, spawn_load, LoadError, LoadState};
use crate::components::KpiRow;
use crate::state::use_app_ctx;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_ctx();
    let state = create_rw_signal(LoadState::<HomeView>::Loading);
    let fetch = ctx.fetcher();
    spawn_load(state, async move { home::load(&fetch).await });

    view! {
        <section class="page">
            <LoadError state message=LOAD_ERROR/>
            <h2 class="section-title">"Restaurants"</h2>
            <KpiRow tiles=kpis_of(state, home::restaurant_kpis)/>
            <h2 class="section-title">"Consumers"</h2>
            <KpiRow tiles=kpis_of(state, home::consumer_kpis)/>
            <RestaurantChartCards
                charts=project(state, |v: &HomeView| v.charts.clone())
                fixed_city_domain=true
            />
        </section>
    }
}
