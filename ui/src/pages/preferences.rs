use bi_core::pages::preferences::{self, PreferencesView, KEY_AVG, KEY_RATINGS, KEY_VALUE};
use bi_core::pages::LOAD_ERROR;
use chart_kit::ChartSpec;
use leptos::*;

use super::{spawn_load, table_of, LoadError, LoadState};
use crate::components::ChartCard;
use crate::state::use_app_ctx;

#[component]
pub fn PreferencesPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let state = create_rw_signal(LoadState::<PreferencesView>::Loading);
    let fetch = ctx.fetcher();
    spawn_load(state, async move { preferences::load(&fetch).await });

    view! {
        <section class="page">
            <LoadError state message=LOAD_ERROR/>
            <div class="chart-grid">
                <ChartCard
                    title="Cuisine share"
                    spec=ChartSpec::pie().series(KEY_VALUE, "Share")
                    table=table_of(state, |v: &PreferencesView| v.cuisine_share.clone())
                />
                <ChartCard
                    title="Alcohol service"
                    spec=ChartSpec::bars().series(KEY_VALUE, "Restaurants").color("#9B59B6")
                    table=table_of(state, |v: &PreferencesView| v.alcohol_service.clone())
                />
                <ChartCard
                    title="Ratings by restaurant"
                    spec=ChartSpec::pie().series(KEY_VALUE, "Ratings").palette_offset(2)
                    table=table_of(state, |v: &PreferencesView| v.ratings_by_restaurant.clone())
                />
                <ChartCard
                    title="Average rating vs number of ratings"
                    spec=ChartSpec::composed()
                        .series(KEY_RATINGS, "# Ratings")
                        .color("#F39C12")
                        .series(KEY_AVG, "Average rating")
                        .color("#16A085")
                    table=table_of(state, |v: &PreferencesView| v.avg_vs_count.clone())
                />
            </div>
        </section>
    }
}
