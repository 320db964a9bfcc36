use bi_core::format::fmt_grouped;
use bi_core::pages::owners::{self, OwnersView, KEY_VALUE, LOAD_ERROR, MOCK_WARNING, PREDICTED_DOMAIN};
use chart_kit::{ChartSpec, Domain};
use leptos::*;

use super::{kpis_of, spawn_load, table_of, LoadError, LoadState};
use crate::components::{Alert, ChartCard, KpiRow, Level};
use crate::state::use_app_ctx;

#[component]
pub fn OwnersPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let state = create_rw_signal(LoadState::<OwnersView>::Loading);
    let fetch = ctx.fetcher();
    spawn_load(state, async move { owners::load(&fetch).await });

    let mock_used = move || state.with(|s| s.ready().is_some_and(OwnersView::mock_used));
    let messages = move || state.with(|s| s.ready().map(|v| v.messages.clone()).unwrap_or_default());
    let observations = move || {
        state.with(|s| {
            s.ready()
                .filter(|v| v.summary.n_obs > 0.0)
                .map(|v| format!("Model trained on {} observations.", fmt_grouped(Some(v.summary.n_obs))))
        })
    };
    let (lo, hi) = PREDICTED_DOMAIN;

    view! {
        <section class="page">
            <LoadError state message=LOAD_ERROR/>
            <Show when=mock_used>
                <Alert level=Level::Warning message=MOCK_WARNING/>
            </Show>
            {move || {
                messages()
                    .into_iter()
                    .map(|message| view! { <Alert level=Level::Info message/> })
                    .collect_view()
            }}
            <KpiRow tiles=kpis_of(state, owners::kpis)/>
            <p class="caption">{observations}</p>
            <div class="chart-grid">
                <ChartCard
                    title="Rating drivers (feature importance)"
                    spec=ChartSpec::horizontal().series(KEY_VALUE, "Importance").color("#2E86C1")
                    table=table_of(state, OwnersView::drivers)
                />
                <ChartCard
                    title="Predicted rating by cuisine"
                    spec=ChartSpec::bars()
                        .series(KEY_VALUE, "Predicted rating")
                        .color("#27AE60")
                        .domain(Domain::Fixed(lo, hi))
                    table=table_of(state, OwnersView::cuisines)
                />
            </div>
        </section>
    }
}
