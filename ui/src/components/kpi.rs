use bi_core::pages::KpiTile;
use leptos::*;

#[component]
pub fn KpiCard(tile: KpiTile) -> impl IntoView {
    view! {
        <div class=format!("card kpi-card {}", tile.tone.class())>
            <div class="kpi-title">{tile.title}</div>
            <div class="kpi-value">{tile.value}</div>
        </div>
    }
}

/// A row of headline metrics; tiles re-render as the page state changes.
#[component]
pub fn KpiRow(#[prop(into)] tiles: Signal<Vec<KpiTile>>) -> impl IntoView {
    view! {
        <div class="kpi-row">
            {move || {
                tiles
                    .get()
                    .into_iter()
                    .map(|tile| view! { <KpiCard tile/> })
                    .collect_view()
            }}
        </div>
    }
}
