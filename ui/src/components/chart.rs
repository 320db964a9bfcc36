use bi_core::Table;
use chart_kit::{layout, to_svg, ChartSpec, Viewport};
use leptos::*;

pub const LOADING_TEXT: &str = "Loading…";
pub const EMPTY_TEXT: &str = "No data to display.";

/// A titled card holding one chart.
///
/// `table` is `None` while the page is loading. The chart itself is laid out
/// by `chart-kit` and injected as inline SVG.
#[component]
pub fn ChartCard(
    title: &'static str,
    #[prop(into)] spec: MaybeSignal<ChartSpec>,
    #[prop(into)] table: Signal<Option<Table>>,
    #[prop(default = 320.0)] height: f64,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let viewport = Viewport { width: 640.0, height };
    let body = move || match table.get() {
        None => view! { <div class="chart-status">{LOADING_TEXT}</div> }.into_view(),
        Some(t) => {
            let scene = spec.with(|s| layout(s, &t, viewport));
            if scene.is_empty() {
                return view! { <div class="chart-status">{EMPTY_TEXT}</div> }.into_view();
            }
            let svg = to_svg(&scene);
            let legend = scene
                .legend
                .into_iter()
                .map(|entry| {
                    view! {
                        <li>
                            <span class="swatch" style=format!("background:{}", entry.color)></span>
                            {entry.label}
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="chart-area" inner_html=svg></div>
                <ul class="chart-legend">{legend}</ul>
            }
            .into_view()
        }
    };

    view! {
        <div class=if wide { "card chart-card wide" } else { "card chart-card" }>
            <div class="card-header">{title}</div>
            <div class="card-body">{body}</div>
        </div>
    }
}
