use bi_core::{Page, Route};
use leptos::*;
use leptos_meta::*;

use crate::components::{Footer, Sidebar, Topbar};
use crate::nav;
use crate::pages::{
    analytics::AnalyticsPage, consumers::ConsumersPage, home::HomePage, investment::InvestmentPage,
    login::LoginPage, marketing::MarketingPage, owners::OwnersPage, preferences::PreferencesPage,
    restaurant::RestaurantPage,
};
use crate::state::{provide_app_ctx, RuntimeConfig};
use crate::theme::GLOBAL_CSS;

fn page_view(route: Route) -> View {
    match route {
        Route::Login => view! { <LoginPage/> }.into_view(),
        Route::Page(Page::Home) => view! { <HomePage/> }.into_view(),
        Route::Page(Page::Analytics) => view! { <AnalyticsPage/> }.into_view(),
        Route::Page(Page::Consumers) => view! { <ConsumersPage/> }.into_view(),
        Route::Page(Page::Preferences) => view! { <PreferencesPage/> }.into_view(),
        Route::Page(Page::Investment) => view! { <InvestmentPage/> }.into_view(),
        Route::Page(Page::Restaurant) => view! { <RestaurantPage/> }.into_view(),
        Route::Page(Page::Marketing) => view! { <MarketingPage/> }.into_view(),
        Route::Page(Page::Owners) => view! { <OwnersPage/> }.into_view(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = provide_app_ctx(RuntimeConfig::from_globals(), &nav::current_path());
    nav::sync(ctx);
    nav::listen(ctx);

    // Re-render only when the route actually changes; the page subtree and
    // its signals are disposed on the way out.
    let route = create_memo(move |_| ctx.route.get());
    let title = move || match route.get() {
        Route::Page(page) => page.title(),
        Route::Login => "Sign in",
    };
    let collapsed = move || ctx.shell.with(|s| s.sidebar_collapsed);

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Title text=title/>
        <div class="app" class:sidebar-collapsed=collapsed>
            <Sidebar/>
            <div class="content-wrapper">
                <Topbar/>
                <main class="content">{move || page_view(route.get())}</main>
                <Footer/>
            </div>
        </div>
    }
}
