//! Sidebar, topbar and footer around every page.

use bi_core::{Page, Route, DEFAULT_PAGE};
use chrono::Datelike;
use leptos::*;

use crate::nav;
use crate::state::use_app_ctx;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_ctx();
    let links = Page::ALL
        .into_iter()
        .map(|page| {
            let active = move || ctx.route.get() == Route::Page(page);
            view! {
                <li class="nav-item" class:active=active>
                    <a
                        class="nav-link"
                        href=page.path()
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav::go(ctx, page.path());
                        }
                    >
                        <i class=page.icon()></i>
                        <span class="nav-label">{page.nav_label()}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar" class:collapsed=move || ctx.shell.with(|s| s.sidebar_collapsed)>
            <a
                class="sidebar-brand"
                href=DEFAULT_PAGE.path()
                on:click=move |ev| {
                    ev.prevent_default();
                    nav::go(ctx, DEFAULT_PAGE.path());
                }
            >
                <i class="fa-solid fa-utensils"></i>
                <span class="nav-label">"Restaurant BI"</span>
            </a>
            <hr class="sidebar-divider"/>
            <ul class="nav-list">{links}</ul>
        </nav>
    }
}

#[component]
pub fn Topbar() -> impl IntoView {
    let ctx = use_app_ctx();
    let heading = move || match ctx.route.get() {
        Route::Page(page) => page.title(),
        Route::Login => "Sign in",
    };
    let user = move || ctx.shell.with(|s| s.session.as_ref().map(|s| s.user.clone()));
    let sign_out = move |_| {
        ctx.shell.update(|s| s.sign_out());
        nav::sync(ctx);
    };

    view! {
        <header class="topbar">
            <button
                class="btn-icon"
                title="Toggle sidebar"
                on:click=move |_| ctx.shell.update(|s| s.toggle_sidebar())
            >
                <i class="fa-solid fa-bars"></i>
            </button>
            <h1 class="topbar-title">{heading}</h1>
            <Show when=move || user().is_some()>
                <div class="topbar-user">
                    <span>{move || user().unwrap_or_default()}</span>
                    <button class="btn-link" on:click=sign_out>"Sign out"</button>
                </div>
            </Show>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();
    view! {
        <footer class="footer">
            <span>{format!("© {year} Restaurant BI Dashboard")}</span>
        </footer>
    }
}
