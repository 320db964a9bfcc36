//! Client-side navigation over the History API.

use bi_core::routes::{guard, LOGIN_PATH};
use bi_core::{resolve, Route};
use leptos::*;
use url::form_urlencoded;

use crate::state::AppCtx;

/// Value of `from` in a sign-in query string (`?from=/owners`).
pub fn login_from(search: &str) -> Option<String> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == "from")
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Works out what to render for `path` and the URL the address bar should
/// show. `None` means the current URL is already right.
pub fn plan(path: &str, require_auth: bool, signed_in: bool) -> (Route, Option<String>) {
    let resolved = resolve(path);
    if let Some(target) = guard(resolved.route, require_auth, signed_in) {
        return (Route::Login, Some(target));
    }
    if resolved.route == Route::Login {
        // Keep the query so the return target survives a reload.
        let query = path.split_once('?').map(|(_, q)| q).unwrap_or("");
        let url = if query.is_empty() {
            LOGIN_PATH.to_string()
        } else {
            format!("{LOGIN_PATH}?{query}")
        };
        let redirect = resolved.redirect.then_some(url);
        return (Route::Login, redirect);
    }
    let redirect = resolved.redirect.then(|| resolved.route.path().to_string());
    (resolved.route, redirect)
}

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> String {
    web_sys::window()
        .map(|w| {
            let loc = w.location();
            let path = loc.pathname().unwrap_or_default();
            let search = loc.search().unwrap_or_default();
            format!("{path}{search}")
        })
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> String {
    "/".to_string()
}

#[cfg(target_arch = "wasm32")]
fn set_url(url: &str, replace: bool) {
    use wasm_bindgen::JsValue;

    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(url))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(url))
    };
    if let Err(e) = result {
        crate::log::warn(&format!("history update failed: {e:?}"));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_url(_url: &str, _replace: bool) {}

fn apply(ctx: AppCtx, path: &str, push: bool) {
    let signed_in = ctx.shell.with_untracked(|s| s.signed_in());
    let (route, redirect) = plan(path, ctx.require_auth(), signed_in);
    match &redirect {
        Some(url) => set_url(url, !push),
        None if push => set_url(path, false),
        None => {}
    }
    if route == Route::Login {
        let from = redirect.as_deref().unwrap_or(path);
        let search = from.split_once('?').map(|(_, q)| q).unwrap_or("");
        ctx.login_from.set(login_from(search));
    }
    ctx.route.set(route);
}

/// Navigates to `path`, adding a history entry.
pub fn go(ctx: AppCtx, path: &str) {
    apply(ctx, path, true);
}

/// Re-evaluates the address bar without adding a history entry.
pub fn sync(ctx: AppCtx) {
    apply(ctx, &current_path(), false);
}

/// Follows back/forward buttons.
#[cfg(target_arch = "wasm32")]
pub fn listen(ctx: AppCtx) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let on_pop = Closure::<dyn FnMut()>::new(move || sync(ctx));
    if let Err(e) = window.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref()) {
        crate::log::warn(&format!("popstate listener failed: {e:?}"));
    }
    // Lives for the whole session.
    on_pop.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn listen(_ctx: AppCtx) {}
