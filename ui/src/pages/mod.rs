//! Page components. Each one kicks off its loader on mount and renders
//! from a single [`LoadState`] signal.

pub mod analytics;
pub mod consumers;
pub mod home;
pub mod investment;
pub mod login;
pub mod marketing;
pub mod owners;
pub mod preferences;
pub mod restaurant;

use std::future::Future;

use bi_core::pages::KpiTile;
use bi_core::{FetchError, Table};
use leptos::*;

use crate::components::{Alert, Level};

pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed,
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn failed(&self) -> bool {
        matches!(self, LoadState::Failed)
    }
}

impl<T> From<Result<T, FetchError>> for LoadState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(v) => LoadState::Ready(v),
            Err(e) => {
                crate::log::warn(&format!("page data unavailable: {e}"));
                LoadState::Failed
            }
        }
    }
}

/// Runs `load` and stores its outcome. Results arriving after the page was
/// left hit a disposed signal and are dropped.
pub fn spawn_load<T, Fut>(state: RwSignal<LoadState<T>>, load: Fut)
where
    T: 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    spawn_local(async move {
        let next = LoadState::from(load.await);
        let _ = state.try_set(next);
    });
}

/// Chart input derived from the page state: `None` while loading, the
/// empty default after a failure.
pub fn project<T: 'static, U: Default + 'static>(
    state: RwSignal<LoadState<T>>,
    pick: impl Fn(&T) -> U + 'static,
) -> Signal<Option<U>> {
    Signal::derive(move || {
        state.with(|s| match s {
            LoadState::Loading => None,
            LoadState::Ready(v) => Some(pick(v)),
            LoadState::Failed => Some(U::default()),
        })
    })
}

pub fn table_of<T: 'static>(
    state: RwSignal<LoadState<T>>,
    pick: impl Fn(&T) -> Table + 'static,
) -> Signal<Option<Table>> {
    project(state, pick)
}

pub fn kpis_of<T: 'static>(
    state: RwSignal<LoadState<T>>,
    tiles: impl Fn(Option<&T>, bool) -> Vec<KpiTile> + 'static,
) -> Signal<Vec<KpiTile>> {
    Signal::derive(move || state.with(|s| tiles(s.ready(), s.is_loading())))
}

/// Generic failure banner, shown once per page.
#[component]
pub fn LoadError<T: 'static>(state: RwSignal<LoadState<T>>, message: &'static str) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.failed())>
            <Alert level=Level::Danger message=message/>
        </Show>
    }
}
