//! Client-side route table.

/// The eight dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Analytics,
    Consumers,
    Preferences,
    Investment,
    Restaurant,
    Marketing,
    Owners,
}

/// Page shown for `/` and unknown paths.
pub const DEFAULT_PAGE: Page = Page::Home;

pub const LOGIN_PATH: &str = "/login";

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Analytics,
        Page::Consumers,
        Page::Preferences,
        Page::Investment,
        Page::Restaurant,
        Page::Marketing,
        Page::Owners,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/home",
            Page::Analytics => "/analytics",
            Page::Consumers => "/consumers",
            Page::Preferences => "/preferences",
            Page::Investment => "/investment",
            Page::Restaurant => "/restaurant",
            Page::Marketing => "/marketing",
            Page::Owners => "/owners",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Dashboard",
            Page::Analytics => "Analytics",
            Page::Consumers => "Consumers",
            Page::Preferences => "Preferences",
            Page::Investment => "Investment",
            Page::Restaurant => "Restaurateur",
            Page::Marketing => "Marketing",
            Page::Owners => "Franchise Owners",
        }
    }

    /// Page heading and document title.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "BI Dashboard",
            Page::Analytics => "Restaurant Analytics",
            Page::Consumers => "Consumers",
            Page::Preferences => "Preferences & Quality",
            Page::Investment => "Investment",
            Page::Restaurant => "Restaurant Ratings",
            Page::Marketing => "Marketing Insights",
            Page::Owners => "Franchise Owners — Insights",
        }
    }

    /// Font Awesome classes for the sidebar icon.
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "fa-solid fa-chart-pie",
            Page::Analytics => "fa-solid fa-chart-column",
            Page::Consumers => "fa-solid fa-users",
            Page::Preferences => "fa-solid fa-chart-line",
            Page::Investment => "fa-solid fa-hand-holding-dollar",
            Page::Restaurant => "fa-solid fa-star",
            Page::Marketing => "fa-solid fa-bullhorn",
            Page::Owners => "fa-solid fa-store",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Page(Page),
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Page(p) => p.path(),
            Route::Login => LOGIN_PATH,
        }
    }
}

/// Outcome of matching a browser path against the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub route: Route,
    /// True when the browser should be sent to `route.path()` instead of
    /// rendering at the requested path.
    pub redirect: bool,
}

fn lookup(path: &str) -> Option<Route> {
    if path.eq_ignore_ascii_case(LOGIN_PATH) {
        return Some(Route::Login);
    }
    Page::ALL
        .iter()
        .find(|p| p.path().eq_ignore_ascii_case(path))
        .map(|p| Route::Page(*p))
}

/// Matches `path` case-insensitively, ignoring query, fragment and trailing
/// slashes. `/` and unknown paths resolve to [`DEFAULT_PAGE`].
pub fn resolve(path: &str) -> Resolved {
    let bare = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = bare.trim_end_matches('/');
    match lookup(trimmed) {
        Some(route) => Resolved {
            route,
            redirect: bare != route.path(),
        },
        None => Resolved {
            route: Route::Page(DEFAULT_PAGE),
            redirect: true,
        },
    }
}

/// Where the auth guard sends an anonymous visitor, if anywhere.
pub fn guard(route: Route, require_auth: bool, signed_in: bool) -> Option<String> {
    match route {
        Route::Page(page) if require_auth && !signed_in => {
            Some(format!("{LOGIN_PATH}?from={}", page.path()))
        }
        _ => None,
    }
}

/// Post-login destination. Only known pages are accepted; anything else
/// lands on the default page.
pub fn return_target(from: Option<&str>) -> &'static str {
    match from.map(resolve) {
        Some(Resolved {
            route: Route::Page(page),
            ..
        }) => page.path(),
        _ => DEFAULT_PAGE.path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_render_in_place() {
        for page in Page::ALL {
            let r = resolve(page.path());
            assert_eq!(r.route, Route::Page(page));
            assert!(!r.redirect, "{} should not redirect", page.path());
        }
    }

    #[test]
    fn root_and_unknown_paths_go_home() {
        for path in ["/", "", "/nope", "/home/extra", "/metrics/kpis"] {
            let r = resolve(path);
            assert_eq!(r.route, Route::Page(Page::Home), "{path}");
            assert!(r.redirect, "{path}");
        }
    }

    #[test]
    fn matching_ignores_case_and_trailing_slash() {
        let r = resolve("/Marketing");
        assert_eq!(r.route, Route::Page(Page::Marketing));
        assert!(r.redirect);

        let r = resolve("/Restaurant/");
        assert_eq!(r.route, Route::Page(Page::Restaurant));
        assert!(r.redirect);

        assert_eq!(resolve("/owners?tab=1").route, Route::Page(Page::Owners));
    }

    #[test]
    fn login_route_resolves() {
        assert_eq!(resolve("/login"), Resolved { route: Route::Login, redirect: false });
    }

    #[test]
    fn guard_only_blocks_pages_when_required() {
        let home = Route::Page(Page::Home);
        assert_eq!(guard(home, false, false), None);
        assert_eq!(guard(home, true, true), None);
        assert_eq!(guard(home, true, false), Some("/login?from=/home".to_string()));
        assert_eq!(guard(Route::Login, true, false), None);
    }

    #[test]
    fn return_target_rejects_foreign_paths() {
        assert_eq!(return_target(Some("/investment")), "/investment");
        assert_eq!(return_target(Some("https://evil.example")), "/home");
        assert_eq!(return_target(Some("/login")), "/home");
        assert_eq!(return_target(None), "/home");
    }
}
