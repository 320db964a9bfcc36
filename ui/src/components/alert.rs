use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Danger,
    Warning,
    Info,
}

impl Level {
    fn class(&self) -> &'static str {
        match self {
            Level::Danger => "alert alert-danger",
            Level::Warning => "alert alert-warning",
            Level::Info => "alert alert-info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Level::Danger => "fa-solid fa-circle-exclamation",
            Level::Warning => "fa-solid fa-triangle-exclamation",
            Level::Info => "fa-solid fa-circle-info",
        }
    }
}

#[component]
pub fn Alert(level: Level, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=level.class() role="alert">
            <i class=level.icon()></i>
            <span>{message}</span>
        </div>
    }
}
