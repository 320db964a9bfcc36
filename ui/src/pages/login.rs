use bi_core::routes::return_target;
use leptos::*;

use crate::components::{Alert, Level};
use crate::nav;
use crate::state::use_app_ctx;

/// Stores a session token and returns to the page that required it.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let user = create_rw_signal(String::new());
    let token = create_rw_signal(String::new());
    let rejected = create_rw_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = ctx
            .shell
            .try_update(|s| s.sign_in(&user.get_untracked(), &token.get_untracked()))
            .unwrap_or(false);
        rejected.set(!accepted);
        if accepted {
            let from = ctx.login_from.get_untracked();
            nav::go(ctx, return_target(from.as_deref()));
        }
    };

    view! {
        <section class="page login-page">
            <form class="card login-card" on:submit=submit>
                <div class="card-header">"Sign in"</div>
                <div class="card-body">
                    <Show when=move || rejected.get()>
                        <Alert level=Level::Danger message="Enter both a user name and an access token."/>
                    </Show>
                    <label class="input-label" for="login-user">"User"</label>
                    <input
                        id="login-user"
                        class="input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || user.get()
                        on:input=move |ev| user.set(event_target_value(&ev))
                    />
                    <label class="input-label" for="login-token">"Access token"</label>
                    <input
                        id="login-token"
                        class="input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary" type="submit">"Sign in"</button>
                </div>
            </form>
        </section>
    }
}
