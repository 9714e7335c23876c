//! Login page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::LoginRequest;

use crate::api::endpoints;
use crate::components::toast::use_toaster;
use crate::pages::message_or;
use crate::session::context::use_session;
use crate::session::token::token_store;
use crate::utils::constants::{paths, DEVICE_NAME};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);
    let (busy, set_busy) = signal(false);
    let (login_enabled, set_login_enabled) = signal(true);

    // The platform can switch logins off via the system config.
    leptos::task::spawn_local(async move {
        if let Ok(envelope) = endpoints::system_config().await {
            if let Some(config) = envelope.into_data() {
                set_login_enabled.set(config.login);
            }
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
                device_name: DEVICE_NAME.to_string(),
            };
            match endpoints::login(&request).await {
                Ok(response) if response.success => match response.token {
                    Some(token) => {
                        token_store().set(&token, remember.get_untracked());
                        session.refresh();
                        navigate(paths::DASHBOARD, Default::default());
                    }
                    None => toaster.error("Login succeeded but no token was issued"),
                },
                Ok(response) => toaster.error(message_or(response.message, "Login failed")),
                Err(err) => toaster.error(err.to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h1 class="card-title">"Sign in"</h1>
                <Show when=move || !login_enabled.get()>
                    <p class="notice">"Logins are temporarily disabled."</p>
                </Show>
                <form on:submit=submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=remember
                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button
                        class="btn btn-primary"
                        type="submit"
                        disabled=move || busy.get() || !login_enabled.get()
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-links">
                    <A href=paths::FORGOT_PASSWORD>"Forgot password?"</A>
                    " · "
                    <A href=paths::REGISTER>"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
