//! Telegram verification. The session gate redirects here when the backend
//! refuses the dashboard with its verification message; this page lives
//! outside the gate so the redirect cannot loop.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::endpoints;
use crate::components::toast::use_toaster;
use crate::pages::message_or;
use crate::session::context::use_session;
use crate::utils::constants::paths;

#[component]
pub fn VerifyTelegramPage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (otp, set_otp) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (bot_handle, set_bot_handle) = signal(String::new());

    // Ask the backend to push an OTP to the linked Telegram account, and
    // fetch the bot handle so the user knows where to look for it.
    leptos::task::spawn_local(async move {
        match endpoints::request_telegram_otp().await {
            Ok(envelope) if envelope.success => {
                toaster.success(message_or(envelope.message, "Verification code sent"))
            }
            Ok(envelope) => {
                toaster.error(message_or(envelope.message, "Could not send verification code"))
            }
            Err(err) => toaster.error(err.to_string()),
        }
        if let Ok(envelope) = endpoints::system_config().await {
            if let Some(config) = envelope.into_data() {
                set_bot_handle.set(config.telegram);
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
            match endpoints::submit_telegram_otp(&otp.get_untracked()).await {
                Ok(envelope) if envelope.success => {
                    toaster.success(message_or(envelope.message, "Telegram account verified"));
                    session.refresh();
                    navigate(paths::DASHBOARD, Default::default());
                }
                Ok(envelope) => {
                    toaster.error(message_or(envelope.message, "Invalid verification code"))
                }
                Err(err) => toaster.error(err.to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h1 class="card-title">"Verify your Telegram account"</h1>
                <p>
                    "A one-time code has been sent to your Telegram account."
                    {move || {
                        let handle = bot_handle.get();
                        (!handle.is_empty())
                            .then(|| format!(" Check your chat with {handle}."))
                    }}
                </p>
                <form on:submit=submit>
                    <label>
                        "One-time code"
                        <input
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            prop:value=otp
                            on:input=move |ev| set_otp.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <button class="btn btn-primary" type="submit" disabled=busy>
                        {move || if busy.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
