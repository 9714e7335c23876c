//! Two-step password reset: request an emailed code, then submit it together
//! with the new password.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::ResetSubmitRequest;

use crate::api::endpoints;
use crate::components::toast::use_toaster;
use crate::pages::message_or;
use crate::utils::constants::paths;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toaster = use_toaster();
    // Stored so the submit handler stays `Copy` inside the `Show` branch.
    let navigate = StoredValue::new(use_navigate());

    let (email, set_email) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (code_sent, set_code_sent) = signal(false);
    let (busy, set_busy) = signal(false);

    let request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        leptos::task::spawn_local(async move {
            match endpoints::reset_password_code(&email.get_untracked()).await {
                Ok(envelope) if envelope.success => {
                    toaster.info(message_or(envelope.message, "Reset code sent to your email"));
                    set_code_sent.set(true);
                }
                Ok(envelope) => {
                    toaster.error(message_or(envelope.message, "Could not send a reset code"))
                }
                Err(err) => toaster.error(err.to_string()),
            }
            set_busy.set(false);
        });
    };

    let submit_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if password.get_untracked() != confirmation.get_untracked() {
            toaster.error("Passwords do not match");
            return;
        }
        set_busy.set(true);
        leptos::task::spawn_local(async move {
            let request = ResetSubmitRequest {
                email: email.get_untracked(),
                code: code.get_untracked(),
                password: password.get_untracked(),
                password_confirmation: confirmation.get_untracked(),
            };
            match endpoints::reset_password_submit(&request).await {
                Ok(envelope) if envelope.success => {
                    toaster.success(message_or(envelope.message, "Password updated, sign in"));
                    navigate.with_value(|nav| nav(paths::LOGIN, Default::default()));
                }
                Ok(envelope) => {
                    toaster.error(message_or(envelope.message, "Password reset failed"))
                }
                Err(err) => toaster.error(err.to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h1 class="card-title">"Reset password"</h1>
                <Show
                    when=move || code_sent.get()
                    fallback=move || {
                        view! {
                            <form on:submit=request_code>
                                <label>
                                    "Email"
                                    <input
                                        type="email"
                                        prop:value=email
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        required
                                    />
                                </label>
                                <button class="btn btn-primary" type="submit" disabled=busy>
                                    "Send reset code"
                                </button>
                            </form>
                        }
                    }
                >
                    <form on:submit=submit_code>
                        <label>
                            "Code"
                            <input
                                prop:value=code
                                on:input=move |ev| set_code.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "New password"
                            <input
                                type="password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Confirm new password"
                            <input
                                type="password"
                                prop:value=confirmation
                                on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <button class="btn btn-primary" type="submit" disabled=busy>
                            "Update password"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
