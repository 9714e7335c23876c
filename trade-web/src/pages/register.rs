//! Registration page. A referral code arriving as `?ref=...` is prefilled.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::RegisterRequest;

use crate::api::endpoints;
use crate::components::toast::use_toaster;
use crate::pages::message_or;
use crate::session::context::use_session;
use crate::session::token::token_store;
use crate::utils::constants::{paths, DEVICE_NAME};
use crate::utils::url::get_query_param;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (firstname, set_firstname) = signal(String::new());
    let (lastname, set_lastname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (country, set_country) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (reference, set_reference) = signal(get_query_param("ref").unwrap_or_default());
    let (busy, set_busy) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if password.get_untracked() != confirmation.get_untracked() {
            toaster.error("Passwords do not match");
            return;
        }
        set_busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let reference = reference.get_untracked();
            let request = RegisterRequest {
                firstname: firstname.get_untracked(),
                lastname: lastname.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
                country: country.get_untracked(),
                password: password.get_untracked(),
                password_confirmation: confirmation.get_untracked(),
                reference: if reference.is_empty() {
                    None
                } else {
                    Some(reference)
                },
                device_name: DEVICE_NAME.to_string(),
            };
            match endpoints::register(&request).await {
                Ok(response) if response.success => match response.token {
                    Some(token) => {
                        // Fresh registrations get a tab-scoped session.
                        token_store().set(&token, false);
                        session.refresh();
                        navigate(paths::DASHBOARD, Default::default());
                    }
                    None => toaster.error("Registration succeeded but no token was issued"),
                },
                Ok(response) => toaster.error(message_or(response.message, "Registration failed")),
                Err(err) => toaster.error(err.to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h1 class="card-title">"Create your account"</h1>
                <form on:submit=submit>
                    <div class="field-row">
                        <label>
                            "First name"
                            <input
                                prop:value=firstname
                                on:input=move |ev| set_firstname.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Last name"
                            <input
                                prop:value=lastname
                                on:input=move |ev| set_lastname.set(event_target_value(&ev))
                                required
                            />
                        </label>
                    </div>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <div class="field-row">
                        <label>
                            "Phone"
                            <input
                                prop:value=phone
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Country"
                            <input
                                prop:value=country
                                on:input=move |ev| set_country.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="field-row">
                        <label>
                            "Password"
                            <input
                                type="password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                            />
                        </label>
                        <label>
                            "Confirm password"
                            <input
                                type="password"
                                prop:value=confirmation
                                on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                                required
                            />
                        </label>
                    </div>
                    <label>
                        "Referral code (optional)"
                        <input
                            prop:value=reference
                            on:input=move |ev| set_reference.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn-primary" type="submit" disabled=busy>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-links">
                    "Already registered? "
                    <A href=paths::LOGIN>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
