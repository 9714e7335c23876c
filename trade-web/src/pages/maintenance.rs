//! Maintenance notice. The session gate routes here before any protected
//! page renders when the platform is flagged as down.

use leptos::prelude::*;

use crate::session::context::use_session;

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="page maintenance">
            <div class="card">
                <h1>"Down for maintenance"</h1>
                <p>"The platform is temporarily offline. Please check back soon."</p>
                {move || {
                    session
                        .user
                        .get()
                        .and_then(|profile| {
                            let channel = profile.telegram_channel.clone();
                            (!channel.is_empty())
                                .then(|| {
                                    view! {
                                        <p>
                                            "Updates are posted on our Telegram channel: "
                                            <a href=channel.clone() target="_blank" rel="noopener">
                                                {channel.clone()}
                                            </a>
                                        </p>
                                    }
                                })
                        })
                }}
            </div>
        </div>
    }
}
