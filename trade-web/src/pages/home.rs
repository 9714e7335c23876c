//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::context::use_session;
use crate::utils::constants::paths;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="page home">
            <div class="hero">
                <h1>"Peer-to-peer USDT trading"</h1>
                <p>"Place bids and asks, settle directly with other traders."</p>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <p class="hero-actions">
                                <A attr:class="btn btn-primary" href=paths::LOGIN>"Sign in"</A>
                                <A attr:class="btn" href=paths::REGISTER>"Create an account"</A>
                            </p>
                        }
                    }
                >
                    <p class="hero-actions">
                        <A attr:class="btn btn-primary" href=paths::DASHBOARD>"Go to dashboard"</A>
                    </p>
                </Show>
            </div>
        </div>
    }
}
