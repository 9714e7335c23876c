//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::context::use_session;
use crate::session::token::token_store;
use crate::utils::constants::paths;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        log::info!("logging out");
        token_store().clear();
        session.clear();
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <nav class="navbar">
            <A href=paths::HOME>
                <span class="brand">"TetherDesk"</span>
            </A>
            {move || {
                let logout = logout.clone();
                if session.is_authenticated() {
                    view! {
                        <div class="nav-links">
                            <A href=paths::DASHBOARD>"Dashboard"</A>
                            <A href=paths::BIDS>"Bids"</A>
                            <A href=paths::ASKS>"Asks"</A>
                            <A href=paths::TRANSACTIONS>"Wallet"</A>
                            <A href=paths::INVESTMENTS>"Investments"</A>
                            <A href=paths::REFERRALS>"Referrals"</A>
                            <A href=paths::PLANS>"Plans"</A>
                            <button class="btn btn-link" on:click=logout>
                                "Logout"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="nav-links">
                            <A href=paths::LOGIN>"Login"</A>
                            <A href=paths::REGISTER>"Register"</A>
                        </div>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}
