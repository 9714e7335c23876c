//! Full-screen loading placeholder shown while the session gate validates.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p class="loading-text">"Checking your session..."</p>
        </div>
    }
}
