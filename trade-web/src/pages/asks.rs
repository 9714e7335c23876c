//! Own asks: mirror of the bids page on the sell side.

use leptos::prelude::*;
use shared::{Ask, Paginated, PlaceAskRequest};

use crate::api::endpoints;
use crate::components::toast::use_toaster;
use crate::components::trade_table::{TradeRow, TradeTable};
use crate::pages::message_or;
use crate::session::context::use_session;

#[component]
pub fn AsksPage() -> impl IntoView {
    let session = use_session();
    let toaster = use_toaster();

    let (page, set_page) = signal(1u32);
    let (listing, set_listing) = signal(Paginated::<Ask>::default());
    let (status_filter, set_status_filter) = signal(None::<u8>);
    let (amount, set_amount) = signal(String::new());
    let (rate, set_rate) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let load = move |page: u32| {
        leptos::task::spawn_local(async move {
            match endpoints::asks(page).await {
                Ok(envelope) => {
                    if let Some(listing) = envelope.into_data() {
                        set_listing.set(listing);
                    }
                }
                Err(err) => log::error!("failed to load asks: {err}"),
            }
        });
    };

    Effect::new(move || load(page.get()));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        leptos::task::spawn_local(async move {
            let request = PlaceAskRequest {
                amount: amount.get_untracked(),
                rate: rate.get_untracked(),
            };
            match endpoints::place_ask(&request).await {
                Ok(envelope) if envelope.success => {
                    toaster.success(message_or(envelope.message, "Ask placed"));
                    set_amount.set(String::new());
                    set_rate.set(String::new());
                    session.refresh();
                    load(page.get_untracked());
                }
                Ok(envelope) => toaster.error(message_or(envelope.message, "Could not place ask")),
                Err(err) => toaster.error(err.to_string()),
            }
            set_busy.set(false);
        });
    };

    let filtered = move || -> Vec<TradeRow> {
        let filter = status_filter.get();
        listing
            .get()
            .data
            .iter()
            .filter(|ask| filter.is_none_or(|status| ask.status == status))
            .map(TradeRow::from)
            .collect()
    };

    view! {
        <div class="page asks">
            <h1>"My asks"</h1>
            <form class="inline-form" on:submit=submit>
                <input
                    placeholder="Amount (USDT)"
                    prop:value=amount
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    required
                />
                <input
                    placeholder="Rate"
                    prop:value=rate
                    on:input=move |ev| set_rate.set(event_target_value(&ev))
                    required
                />
                <button class="btn btn-primary" type="submit" disabled=busy>
                    "Place ask"
                </button>
            </form>
            <div class="filter-row">
                <select on:change=move |ev| {
                    set_status_filter.set(event_target_value(&ev).parse::<u8>().ok())
                }>
                    <option value="all">"All statuses"</option>
                    <option value="0">"Pending"</option>
                    <option value="1">"Matched"</option>
                    <option value="2">"Paid"</option>
                    <option value="3">"Completed"</option>
                    <option value="4">"Cancelled"</option>
                </select>
            </div>
            {move || view! { <TradeTable rows=filtered()/> }}
            <div class="pager">
                <button
                    class="btn"
                    disabled=move || !listing.get().has_prev()
                    on:click=move |_| set_page.update(|p| *p -= 1)
                >
                    "Previous"
                </button>
                <span>{move || {
                    let listing = listing.get();
                    format!("Page {} of {}", listing.current_page, listing.last_page.max(1))
                }}</span>
                <button
                    class="btn"
                    disabled=move || !listing.get().has_next()
                    on:click=move |_| set_page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
