//! Wallet ledger, server-paginated.

use leptos::prelude::*;
use shared::{Paginated, Transaction};

use crate::api::endpoints;
use crate::utils::format::{format_timestamp, format_usdt};

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let (page, set_page) = signal(1u32);
    let (listing, set_listing) = signal(Paginated::<Transaction>::default());

    Effect::new(move || {
        let page = page.get();
        leptos::task::spawn_local(async move {
            match endpoints::transactions(page).await {
                Ok(envelope) => {
                    if let Some(listing) = envelope.into_data() {
                        set_listing.set(listing);
                    }
                }
                Err(err) => log::error!("failed to load transactions: {err}"),
            }
        });
    });

    view! {
        <div class="page transactions">
            <h1>"Wallet history"</h1>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Reference"</th>
                        <th>"Amount"</th>
                        <th>"Post balance"</th>
                        <th>"Details"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let listing = listing.get();
                        if listing.data.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="empty">"No transactions yet"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            listing
                                .data
                                .into_iter()
                                .map(|tx| {
                                    let sign = if tx.is_credit() { "+" } else { "-" };
                                    view! {
                                        <tr>
                                            <td class="mono">{tx.trx.clone()}</td>
                                            <td class=if tx.is_credit() { "credit" } else { "debit" }>
                                                {format!("{}{}", sign, format_usdt(&tx.amount))}
                                            </td>
                                            <td>{format_usdt(&tx.post_balance)}</td>
                                            <td>{tx.details.clone()}</td>
                                            <td>{format_timestamp(&tx.created_at)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
            <div class="pager">
                <button
                    class="btn"
                    disabled=move || !listing.get().has_prev()
                    on:click=move |_| set_page.update(|p| *p -= 1)
                >
                    "Previous"
                </button>
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
