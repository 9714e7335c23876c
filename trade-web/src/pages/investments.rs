//! Investments of the current user.

use leptos::prelude::*;
use shared::Investment;

use crate::api::endpoints;
use crate::session::context::use_session;
use crate::utils::format::{format_timestamp, format_usdt};

fn investment_status_label(status: u8) -> &'static str {
    match status {
        0 => "Pending",
        1 => "Running",
        2 => "Completed",
        _ => "Unknown",
    }
}

#[component]
pub fn InvestmentsPage() -> impl IntoView {
    let session = use_session();
    let (investments, set_investments) = signal(Vec::<Investment>::new());

    leptos::task::spawn_local(async move {
        match endpoints::investments().await {
            Ok(envelope) => {
                if let Some(investments) = envelope.into_data() {
                    set_investments.set(investments);
                }
            }
            Err(err) => log::error!("failed to load investments: {err}"),
        }
    });

    view! {
        <div class="page investments">
            <h1>"My investments"</h1>
            {move || {
                session
                    .user
                    .get()
                    .map(|profile| {
                        view! {
                            <p class="summary">
                                {format!("Currently invested: {}", format_usdt(&profile.running_invest))}
                            </p>
                        }
                    })
            }}
            <table class="table">
                <thead>
                    <tr>
                        <th>"Plan"</th>
                        <th>"Amount"</th>
                        <th>"Paid out"</th>
                        <th>"Status"</th>
                        <th>"Started"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let investments = investments.get();
                        if investments.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="empty">"No investments yet"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            investments
                                .into_iter()
                                .map(|investment| {
                                    view! {
                                        <tr>
                                            <td>{investment.plan_name.clone()}</td>
                                            <td>{format_usdt(&investment.amount)}</td>
                                            <td>{format_usdt(&investment.paid)}</td>
                                            <td>{investment_status_label(investment.status)}</td>
                                            <td>{format_timestamp(&investment.created_at)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
