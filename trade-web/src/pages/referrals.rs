//! Referral overview: own code plus the users referred and commissions earned.

use leptos::prelude::*;
use shared::Referral;

use crate::api::endpoints;
use crate::session::context::use_session;
use crate::utils::format::{format_timestamp, format_usdt};

#[component]
pub fn ReferralsPage() -> impl IntoView {
    let session = use_session();
    let (referrals, set_referrals) = signal(Vec::<Referral>::new());

    leptos::task::spawn_local(async move {
        match endpoints::referrals().await {
            Ok(envelope) => {
                if let Some(referrals) = envelope.into_data() {
                    set_referrals.set(referrals);
                }
            }
            Err(err) => log::error!("failed to load referrals: {err}"),
        }
    });

    view! {
        <div class="page referrals">
            <h1>"Referrals"</h1>
            {move || {
                session
                    .user
                    .get()
                    .map(|profile| {
                        view! {
                            <div class="card">
                                <p class="label">"Your referral code"</p>
                                <p class="value mono">{profile.account.refer_code.clone()}</p>
                            </div>
                        }
                    })
            }}
            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Level"</th>
                        <th>"Commission"</th>
                        <th>"Joined"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let referrals = referrals.get();
                        if referrals.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="4" class="empty">"Nobody referred yet"</td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            referrals
                                .into_iter()
                                .map(|referral| {
                                    view! {
                                        <tr>
                                            <td>
                                                {format!(
                                                    "{} {}",
                                                    referral.firstname,
                                                    referral.lastname,
                                                )}
                                            </td>
                                            <td>{referral.level}</td>
                                            <td>{format_usdt(&referral.bonus)}</td>
                                            <td>{format_timestamp(&referral.created_at)}</td>
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
