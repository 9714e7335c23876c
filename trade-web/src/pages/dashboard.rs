//! Dashboard: account summary rendered entirely from the hydrated context.

use leptos::prelude::*;

use crate::components::trade_table::{TradeRow, TradeTable};
use crate::session::context::use_session;
use crate::utils::format::format_usdt;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="page dashboard">
            {move || {
                session
                    .user
                    .get()
                    .map(|profile| {
                        let bids: Vec<TradeRow> =
                            profile.recent_bids.iter().map(TradeRow::from).collect();
                        let asks: Vec<TradeRow> =
                            profile.recent_asks.iter().map(TradeRow::from).collect();
                        view! {
                            <h1>{format!("Welcome back, {}", profile.account.full_name())}</h1>
                            <div class="summary-cards">
                                <div class="card">
                                    <p class="label">"Balance"</p>
                                    <p class="value">{format_usdt(&profile.account.balance)}</p>
                                </div>
                                <div class="card">
                                    <p class="label">"Earnings"</p>
                                    <p class="value">{format_usdt(&profile.account.earning)}</p>
                                </div>
                                <div class="card">
                                    <p class="label">"Running investment"</p>
                                    <p class="value">{format_usdt(&profile.running_invest)}</p>
                                </div>
                            </div>
                            <div class="card trading-window">
                                <p>
                                    {format!(
                                        "Trading window: {} – {}",
                                        profile.opening_time,
                                        profile.closing_time,
                                    )}
                                </p>
                                <p class="telegram-links">
                                    <a href=profile.telegram_channel.clone() target="_blank">
                                        "Telegram channel"
                                    </a>
                                    " · "
                                    <a href=profile.telegram_group.clone() target="_blank">
                                        "Telegram group"
                                    </a>
                                    " · "
                                    <a
                                        href=format!("https://t.me/{}", profile.site_bot)
                                        target="_blank"
                                    >
                                        "Bot"
                                    </a>
                                </p>
                            </div>
                            <h2>"Recent bids"</h2>
                            <TradeTable rows=bids/>
                            <h2>"Recent asks"</h2>
                            <TradeTable rows=asks/>
                        }
                            .into_any()
                    })
            }}
        </div>
    }
}
