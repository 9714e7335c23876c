//! Shared table rendering for bid and ask listings.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use shared::{trade_status_label, Amount, Ask, Bid};

use crate::utils::format::{format_timestamp, format_usdt};

/// Row shape common to bids and asks.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRow {
    pub id: u64,
    pub amount: Amount,
    pub rate: Amount,
    pub status: u8,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Bid> for TradeRow {
    fn from(bid: &Bid) -> Self {
        TradeRow {
            id: bid.id,
            amount: bid.amount.clone(),
            rate: bid.rate.clone(),
            status: bid.status,
            created_at: bid.created_at,
        }
    }
}

impl From<&Ask> for TradeRow {
    fn from(ask: &Ask) -> Self {
        TradeRow {
            id: ask.id,
            amount: ask.amount.clone(),
            rate: ask.rate.clone(),
            status: ask.status,
            created_at: ask.created_at,
        }
    }
}

#[component]
pub fn TradeTable(rows: Vec<TradeRow>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Amount"</th>
                    <th>"Rate"</th>
                    <th>"Status"</th>
                    <th>"Placed"</th>
                </tr>
            </thead>
            <tbody>
                {if rows.is_empty() {
                    view! {
                        <tr>
                            <td colspan="5" class="empty">"No records"</td>
                        </tr>
                    }
                        .into_any()
                } else {
                    rows.into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{row.id}</td>
                                    <td>{format_usdt(&row.amount)}</td>
                                    <td>{row.rate.to_string()}</td>
                                    <td>{trade_status_label(row.status)}</td>
                                    <td>{format_timestamp(&row.created_at)}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_bid() {
        let bid: Bid = serde_json::from_str(
            r#"{"id":4,"amount":"25.00","rate":"1.002","status":2}"#,
        )
        .unwrap();
        let row = TradeRow::from(&bid);
        assert_eq!(row.id, 4);
        assert_eq!(row.amount.as_str(), "25.00");
        assert_eq!(trade_status_label(row.status), "Paid");
    }
}
