use std::cmp::Reverse;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    balance::{DisplayBalance, WalletBalance},
    price::PriceTable,
};

use super::chain_priority::chain_priority;

/// Keeps balances with a strictly positive amount, in input order.
pub fn filter_positive(balances: &[WalletBalance]) -> Vec<WalletBalance> {
    balances
        .iter()
        .filter(|balance| balance.amount > 0.0)
        .cloned()
        .collect()
}

/// Stable sort, highest chain priority first.
pub fn sort_by_priority_desc(mut balances: Vec<WalletBalance>) -> Vec<WalletBalance> {
    balances.sort_by_key(|balance| Reverse(chain_priority(&balance.chain)));
    balances
}

/// `usd_value` is a plain f64 product; an amount and price whose product
/// exceeds f64 range yield infinity, which is a precondition violation of the
/// balance source and is passed through as is.
pub fn project(balances: Vec<WalletBalance>, prices: &PriceTable) -> Vec<DisplayBalance> {
    balances
        .into_iter()
        .map(|balance| DisplayBalance {
            formatted_amount: format_amount(balance.amount),
            usd_value: balance.amount * prices.price_or_zero(&balance.currency),
            balance,
        })
        .collect()
}

/// Filters, orders and prices a set of balances for display.
pub fn format(balances: &[WalletBalance], prices: &PriceTable) -> Vec<DisplayBalance> {
    project(sort_by_priority_desc(filter_positive(balances)), prices)
}

/// Two fractional digits of the exact binary value, ties rounded away from
/// zero.
pub fn format_amount(amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        // beyond Decimal range every finite f64 is a whole number
        None => format!("{:.2}", amount),
    }
}
