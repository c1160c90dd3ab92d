use serde::{Deserialize, Serialize};

use super::price::PriceTable;

/// A raw balance as reported by the balance source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    #[serde(alias = "blockchain")]
    pub chain: String,
}

impl WalletBalance {
    pub fn new(currency: impl Into<String>, amount: f64, chain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            chain: chain.into(),
        }
    }
}

/// Render-ready view of a [`WalletBalance`] priced against a [`PriceTable`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBalance {
    #[serde(flatten)]
    pub balance: WalletBalance,
    pub formatted_amount: String,
    pub usd_value: f64,
}

#[derive(Debug, Deserialize)]
pub struct FormatBalancesRequest {
    pub balances: Vec<WalletBalance>,
    // None means "use the cached price list"
    #[serde(default)]
    pub prices: Option<PriceTable>,
}
