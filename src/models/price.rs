use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One element of the remote price list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceEntry {
    pub currency: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceQuote {
    pub currency: String,
    pub price: f64,
}

/// Unit price per currency. Lookups for unknown currencies return `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from the remote list. A currency listed more than once
    /// keeps its last price.
    pub fn from_entries(entries: Vec<PriceEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.currency, entry.price))
            .collect()
    }

    pub fn insert(&mut self, currency: impl Into<String>, price: f64) {
        self.prices.insert(currency.into(), price);
    }

    pub fn get(&self, currency: &str) -> Option<f64> {
        self.prices.get(currency).copied()
    }

    pub fn price_or_zero(&self, currency: &str) -> f64 {
        self.get(currency).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Currency identifiers in ascending order.
    pub fn currencies(&self) -> Vec<String> {
        let mut currencies: Vec<String> = self.prices.keys().cloned().collect();
        currencies.sort();
        currencies
    }

    pub fn quotes(&self) -> Vec<PriceQuote> {
        self.currencies()
            .into_iter()
            .map(|currency| PriceQuote {
                price: self.price_or_zero(&currency),
                currency,
            })
            .collect()
    }
}

impl FromIterator<(String, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceList {
    pub fetched_at: Option<DateTime<Utc>>,
    pub prices: Vec<PriceQuote>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyList {
    pub currencies: Vec<String>,
    pub default_from: String,
    pub default_to: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshSummary {
    pub currencies: usize,
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_entries_overwrite_earlier_ones() {
        let entries: Vec<PriceEntry> = serde_json::from_str(
            r#"[
                {"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.93},
                {"currency":"USD","date":"2023-08-29T07:10:30.000Z","price":1},
                {"currency":"ETH","date":"2023-08-29T07:10:53.000Z","price":1650.5}
            ]"#,
        )
        .unwrap();

        let table = PriceTable::from_entries(entries);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ETH"), Some(1650.5));
        assert_eq!(table.get("USD"), Some(1.0));
    }

    #[test]
    fn entries_without_date_still_decode() {
        let entries: Vec<PriceEntry> =
            serde_json::from_str(r#"[{"currency":"ATOM","price":7.18}]"#).unwrap();
        assert!(entries[0].date.is_none());
    }

    #[test]
    fn missing_currency_prices_at_zero() {
        let table = PriceTable::new();
        assert_eq!(table.get("XYZ"), None);
        assert_eq!(table.price_or_zero("XYZ"), 0.0);
    }

    #[test]
    fn currencies_and_quotes_are_sorted() {
        let table: PriceTable = [("USD".to_string(), 1.0), ("ATOM".to_string(), 7.0)]
            .into_iter()
            .collect();
        assert_eq!(table.currencies(), vec!["ATOM", "USD"]);
        assert_eq!(table.quotes()[0].currency, "ATOM");
        assert_eq!(table.quotes()[1].price, 1.0);
    }

    #[test]
    fn decodes_from_plain_object() {
        let table: PriceTable = serde_json::from_str(r#"{"A": 1.5, "B": 2}"#).unwrap();
        assert_eq!(table.get("A"), Some(1.5));
        assert_eq!(table.get("B"), Some(2.0));
    }
}
