use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use reqwest::Client;

use crate::{
    config::Config,
    errors::CustomError,
    models::price::{PriceEntry, PriceTable, RefreshSummary},
};

/// Fetches the remote price list.
#[derive(Clone, Debug)]
pub struct PriceService {
    client: Client,
    prices_url: String,
}

impl PriceService {
    pub fn new(config: &Config) -> Result<Self, CustomError> {
        let client = Client::builder()
            .timeout(config.price_fetch_timeout)
            .build()
            .map_err(|e| CustomError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            prices_url: config.prices_url.clone(),
        })
    }

    pub async fn fetch_prices(&self) -> Result<PriceTable, CustomError> {
        debug!("fetching prices from {}", self.prices_url);

        let response = self
            .client
            .get(&self.prices_url)
            .send()
            .await?
            .error_for_status()?;
        let entries: Vec<PriceEntry> = response.json().await?;

        if let Some(as_of) = entries.iter().filter_map(|entry| entry.date).max() {
            debug!("price list as of {}", as_of);
        }

        Ok(PriceTable::from_entries(entries))
    }

    /// Refetches and swaps the cached table. On failure the cache keeps its
    /// previous contents.
    pub async fn refresh(&self, cache: &PriceCache) -> Result<RefreshSummary, CustomError> {
        match self.fetch_prices().await {
            Ok(table) => {
                if table.is_empty() {
                    warn!("price list from {} is empty", self.prices_url);
                }
                let currencies = table.len();
                let fetched_at = cache.replace(table);
                info!("loaded {} prices from {}", currencies, self.prices_url);
                Ok(RefreshSummary {
                    currencies,
                    fetched_at,
                })
            }
            Err(e) => {
                error!("Error fetching exchange rates: {}", e);
                Err(e)
            }
        }
    }
}

#[derive(Debug, Default)]
struct CachedPrices {
    table: PriceTable,
    fetched_at: Option<DateTime<Utc>>,
}

/// Most recently fetched price table, shared across workers.
#[derive(Debug, Default)]
pub struct PriceCache {
    inner: RwLock<CachedPrices>,
}

impl PriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PriceTable {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .table
            .clone()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .fetched_at
    }

    pub fn replace(&self, table: PriceTable) -> DateTime<Utc> {
        let now = Utc::now();
        let mut cached = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        cached.table = table;
        cached.fetched_at = Some(now);
        now
    }
}
