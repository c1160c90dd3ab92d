use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::CustomError;

pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub prices_url: String,
    pub allowed_origins: Vec<String>,
    pub price_fetch_timeout: Duration,
    /// Largest n accepted by the summation endpoints.
    pub sum_max_n: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Overrides [`Config::default`] with whatever `lookup` returns for each
    /// variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            prices_url: lookup("PRICES_URL").unwrap_or(defaults.prices_url),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|origins| split_origins(&origins))
                .unwrap_or(defaults.allowed_origins),
            price_fetch_timeout: Duration::from_secs(parse_var(
                &lookup,
                "PRICE_FETCH_TIMEOUT_SECS",
                defaults.price_fetch_timeout.as_secs(),
            )?),
            sum_max_n: parse_var(&lookup, "SUM_MAX_N", defaults.sum_max_n)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            prices_url: DEFAULT_PRICES_URL.to_string(),
            allowed_origins: vec![
                "http://localhost:8080".to_string(),
                "http://localhost:5173".to_string(),
            ],
            price_fetch_timeout: Duration::from_secs(10),
            sum_max_n: 10_000,
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, CustomError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CustomError::ConfigError(format!("Failed to parse {}: {:?}", name, raw))),
        None => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn unset_variables_yield_defaults() {
        let config = Config::from_lookup(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:8080", "http://localhost:5173"]
        );
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(vars(&[
            ("PORT", " 9090 "),
            ("ALLOWED_ORIGINS", "http://a.test"),
            ("SUM_MAX_N", "50"),
            ("PRICE_FETCH_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.allowed_origins, vec!["http://a.test"]);
        assert_eq!(config.sum_max_n, 50);
        assert_eq!(config.price_fetch_timeout, Duration::from_secs(3));
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn bad_values_are_config_errors() {
        let err = Config::from_lookup(vars(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, CustomError::ConfigError(_)));
    }

    #[test]
    fn split_origins_ignores_blanks() {
        assert_eq!(
            split_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
