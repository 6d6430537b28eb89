//! # Configuration
//!
//! Display settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--store-name`, `--currency-symbol`)
//! 2. Environment variables (`PIZZERIA_*`)
//! 3. Defaults (this file)
//!
//! Prices, surcharges and the tax rate are business rules and live in
//! `pizzeria-core`; nothing here changes what an order costs.

use pizzeria_core::{Money, SymbolPosition};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Shown as the header of every summary.
    pub store_name: String,

    pub currency_symbol: String,

    pub symbol_position: SymbolPosition,
}

impl Default for AppConfig {
    /// Euro amounts with the symbol after the number: `21.78€`.
    fn default() -> Self {
        AppConfig {
            store_name: "Pizzería Express".to_string(),
            currency_symbol: "€".to_string(),
            symbol_position: SymbolPosition::Suffix,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by environment variables.
    ///
    /// ## Environment Variables
    /// - `PIZZERIA_STORE_NAME`: store header
    /// - `PIZZERIA_CURRENCY_SYMBOL`: e.g. "$"
    /// - `PIZZERIA_SYMBOL_POSITION`: "prefix" or "suffix"
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(name) = lookup("PIZZERIA_STORE_NAME") {
            config.store_name = name;
        }

        if let Some(symbol) = lookup("PIZZERIA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(position) = lookup("PIZZERIA_SYMBOL_POSITION") {
            match position.trim().to_lowercase().as_str() {
                "prefix" => config.symbol_position = SymbolPosition::Prefix,
                "suffix" => config.symbol_position = SymbolPosition::Suffix,
                other => tracing::warn!(value = other, "ignoring unknown PIZZERIA_SYMBOL_POSITION"),
            }
        }

        config
    }

    /// Applies command-line overrides on top of this config.
    pub fn with_overrides(mut self, store_name: Option<String>, currency_symbol: Option<String>) -> Self {
        if let Some(name) = store_name {
            self.store_name = name;
        }
        if let Some(symbol) = currency_symbol {
            self.currency_symbol = symbol;
        }
        self
    }

    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol, self.symbol_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.format_currency(Money::from_cents(2178)), "21.78€");
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PIZZERIA_STORE_NAME", "Luigi's"),
            ("PIZZERIA_CURRENCY_SYMBOL", "$"),
            ("PIZZERIA_SYMBOL_POSITION", "Prefix"),
        ]));
        assert_eq!(config.store_name, "Luigi's");
        assert_eq!(config.format_currency(Money::from_cents(2420)), "$24.20");
    }

    #[test]
    fn test_unknown_position_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("PIZZERIA_SYMBOL_POSITION", "middle")]));
        assert_eq!(config.symbol_position, SymbolPosition::Suffix);
    }

    #[test]
    fn test_flag_overrides_win() {
        let config = AppConfig::from_lookup(lookup_from(&[("PIZZERIA_CURRENCY_SYMBOL", "$")]))
            .with_overrides(Some("Roma".to_string()), Some("£".to_string()));
        assert_eq!(config.store_name, "Roma");
        assert_eq!(config.currency_symbol, "£");
    }
}
