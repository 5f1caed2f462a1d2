use rust_decimal::Decimal;
use thiserror::Error;

use crate::command::{BalanceError, parse_balance};

pub const ACCOUNT_NAME_VAR: &str = "SOLDE_ACCOUNT_NAME";
pub const DEFAULT_BALANCE_VAR: &str = "SOLDE_DEFAULT_BALANCE";
pub const SHOW_BALANCE_VAR: &str = "SOLDE_SHOW_BALANCE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SOLDE_DEFAULT_BALANCE: {0}")]
    DefaultBalance(#[source] BalanceError),
    #[error("SOLDE_SHOW_BALANCE: expected a boolean, got `{0}`")]
    ShowBalance(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub account_name: String,
    /// Starting balance used when none is given on the command line.
    pub default_balance: Decimal,
    pub show_balance_after_transaction: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_name: "My account".to_string(),
            default_balance: Decimal::ZERO,
            show_balance_after_transaction: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults, overridden by whatever `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(name) = lookup(ACCOUNT_NAME_VAR) {
            config.account_name = name;
        }
        if let Some(balance) = lookup(DEFAULT_BALANCE_VAR) {
            config.default_balance =
                parse_balance(&balance).map_err(ConfigError::DefaultBalance)?;
        }
        if let Some(flag) = lookup(SHOW_BALANCE_VAR) {
            config.show_balance_after_transaction = match flag.trim().to_ascii_lowercase().as_str()
            {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::ShowBalance(flag)),
            };
        }
        Ok(config)
    }
}
