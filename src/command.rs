use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdraw,
    Statement,
    Quit,
    Invalid,
}

/// Maps a raw selector line to an [`Operation`].
///
/// Only the line terminator is stripped: the selector must be exactly one of
/// `d`, `w`, `t` or `q`.
pub fn parse_operation(line: &str) -> Operation {
    match line.trim_end_matches(['\r', '\n']) {
        "d" => Operation::Deposit,
        "w" => Operation::Withdraw,
        "t" => Operation::Statement,
        "q" => Operation::Quit,
        _ => Operation::Invalid,
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount. Please try again.")]
    NotANumber,
    #[error("The amount must be positive.")]
    NotPositive,
    #[error("You cannot provide fractions of a cent.")]
    FractionOfCent,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Please enter a valid balance.")]
    NotANumber,
    #[error("The balance cannot be negative.")]
    Negative,
    #[error("You cannot provide fractions of a cent.")]
    FractionOfCent,
}

/// A strictly positive monetary amount with at most two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        if value.normalize().scale() > 2 {
            return Err(AmountError::FractionOfCent);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_decimal(s).ok_or(AmountError::NotANumber)?;
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        if has_sub_cent_digits(s) || value.normalize().scale() > 2 {
            return Err(AmountError::FractionOfCent);
        }
        Ok(Self(value))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_money(self.0))
    }
}

/// Validates a starting balance: zero is allowed, negatives are not.
pub fn parse_balance(s: &str) -> Result<Decimal, BalanceError> {
    let value = parse_decimal(s).ok_or(BalanceError::NotANumber)?;
    if value < Decimal::ZERO {
        return Err(BalanceError::Negative);
    }
    if has_sub_cent_digits(s) || value.normalize().scale() > 2 {
        return Err(BalanceError::FractionOfCent);
    }
    Ok(value)
}

/// Formats a value with exactly two decimals, e.g. `10` as `10.00`.
pub fn format_money(value: Decimal) -> String {
    let mut value = value.round_dp(2);
    value.rescale(2);
    value.to_string()
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// True when the text carries a `.` followed by three or more digits,
/// regardless of their value (`1.000` counts).
fn has_sub_cent_digits(s: &str) -> bool {
    s.split('.')
        .skip(1)
        .any(|fraction| fraction.chars().take_while(char::is_ascii_digit).count() >= 3)
}
