/// Single account ledger: balance, append-only transaction history and the
/// deposit/withdrawal rules.
pub mod account;

/// Parsing and validation of operation selectors, amounts and balances.
/// Anything reaching [`account`] has already been validated here.
pub mod command;

/// Running balance rebuilt from the transaction history.
pub mod statement;

/// Defaults for the interactive session, overridable from the environment.
pub mod config;

/// Terminal front end: prompt loop, teller messages, self-test harness and
/// argument handling. Lives in the library so integration tests can drive it.
pub mod bin_utils;
