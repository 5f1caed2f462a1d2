use std::io::{BufRead, Write};

use anyhow::Result;
use rust_decimal::Decimal;
use thiserror::Error;

use super::{
    Service,
    self_test::{DEFAULT_SCRIPT, SelfTest},
    teller,
};
use crate::{
    account::Account,
    command::{BalanceError, parse_balance},
    config::Config,
};

pub const TEST_FLAG: &str = "-t";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("The arguments are invalid.")]
    TooManyArguments,
    #[error(transparent)]
    Balance(#[from] BalanceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive { starting_balance: Decimal },
    SelfTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => std::process::ExitCode::SUCCESS,
            ExitStatus::Failure => std::process::ExitCode::FAILURE,
        }
    }
}

/// Picks the mode from the arguments following the program name.
pub fn parse_args(args: &[String], default_balance: Decimal) -> Result<Mode, ArgumentError> {
    match args {
        [] => Ok(Mode::Interactive {
            starting_balance: default_balance,
        }),
        [flag] if flag == TEST_FLAG => Ok(Mode::SelfTest),
        [balance] => Ok(Mode::Interactive {
            starting_balance: parse_balance(balance)?,
        }),
        _ => Err(ArgumentError::TooManyArguments),
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "usage: {program} [{TEST_FLAG}|amount]\n\
         \x20 {TEST_FLAG}      run the self-test\n\
         \x20 amount  starting balance, at most two decimals\n"
    )
}

pub struct App<'w, R, W: 'w> {
    pub config: Config,
    pub input: R,
    pub output: &'w mut W,
}

impl<'w, R, W> App<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    /// Runs the program for `args` (program name first). Only I/O failures are
    /// returned as errors; everything else maps to an [`ExitStatus`].
    pub fn run<I>(self, args: I) -> Result<ExitStatus>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| "solde".to_string());
        let args: Vec<String> = args.collect();

        let mode = match parse_args(&args, self.config.default_balance) {
            Ok(mode) => mode,
            Err(err) => {
                tracing::debug!(?args, %err, "rejected arguments");
                writeln!(self.output, "{err}")?;
                write!(self.output, "{}", usage(&program))?;
                return Ok(ExitStatus::Failure);
            }
        };
        tracing::info!(?mode, "starting");

        match mode {
            Mode::SelfTest => {
                let report = SelfTest::new(self.output).run(DEFAULT_SCRIPT.as_bytes())?;
                Ok(if report.all_passed() {
                    ExitStatus::Success
                } else {
                    ExitStatus::Failure
                })
            }
            Mode::Interactive { starting_balance } => {
                writeln!(self.output, "Welcome to your bank.")?;
                let account = Account::new(
                    self.config.account_name,
                    starting_balance,
                    self.config.show_balance_after_transaction,
                );
                teller::print_balance(self.output, &account)?;
                let service = Service {
                    input: self.input,
                    output: self.output,
                    account,
                };
                let account = service.run()?;
                tracing::info!(
                    balance = %account.balance(),
                    transactions = account.transactions().len(),
                    "session ended"
                );
                Ok(ExitStatus::Success)
            }
        }
    }
}
