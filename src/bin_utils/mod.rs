//! Everything needed to drive an [`Account`] from a terminal: the prompt loop,
//! the teller messages, the self-test harness and argument handling.

use std::io::{BufRead, Write};

use crate::{
    account::Account,
    command::{Amount, Operation, parse_operation},
};
use anyhow::{Context, Result};

pub mod app;
pub mod script_parser;
pub mod teller;

pub const OPERATION_PROMPT: &str =
    "Enter d for a deposit, w for a withdrawal, t for the statement, or q to quit: ";
pub const AMOUNT_PROMPT: &str = "Enter the amount: ";
pub const INVALID_OPERATION: &str = "Operation not allowed. Please try again.";

/// Interactive session over a single account.
pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub account: Account,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    /// Runs until `q` or end of input and hands the account back.
    pub fn run(mut self) -> Result<Account> {
        loop {
            let Some(line) = self.prompt(OPERATION_PROMPT)? else {
                break;
            };
            let operation = parse_operation(&line);
            match operation {
                Operation::Quit => break,
                Operation::Statement => teller::print_statement(self.output, &self.account)?,
                Operation::Invalid => {
                    tracing::debug!(input = %line.trim_end(), "invalid operation");
                    writeln!(self.output, "{INVALID_OPERATION}")?;
                }
                Operation::Deposit | Operation::Withdraw => {
                    let Some(line) = self.prompt(AMOUNT_PROMPT)? else {
                        break;
                    };
                    let amount = match line.parse::<Amount>() {
                        Ok(amount) => amount,
                        Err(err) => {
                            tracing::debug!(input = %line.trim_end(), %err, "invalid amount");
                            writeln!(self.output, "{err}")?;
                            continue;
                        }
                    };
                    if operation == Operation::Deposit {
                        teller::deposit(self.output, &mut self.account, amount)?;
                    } else {
                        teller::withdraw(self.output, &mut self.account, amount)?;
                    }
                }
            }
        }
        Ok(self.account)
    }

    /// Writes `prompt` and reads one line; `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("Failed to flush output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}
