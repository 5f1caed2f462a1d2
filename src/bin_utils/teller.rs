use std::io::Write;

use anyhow::Result;

use crate::{
    account::Account,
    command::{Amount, format_money},
};

pub fn print_balance<W>(output: &mut W, account: &Account) -> Result<()>
where
    W: Write,
{
    writeln!(
        output,
        "{}: balance is ${}.",
        account.name(),
        format_money(account.balance())
    )?;
    writeln!(output)?;
    Ok(())
}

pub fn print_statement<W>(output: &mut W, account: &Account) -> Result<()>
where
    W: Write,
{
    write!(output, "{}", account.statement())?;
    Ok(())
}

/// Deposits `amount`, or prints why it was refused. A refusal is not an error.
pub fn deposit<W>(output: &mut W, account: &mut Account, amount: Amount) -> Result<()>
where
    W: Write,
{
    match account.deposit(amount) {
        Ok(()) => {
            writeln!(output, "{}: deposit ${amount}.", account.name())?;
            after_transaction(output, account)
        }
        Err(err) => {
            writeln!(output, "{err}")?;
            Ok(())
        }
    }
}

/// Withdraws `amount`, or prints why it was refused. A refusal is not an error.
pub fn withdraw<W>(output: &mut W, account: &mut Account, amount: Amount) -> Result<()>
where
    W: Write,
{
    match account.withdrawal(amount) {
        Ok(()) => {
            writeln!(output, "{}: withdrawal ${amount}.", account.name())?;
            after_transaction(output, account)
        }
        Err(err) => {
            writeln!(output, "{err}")?;
            Ok(())
        }
    }
}

fn after_transaction<W>(output: &mut W, account: &Account) -> Result<()>
where
    W: Write,
{
    if account.show_balance_after_transaction() {
        print_balance(output, account)?;
    }
    Ok(())
}
