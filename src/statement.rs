use std::fmt;

use rust_decimal::Decimal;

use crate::{
    account::{Transaction, round2},
    command::format_money,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRow {
    pub transaction: Transaction,
    /// Running balance after this transaction.
    pub balance: Decimal,
}

/// Running balance reconstructed from a starting balance and a transaction history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub starting_balance: Decimal,
    pub rows: Vec<StatementRow>,
}

impl Statement {
    /// `transactions` must be a history accepted by
    /// [`Account::handle_transaction`](crate::account::Account::handle_transaction).
    pub fn replay(starting_balance: Decimal, transactions: &[Transaction]) -> Self {
        let mut balance = starting_balance;
        let rows = transactions
            .iter()
            .map(|transaction| {
                balance = round2(balance + transaction.signed_amount());
                StatementRow {
                    transaction: *transaction,
                    balance,
                }
            })
            .collect();
        Self {
            starting_balance,
            rows,
        }
    }

    pub fn closing_balance(&self) -> Decimal {
        self.rows
            .last()
            .map_or(self.starting_balance, |row| row.balance)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   op       amount     balance")?;
        writeln!(f, "--------  ----------  ----------")?;
        writeln!(f, "{:22}{:>10}  ", "", format_money(self.starting_balance))?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8}  {:>10}  {:>10}",
                row.transaction.label(),
                row.transaction.amount().to_string(),
                format_money(row.balance)
            )?;
        }
        writeln!(f)
    }
}
