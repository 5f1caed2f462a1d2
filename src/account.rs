use rust_decimal::Decimal;
use thiserror::Error;

use crate::{command::Amount, statement::Statement};

/// Rounds a monetary value to whole cents.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Amount),
    Withdrawal(Amount),
}

impl Transaction {
    pub fn amount(&self) -> Amount {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    /// Amount as it affects the balance: negative for withdrawals.
    pub fn signed_amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(amount) => amount.value(),
            Transaction::Withdrawal(amount) => -amount.value(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transaction::Deposit(_) => "deposit",
            Transaction::Withdrawal(_) => "withdraw",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Sorry, your balance is insufficient!")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("Sorry, the balance cannot hold that amount.")]
    BalanceOverflow { balance: Decimal, requested: Decimal },
}

#[derive(Debug, Clone)]
pub struct Account {
    name: String,
    balance: Decimal,
    starting_balance: Decimal,
    show_balance_after_transaction: bool,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        balance: Decimal,
        show_balance_after_transaction: bool,
    ) -> Self {
        Self {
            name: name.into(),
            balance,
            starting_balance: balance,
            show_balance_after_transaction,
            transactions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn starting_balance(&self) -> Decimal {
        self.starting_balance
    }

    pub fn show_balance_after_transaction(&self) -> bool {
        self.show_balance_after_transaction
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Decides whether `transaction` may be recorded against the current balance.
    /// Nothing is modified; the returned transaction is ready to be [`Account::apply`]'d.
    pub fn handle_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<Transaction, AccountError> {
        if self.balance.checked_add(transaction.signed_amount()).is_none() {
            tracing::debug!(
                account = %self.name,
                balance = %self.balance,
                requested = %transaction.amount(),
                "transaction would overflow the balance"
            );
            return Err(AccountError::BalanceOverflow {
                balance: self.balance,
                requested: transaction.amount().value(),
            });
        }
        match transaction {
            Transaction::Deposit(_) => Ok(transaction),
            Transaction::Withdrawal(amount) => {
                if amount.value() > self.balance {
                    tracing::debug!(
                        account = %self.name,
                        balance = %self.balance,
                        requested = %amount,
                        "withdrawal rejected"
                    );
                    Err(AccountError::InsufficientFunds {
                        balance: self.balance,
                        requested: amount.value(),
                    })
                } else {
                    Ok(transaction)
                }
            }
        }
    }

    /// Records a transaction accepted by [`Account::handle_transaction`].
    pub fn apply(&mut self, transaction: &Transaction) {
        // rounding after every step keeps drift out of the running total
        self.balance = round2(self.balance + transaction.signed_amount());
        self.transactions.push(*transaction);
        tracing::debug!(
            account = %self.name,
            kind = transaction.label(),
            amount = %transaction.amount(),
            balance = %self.balance,
            "transaction applied"
        );
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        let transaction = self.handle_transaction(Transaction::Deposit(amount))?;
        self.apply(&transaction);
        Ok(())
    }

    pub fn withdrawal(&mut self, amount: Amount) -> Result<(), AccountError> {
        let transaction = self.handle_transaction(Transaction::Withdrawal(amount))?;
        self.apply(&transaction);
        Ok(())
    }

    /// Rebuilds the running balance from the starting balance.
    pub fn statement(&self) -> Statement {
        Statement::replay(self.starting_balance, &self.transactions)
    }
}
