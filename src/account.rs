use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy, prelude::Zero};
use thiserror::Error;

use crate::{
    command::{TransactionAction, TransactionCommand},
    ledger::AccountNumber,
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AccountEventKind {
    Deposited,
    Withdrawn,
}

#[derive(Debug)]
pub(crate) struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("{action:?} amount must be positive")]
    InvalidAmount { action: TransactionAction },
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Deposit of {amount} would overflow the balance {balance}")]
    AmountTooLarge { amount: Decimal, balance: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    holder_name: String,
    account_type: String,
    balance: Decimal,
}

impl Account {
    /// Accounts are only opened by [`crate::ledger::Ledger`], which validates
    /// the initial deposit beforehand.
    pub(crate) fn open(
        number: AccountNumber,
        holder_name: String,
        account_type: String,
        initial_deposit: Decimal,
    ) -> Self {
        debug_assert!(initial_deposit >= Decimal::zero());
        Self {
            number,
            holder_name,
            account_type,
            balance: initial_deposit,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.execute(TransactionCommand::deposit(amount))
    }

    /// Returns the new balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.execute(TransactionCommand::withdraw(amount))
    }

    fn execute(&mut self, command: TransactionCommand) -> Result<Decimal, AccountError> {
        let evt = self.handle_transaction(command)?;
        self.apply(&evt);
        Ok(self.balance)
    }

    /// Events are only built by `handle_transaction` against the current
    /// balance, so applying one never overflows or goes below zero.
    fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Deposited => {
                self.balance += event.amount;
            }
            AccountEventKind::Withdrawn => {
                self.balance -= event.amount;
            }
        }
    }

    fn handle_transaction(
        &self,
        command: TransactionCommand,
    ) -> Result<AccountEvent, AccountError> {
        if command.amount <= Decimal::zero() {
            return Err(AccountError::InvalidAmount {
                action: command.action,
            });
        }

        match command.action {
            TransactionAction::Deposit => {
                if self.balance.checked_add(command.amount).is_some() {
                    Ok(AccountEvent {
                        amount: command.amount,
                        kind: AccountEventKind::Deposited,
                    })
                } else {
                    Err(AccountError::AmountTooLarge {
                        amount: command.amount,
                        balance: self.balance,
                    })
                }
            }
            TransactionAction::Withdraw => {
                if self.balance >= command.amount {
                    Ok(AccountEvent {
                        amount: command.amount,
                        kind: AccountEventKind::Withdrawn,
                    })
                } else {
                    Err(AccountError::InsufficientFunds {
                        requested: command.amount,
                        available: self.balance,
                    })
                }
            }
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Number: {}", self.number)?;
        writeln!(f, "Holder Name: {}", self.holder_name)?;
        writeln!(f, "Account Type: {}", self.account_type)?;
        write!(f, "Balance: ${}", format_money(self.balance))
    }
}

/// Renders an amount rounded half away from zero to cents, always with two
/// decimal places.
pub fn format_money(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{cents:.2}")
}
