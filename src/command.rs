use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::AccountNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionAction {
    Deposit,
    Withdraw,
}

#[derive(Debug, Clone)]
pub struct TransactionCommand {
    pub action: TransactionAction,
    pub amount: Decimal,
}

impl TransactionCommand {
    pub fn deposit(amount: Decimal) -> Self {
        Self {
            action: TransactionAction::Deposit,
            amount,
        }
    }

    pub fn withdraw(amount: Decimal) -> Self {
        Self {
            action: TransactionAction::Withdraw,
            amount,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("`{0}` is not a valid account number")]
    InvalidAccountNumber(String),
    #[error("`{0}` is not a valid amount")]
    InvalidAmount(String),
    #[error("`{0}` is not a menu option")]
    UnknownChoice(String),
}

/// Entries of the interactive menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    AccountDetails,
    ListAll,
    CloseAccount,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::CreateAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::CheckBalance,
        MenuChoice::AccountDetails,
        MenuChoice::ListAll,
        MenuChoice::CloseAccount,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::AccountDetails => "Account Details",
            MenuChoice::ListAll => "List All Accounts",
            MenuChoice::CloseAccount => "Close Account",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Fields the caller has to collect before the choice can become a command.
    pub fn fields(self) -> &'static [Field] {
        match self {
            MenuChoice::CreateAccount => {
                &[Field::HolderName, Field::AccountType, Field::InitialDeposit]
            }
            MenuChoice::Deposit | MenuChoice::Withdraw => &[Field::AccountNumber, Field::Amount],
            MenuChoice::CheckBalance | MenuChoice::AccountDetails | MenuChoice::CloseAccount => {
                &[Field::AccountNumber]
            }
            MenuChoice::ListAll | MenuChoice::Exit => &[],
        }
    }
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Ok(position) = normalized.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|idx| Self::ALL.get(idx).copied())
                .ok_or_else(|| InputError::UnknownChoice(s.trim().to_owned()));
        }
        match normalized.as_str() {
            "create" | "create account" | "open" => Ok(MenuChoice::CreateAccount),
            "deposit" => Ok(MenuChoice::Deposit),
            "withdraw" | "withdrawal" => Ok(MenuChoice::Withdraw),
            "balance" | "check balance" => Ok(MenuChoice::CheckBalance),
            "details" | "account details" => Ok(MenuChoice::AccountDetails),
            "list" | "list all accounts" => Ok(MenuChoice::ListAll),
            "close" | "close account" => Ok(MenuChoice::CloseAccount),
            "exit" | "quit" | "q" => Ok(MenuChoice::Exit),
            _ => Err(InputError::UnknownChoice(s.trim().to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    HolderName,
    AccountType,
    InitialDeposit,
    AccountNumber,
    Amount,
}

impl Field {
    pub fn prompt(self) -> &'static str {
        match self {
            Field::HolderName => "Holder's Name:",
            Field::AccountType => "Account Type:",
            Field::InitialDeposit => "Initial Deposit:",
            Field::AccountNumber => "Account Number:",
            Field::Amount => "Amount:",
        }
    }
}

/// Text collected for a menu choice, before any parsing happened.
#[derive(Debug, Default, Clone)]
pub struct RawFields {
    pub holder_name: String,
    pub account_type: String,
    pub account_number: String,
    pub amount: String,
}

impl RawFields {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::HolderName => self.holder_name = value,
            Field::AccountType => self.account_type = value,
            Field::AccountNumber => self.account_number = value,
            Field::InitialDeposit | Field::Amount => self.amount = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    CreateAccount {
        holder_name: String,
        account_type: String,
        initial_deposit: Decimal,
    },
    Deposit {
        account_number: AccountNumber,
        amount: Decimal,
    },
    Withdraw {
        account_number: AccountNumber,
        amount: Decimal,
    },
    CheckBalance {
        account_number: AccountNumber,
    },
    AccountDetails {
        account_number: AccountNumber,
    },
    ListAll,
    CloseAccount {
        account_number: AccountNumber,
    },
}

impl LedgerCommand {
    /// Builds the command for `choice` out of raw text. `Exit` has no command.
    pub fn parse_command(
        choice: MenuChoice,
        raw: &RawFields,
    ) -> Result<Option<Self>, InputError> {
        let command = match choice {
            MenuChoice::CreateAccount => LedgerCommand::CreateAccount {
                holder_name: raw.holder_name.trim().to_owned(),
                account_type: raw.account_type.trim().to_owned(),
                initial_deposit: parse_amount(&raw.amount)?,
            },
            MenuChoice::Deposit => LedgerCommand::Deposit {
                account_number: parse_account_number(&raw.account_number)?,
                amount: parse_amount(&raw.amount)?,
            },
            MenuChoice::Withdraw => LedgerCommand::Withdraw {
                account_number: parse_account_number(&raw.account_number)?,
                amount: parse_amount(&raw.amount)?,
            },
            MenuChoice::CheckBalance => LedgerCommand::CheckBalance {
                account_number: parse_account_number(&raw.account_number)?,
            },
            MenuChoice::AccountDetails => LedgerCommand::AccountDetails {
                account_number: parse_account_number(&raw.account_number)?,
            },
            MenuChoice::ListAll => LedgerCommand::ListAll,
            MenuChoice::CloseAccount => LedgerCommand::CloseAccount {
                account_number: parse_account_number(&raw.account_number)?,
            },
            MenuChoice::Exit => return Ok(None),
        };
        Ok(Some(command))
    }
}

/// Any non-negative integer is accepted; range checks are left to lookup,
/// which simply won't find an out-of-range number.
pub fn parse_account_number(raw: &str) -> Result<AccountNumber, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<AccountNumber>()
        .map_err(|_| InputError::InvalidAccountNumber(trimmed.to_owned()))
}

/// Sign is kept as typed, so that the ledger can report non-positive amounts itself.
pub fn parse_amount(raw: &str) -> Result<Decimal, InputError> {
    let trimmed = raw.trim().trim_start_matches('$');
    Decimal::from_str(trimmed).map_err(|_| InputError::InvalidAmount(raw.trim().to_owned()))
}
