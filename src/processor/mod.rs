use rust_decimal::Decimal;

use crate::{
    account::Account,
    command::LedgerCommand,
    ledger::{AccountNumber, LedgerError},
};

pub mod in_memory_processor;
pub mod shared;

/// Result of a successful [`LedgerCommand`]. Accounts are returned as
/// snapshots, the ledger keeps ownership of the live ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Created(Account),
    Deposited {
        account_number: AccountNumber,
        amount: Decimal,
        balance: Decimal,
    },
    Withdrawn {
        account_number: AccountNumber,
        amount: Decimal,
        balance: Decimal,
    },
    Balance {
        account_number: AccountNumber,
        balance: Decimal,
    },
    Details(Account),
    Listing(Vec<Account>),
    Closed(Account),
}

pub trait CommandProcessor {
    fn process_command(&mut self, command: LedgerCommand)
    -> Result<CommandOutcome, LedgerError>;
}

impl<P> CommandProcessor for &mut P
where
    P: CommandProcessor + ?Sized,
{
    fn process_command(&mut self, command: LedgerCommand) -> Result<CommandOutcome, LedgerError> {
        (**self).process_command(command)
    }
}
