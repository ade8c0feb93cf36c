use tracing::trace;

use crate::{
    command::LedgerCommand,
    ledger::{AccountNumberGenerator, Ledger, LedgerError},
};

use super::{CommandOutcome, CommandProcessor};

impl<G> CommandProcessor for Ledger<G>
where
    G: AccountNumberGenerator,
{
    fn process_command(&mut self, command: LedgerCommand) -> Result<CommandOutcome, LedgerError> {
        trace!(?command, bank = self.name(), "processing command");
        match command {
            LedgerCommand::CreateAccount {
                holder_name,
                account_type,
                initial_deposit,
            } => {
                let account = self.create_account(holder_name, account_type, initial_deposit)?;
                Ok(CommandOutcome::Created(account.clone()))
            }
            LedgerCommand::Deposit {
                account_number,
                amount,
            } => {
                let balance = self.deposit(account_number, amount)?;
                Ok(CommandOutcome::Deposited {
                    account_number,
                    amount,
                    balance,
                })
            }
            LedgerCommand::Withdraw {
                account_number,
                amount,
            } => {
                let balance = self.withdraw(account_number, amount)?;
                Ok(CommandOutcome::Withdrawn {
                    account_number,
                    amount,
                    balance,
                })
            }
            LedgerCommand::CheckBalance { account_number } => {
                let account = self
                    .find_account(account_number)
                    .ok_or(LedgerError::NotFound(account_number))?;
                Ok(CommandOutcome::Balance {
                    account_number,
                    balance: account.balance(),
                })
            }
            LedgerCommand::AccountDetails { account_number } => self
                .find_account(account_number)
                .cloned()
                .map(CommandOutcome::Details)
                .ok_or(LedgerError::NotFound(account_number)),
            LedgerCommand::ListAll => Ok(CommandOutcome::Listing(
                self.list_all_accounts().cloned().collect(),
            )),
            LedgerCommand::CloseAccount { account_number } => {
                let account = self.close_account(account_number)?;
                Ok(CommandOutcome::Closed(account))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::{
        Decimal,
        prelude::{FromPrimitive, Zero},
    };

    use crate::{account::AccountError, command::TransactionAction};

    use super::*;

    fn create(ledger: &mut Ledger, deposit: Decimal) -> u64 {
        let outcome = ledger
            .process_command(LedgerCommand::CreateAccount {
                holder_name: "Alice".to_owned(),
                account_type: "Savings".to_owned(),
                initial_deposit: deposit,
            })
            .unwrap();
        let CommandOutcome::Created(account) = outcome else {
            panic!("unexpected outcome {outcome:?}");
        };
        account.number()
    }

    #[test]
    fn process_some_commands() {
        let mut ledger = Ledger::new("Bankify");
        let a1 = create(&mut ledger, Decimal::from_u32(10).unwrap());
        let a2 = create(&mut ledger, Decimal::zero());
        assert_eq!(ledger.len(), 2);

        let outcome = ledger
            .process_command(LedgerCommand::Deposit {
                account_number: a2,
                amount: Decimal::from_u32(10).unwrap(),
            })
            .unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Deposited {
                account_number: a2,
                amount: Decimal::from_u32(10).unwrap(),
                balance: Decimal::from_u32(10).unwrap(),
            }
        );

        let outcome = ledger
            .process_command(LedgerCommand::Withdraw {
                account_number: a1,
                amount: Decimal::from_u32(4).unwrap(),
            })
            .unwrap();
        assert!(matches!(
            outcome,
            CommandOutcome::Withdrawn { balance, .. } if balance == Decimal::from_u32(6).unwrap()
        ));

        let outcome = ledger
            .process_command(LedgerCommand::CheckBalance { account_number: a1 })
            .unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Balance {
                account_number: a1,
                balance: Decimal::from_u32(6).unwrap(),
            }
        );

        let CommandOutcome::Listing(accounts) =
            ledger.process_command(LedgerCommand::ListAll).unwrap()
        else {
            panic!("expected listing");
        };
        assert_eq!(accounts.len(), 2);

        let err = ledger
            .process_command(LedgerCommand::Withdraw {
                account_number: a2,
                amount: Decimal::zero(),
            })
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::Account(AccountError::InvalidAmount {
                action: TransactionAction::Withdraw
            })
        );
    }

    #[test]
    fn details_and_close() {
        let mut ledger = Ledger::new("Bankify");
        let number = create(&mut ledger, Decimal::new(2550, 2));

        let CommandOutcome::Details(account) = ledger
            .process_command(LedgerCommand::AccountDetails {
                account_number: number,
            })
            .unwrap()
        else {
            panic!("expected details");
        };
        assert_eq!(account.holder_name(), "Alice");
        assert_eq!(account.balance(), Decimal::new(2550, 2));

        let CommandOutcome::Closed(closed) = ledger
            .process_command(LedgerCommand::CloseAccount {
                account_number: number,
            })
            .unwrap()
        else {
            panic!("expected closed");
        };
        assert_eq!(closed, account);

        for command in [
            LedgerCommand::AccountDetails {
                account_number: number,
            },
            LedgerCommand::CheckBalance {
                account_number: number,
            },
            LedgerCommand::CloseAccount {
                account_number: number,
            },
        ] {
            assert_eq!(
                ledger.process_command(command).unwrap_err(),
                LedgerError::NotFound(number)
            );
        }
    }
}
