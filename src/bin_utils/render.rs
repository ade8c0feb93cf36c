use std::io::Write;

use crate::{
    account::{Account, AccountError, format_money},
    command::{InputError, MenuChoice, TransactionAction},
    ledger::LedgerError,
    processor::CommandOutcome,
};

use super::{
    ServiceError,
    csv_printer::{AccountRow, print_accounts},
};

const SEPARATOR: &str = "-------------------------";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingFormat {
    #[default]
    Details,
    Csv,
}

/// User-facing text for everything except listings, see [`write_listing`].
pub fn outcome_message(outcome: &CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Created(acc) => format!(
            "Account created for {}!\nAccount Number: {}",
            acc.holder_name(),
            acc.number()
        ),
        CommandOutcome::Deposited {
            amount, balance, ..
        } => format!(
            "Deposited ${}.\nNew Balance: ${}",
            format_money(*amount),
            format_money(*balance)
        ),
        CommandOutcome::Withdrawn {
            amount, balance, ..
        } => format!(
            "Withdrew ${}.\nNew Balance: ${}",
            format_money(*amount),
            format_money(*balance)
        ),
        CommandOutcome::Balance { balance, .. } => {
            format!("Current Balance: ${}", format_money(*balance))
        }
        CommandOutcome::Details(acc) => acc.to_string(),
        CommandOutcome::Listing(accounts) => format!("{} account(s)", accounts.len()),
        CommandOutcome::Closed(acc) => format!("Account {} has been closed.", acc.number()),
    }
}

/// `choice` is `None` when the menu choice itself could not be read.
pub fn error_message(choice: Option<MenuChoice>, err: &ServiceError) -> String {
    match err {
        ServiceError::Input(InputError::UnknownChoice(raw)) => {
            format!(
                "Invalid choice `{raw}`. Please choose an option from 1 to {}.",
                MenuChoice::ALL.len()
            )
        }
        ServiceError::Input(InputError::InvalidAmount(_))
            if choice == Some(MenuChoice::CreateAccount) =>
        {
            "Invalid input for deposit. Please enter a number.".to_owned()
        }
        ServiceError::Input(_)
            if matches!(choice, Some(MenuChoice::Deposit | MenuChoice::Withdraw)) =>
        {
            "Invalid input. Please enter numbers.".to_owned()
        }
        ServiceError::Input(_) => "Invalid account number. Please enter a number.".to_owned(),
        ServiceError::Ledger(err) => ledger_error_message(err).to_owned(),
    }
}

fn ledger_error_message(err: &LedgerError) -> &'static str {
    match err {
        LedgerError::InvalidInitialDeposit(_) => "Initial deposit must be $0 or more.",
        LedgerError::EmptyField { .. } => "Name and Account Type cannot be empty.",
        LedgerError::NotFound(_) => "Account not found.",
        LedgerError::AccountNumbersExhausted => {
            "No account number is available. Please try again later."
        }
        LedgerError::Account(AccountError::InvalidAmount {
            action: TransactionAction::Deposit,
        }) => "Invalid deposit amount. Must be positive.",
        LedgerError::Account(AccountError::InvalidAmount {
            action: TransactionAction::Withdraw,
        }) => "Invalid withdrawal amount. Must be positive.",
        LedgerError::Account(AccountError::InsufficientFunds { .. }) => "Insufficient funds.",
        LedgerError::Account(AccountError::AmountTooLarge { .. }) => "Amount is too large.",
    }
}

pub fn close_confirmation(acc: &Account) -> String {
    format!(
        "Are you sure you want to close account {} - {}?",
        acc.number(),
        acc.holder_name()
    )
}

/// Accounts are sorted by number so that repeated listings read the same.
pub fn write_listing<W>(
    output: &mut W,
    accounts: &[Account],
    format: ListingFormat,
) -> anyhow::Result<()>
where
    W: Write,
{
    if accounts.is_empty() {
        writeln!(output, "No accounts in the bank.")?;
        return Ok(());
    }
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by_key(|acc| acc.number());

    match format {
        ListingFormat::Details => {
            writeln!(output, "--- All Bank Accounts ---")?;
            for acc in sorted {
                writeln!(output, "{acc}")?;
                writeln!(output, "{SEPARATOR}")?;
            }
        }
        ListingFormat::Csv => {
            print_accounts(output, sorted.into_iter().map(AccountRow::from))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn alice() -> Account {
        Account::open(
            1_234_567_890,
            "Alice".to_owned(),
            "Savings".to_owned(),
            Decimal::new(15000, 2),
        )
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            outcome_message(&CommandOutcome::Created(alice())),
            "Account created for Alice!\nAccount Number: 1234567890"
        );
        assert_eq!(
            outcome_message(&CommandOutcome::Withdrawn {
                account_number: 1_234_567_890,
                amount: Decimal::new(5, 1),
                balance: Decimal::new(1495, 1),
            }),
            "Withdrew $0.50.\nNew Balance: $149.50"
        );
        assert_eq!(
            outcome_message(&CommandOutcome::Closed(alice())),
            "Account 1234567890 has been closed."
        );
    }

    #[test]
    fn error_messages_follow_failure_kind() {
        let insufficient = ServiceError::Ledger(LedgerError::Account(
            AccountError::InsufficientFunds {
                requested: Decimal::from(200),
                available: Decimal::from(150),
            },
        ));
        assert_eq!(
            error_message(Some(MenuChoice::Withdraw), &insufficient),
            "Insufficient funds."
        );

        let invalid = ServiceError::Ledger(LedgerError::Account(AccountError::InvalidAmount {
            action: TransactionAction::Withdraw,
        }));
        assert_eq!(
            error_message(Some(MenuChoice::Withdraw), &invalid),
            "Invalid withdrawal amount. Must be positive."
        );

        let too_large = ServiceError::Ledger(LedgerError::Account(
            AccountError::AmountTooLarge {
                amount: Decimal::MAX,
                balance: Decimal::ONE,
            },
        ));
        assert_eq!(
            error_message(Some(MenuChoice::Deposit), &too_large),
            "Amount is too large."
        );

        let bad_number = ServiceError::Input(InputError::InvalidAccountNumber("x".to_owned()));
        assert_eq!(
            error_message(Some(MenuChoice::CheckBalance), &bad_number),
            "Invalid account number. Please enter a number."
        );
        assert_eq!(
            error_message(Some(MenuChoice::Deposit), &bad_number),
            "Invalid input. Please enter numbers."
        );
    }

    #[test]
    fn listing_formats() {
        let mut output = Vec::new();
        write_listing(&mut output, &[], ListingFormat::Details).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "No accounts in the bank.\n");

        let mut output = Vec::new();
        write_listing(&mut output, &[alice()], ListingFormat::Details).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "--- All Bank Accounts ---\n\
             Account Number: 1234567890\n\
             Holder Name: Alice\n\
             Account Type: Savings\n\
             Balance: $150.00\n\
             -------------------------\n"
        );

        let mut output = Vec::new();
        write_listing(&mut output, &[alice()], ListingFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "account_number,holder_name,account_type,balance\n1234567890,Alice,Savings,150.00\n"
        );
    }
}
