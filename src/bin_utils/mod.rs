//! This module could be a separate crate on its own, a terminal front end for
//! [`cute_bank`](crate), but for simplicity it lives next to the core logic so that
//! integration tests can drive it.

use std::io::{BufRead, Write};

use crate::{
    command::{InputError, LedgerCommand, MenuChoice, RawFields},
    ledger::LedgerError,
    processor::{CommandOutcome, CommandProcessor},
};
use anyhow::Result;
use render::{
    ListingFormat, close_confirmation, error_message, outcome_message, write_listing,
};
use thiserror::Error;
use tracing::debug;

pub mod csv_printer;
pub mod prompt;
pub mod render;

/// Why a menu action did not go through. Malformed text never reaches the
/// ledger, so the two sides stay distinguishable.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Menu-driven session over line based input.
pub struct Service<'w, R, W: 'w, P> {
    pub input: R,
    pub output: &'w mut W,
    pub processor: P,
    pub bank_name: String,
    pub listing_format: ListingFormat,
}

impl<'w, R, W, P> Service<'w, R, W, P>
where
    R: BufRead,
    W: Write + 'w,
    P: CommandProcessor,
{
    /// Runs until `Exit` is chosen or the input ends.
    pub fn run(mut self) -> Result<()> {
        writeln!(self.output, "Welcome to {}!", self.bank_name)?;
        while let Some(choice) = self.next_choice()? {
            if choice == MenuChoice::Exit {
                writeln!(self.output, "\nGoodbye!")?;
                break;
            }
            if !self.handle_choice(choice)? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// `None` once the input is exhausted.
    fn next_choice(&mut self) -> Result<Option<MenuChoice>> {
        loop {
            writeln!(self.output)?;
            for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", idx + 1, choice.label())?;
            }
            let answer = prompt::ask(
                &mut self.input,
                &mut *self.output,
                "Please choose an option:",
            )?;
            let Some(line) = answer else {
                return Ok(None);
            };
            match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "menu choice");
                    return Ok(Some(choice));
                }
                Err(err) => self.report_error(None, err.into())?,
            }
        }
    }

    /// Returns `false` when the input ended halfway through.
    fn handle_choice(&mut self, choice: MenuChoice) -> Result<bool> {
        let mut raw = RawFields::default();
        for field in choice.fields() {
            let answer = prompt::ask(&mut self.input, &mut *self.output, field.prompt())?;
            let Some(value) = answer else {
                return Ok(false);
            };
            raw.set(*field, value);
        }

        let command = match LedgerCommand::parse_command(choice, &raw) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(err) => {
                self.report_error(Some(choice), err.into())?;
                return Ok(true);
            }
        };

        if let LedgerCommand::CloseAccount { account_number } = command {
            match self
                .processor
                .process_command(LedgerCommand::AccountDetails { account_number })
            {
                Ok(CommandOutcome::Details(account)) => {
                    let question = close_confirmation(&account);
                    if !prompt::confirm(&mut self.input, &mut *self.output, &question)? {
                        writeln!(self.output, "\nAccount closure cancelled.")?;
                        return Ok(true);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    self.report_error(Some(choice), err.into())?;
                    return Ok(true);
                }
            }
        }

        match self.processor.process_command(command) {
            Ok(CommandOutcome::Listing(accounts)) => {
                writeln!(self.output)?;
                write_listing(&mut *self.output, &accounts, self.listing_format)?;
            }
            Ok(outcome) => writeln!(self.output, "\n{}", outcome_message(&outcome))?,
            Err(err) => self.report_error(Some(choice), err.into())?,
        }
        Ok(true)
    }

    fn report_error(&mut self, choice: Option<MenuChoice>, err: ServiceError) -> Result<()> {
        debug!(?choice, %err, "request rejected");
        writeln!(self.output, "\nError: {}", error_message(choice, &err))?;
        Ok(())
    }
}
