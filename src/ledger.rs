use std::collections::HashMap;

use rand::{Rng, SeedableRng, rngs::StdRng};
use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::account::{Account, AccountError};

pub type AccountNumber = u64;

pub const MIN_ACCOUNT_NUMBER: AccountNumber = 1_000_000_000;
pub const MAX_ACCOUNT_NUMBER: AccountNumber = 9_999_999_999;
const ACCOUNT_NUMBER_SPACE: u64 = MAX_ACCOUNT_NUMBER - MIN_ACCOUNT_NUMBER + 1;

/// Upper bound on draws for a single new account number. With realistic
/// account counts a draw almost never collides, so hitting this means the
/// generator keeps producing occupied numbers.
pub const MAX_GENERATION_ATTEMPTS: usize = 1_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Initial deposit must not be negative, got {0}")]
    InvalidInitialDeposit(Decimal),
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("Account {0} not found")]
    NotFound(AccountNumber),
    #[error("No free account number could be generated")]
    AccountNumbersExhausted,
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Source of candidate account numbers. The ledger checks occupancy itself,
/// so implementations don't need to remember what they produced.
pub trait AccountNumberGenerator {
    fn next_account_number(&mut self) -> AccountNumber;
}

impl<F> AccountNumberGenerator for F
where
    F: FnMut() -> AccountNumber,
{
    fn next_account_number(&mut self) -> AccountNumber {
        self()
    }
}

/// Uniform draws from the whole 10-digit range.
#[derive(Debug)]
pub struct RandomAccountNumbers {
    rng: StdRng,
}

impl RandomAccountNumbers {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAccountNumbers {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl AccountNumberGenerator for RandomAccountNumbers {
    fn next_account_number(&mut self) -> AccountNumber {
        self.rng.gen_range(MIN_ACCOUNT_NUMBER..=MAX_ACCOUNT_NUMBER)
    }
}

#[derive(Debug)]
pub struct Ledger<G = RandomAccountNumbers> {
    name: String,
    accounts: HashMap<AccountNumber, Account>,
    generator: G,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_generator(name, RandomAccountNumbers::from_entropy())
    }

    /// Same seed, same sequence of account numbers.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::with_generator(name, RandomAccountNumbers::seeded(seed))
    }
}

impl<G> Ledger<G>
where
    G: AccountNumberGenerator,
{
    pub fn with_generator(name: impl Into<String>, generator: G) -> Self {
        Self {
            name: name.into(),
            accounts: HashMap::new(),
            generator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Unlike a bare bank record, blank holder names and account types are
    /// rejected here too, not only by the caller.
    pub fn create_account(
        &mut self,
        holder_name: impl Into<String>,
        account_type: impl Into<String>,
        initial_deposit: Decimal,
    ) -> Result<&Account, LedgerError> {
        let holder_name = holder_name.into();
        if holder_name.trim().is_empty() {
            return Err(LedgerError::EmptyField {
                field: "Holder name",
            });
        }
        let account_type = account_type.into();
        if account_type.trim().is_empty() {
            return Err(LedgerError::EmptyField {
                field: "Account type",
            });
        }
        if initial_deposit < Decimal::zero() {
            return Err(LedgerError::InvalidInitialDeposit(initial_deposit));
        }

        let number = self.generate_account_number()?;
        info!(
            account_number = number,
            holder_name = %holder_name,
            account_type = %account_type,
            %initial_deposit,
            "account created"
        );
        let account = Account::open(number, holder_name, account_type, initial_deposit);
        Ok(self.accounts.entry(number).or_insert(account))
    }

    fn generate_account_number(&mut self) -> Result<AccountNumber, LedgerError> {
        if self.accounts.len() as u64 >= ACCOUNT_NUMBER_SPACE {
            warn!(accounts = self.accounts.len(), "account number space is full");
            return Err(LedgerError::AccountNumbersExhausted);
        }
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let candidate = self.generator.next_account_number();
            if !(MIN_ACCOUNT_NUMBER..=MAX_ACCOUNT_NUMBER).contains(&candidate) {
                debug!(attempt, candidate, "generated account number out of range");
                continue;
            }
            if !self.accounts.contains_key(&candidate) {
                return Ok(candidate);
            }
            debug!(attempt, candidate, "account number already taken");
        }
        warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "gave up generating an account number"
        );
        Err(LedgerError::AccountNumbersExhausted)
    }

    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    fn find_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// Returns the new balance.
    pub fn deposit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let account = self
            .find_account_mut(number)
            .ok_or(LedgerError::NotFound(number))?;
        let balance = account.deposit(amount)?;
        debug!(account_number = number, %amount, %balance, "deposited");
        Ok(balance)
    }

    /// Returns the new balance.
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let account = self
            .find_account_mut(number)
            .ok_or(LedgerError::NotFound(number))?;
        let balance = account.withdraw(amount)?;
        debug!(account_number = number, %amount, %balance, "withdrawn");
        Ok(balance)
    }

    /// Closed numbers are forgotten, so a later account may be given the same number.
    pub fn close_account(&mut self, number: AccountNumber) -> Result<Account, LedgerError> {
        let account = self
            .accounts
            .remove(&number)
            .ok_or(LedgerError::NotFound(number))?;
        info!(account_number = number, "account closed");
        Ok(account)
    }

    /// No particular order.
    pub fn list_all_accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}
