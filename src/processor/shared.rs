use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    command::LedgerCommand,
    ledger::{AccountNumberGenerator, Ledger, LedgerError, RandomAccountNumbers},
};

use super::{CommandOutcome, CommandProcessor};

/// Handle to a ledger that can be shared between threads.
///
/// Every command runs under one lock for its whole duration, so number
/// generation and insertion, or a balance check and the following mutation,
/// are never interleaved with another command.
#[derive(Debug)]
pub struct SharedLedger<G = RandomAccountNumbers> {
    inner: Arc<Mutex<Ledger<G>>>,
}

impl<G> Clone for SharedLedger<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G> SharedLedger<G>
where
    G: AccountNumberGenerator,
{
    pub fn new(ledger: Ledger<G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Runs `f` while holding the lock.
    pub fn with_ledger<T>(&self, f: impl FnOnce(&mut Ledger<G>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

impl<G> CommandProcessor for SharedLedger<G>
where
    G: AccountNumberGenerator,
{
    fn process_command(&mut self, command: LedgerCommand) -> Result<CommandOutcome, LedgerError> {
        self.inner.lock().process_command(command)
    }
}
