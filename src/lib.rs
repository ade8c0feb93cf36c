/// Balance management of a single bank account.
/// Balance changes are events, which are created by handling commands
pub mod account;

/// Commands executed by [`account`] and [`ledger`], plus parsing of raw
/// text input into them.
pub mod command;

/// The bank itself: owns every open account and hands out account numbers.
pub mod ledger;

/// Command processor interface, implemented by the in-memory ledger and by
/// a lock-protected handle for sharing it between threads.
pub mod processor;

/// Terminal front end. Ideally this would live in its own crate, but the
/// integration tests drive it, so it stays here.
pub mod bin_utils;
