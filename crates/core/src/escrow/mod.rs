//! Escrow and balance accounting for Marquee.
//!
//! Tracks which money belongs to whom: liquid customer balances, deposits
//! held in escrow while a ticket is unresolved, and revenue the venue has
//! earned from check-ins.
//!
//! # Modules
//!
//! - `accounts` - The funds ledger and its movement operations
//! - `error` - Funds-specific error types

pub mod accounts;
pub mod error;

pub use accounts::FundsLedger;
pub use error::EscrowError;
