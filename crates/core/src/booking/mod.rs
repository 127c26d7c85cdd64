//! Ticket booking lifecycle for Marquee.
//!
//! This module implements the single-ticket booking state machine:
//! book with a deposit, then either cancel for a full refund or check in
//! and forfeit the deposit to the venue.
//!
//! # Modules
//!
//! - `types` - Ticket record, pricing constants, booking receipt
//! - `error` - Booking-specific error types
//! - `ledger` - The state machine over tickets, funds, and the journal
//! - `journal` - Append-only audit trail of lifecycle events

pub mod error;
pub mod journal;
pub mod ledger;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use error::BookingError;
pub use journal::{BookingEvent, Journal, JournalEntry};
pub use ledger::BookingLedger;
pub use types::{BookingReceipt, MIN_CUSTOMER_AGE, MIN_DEPOSIT, TICKET_PRICE, Ticket};
