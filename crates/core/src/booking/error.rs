//! Booking error types.
//!
//! This module defines all errors that can abort a booking, check-in,
//! or cancellation. Every variant is a rejected-operation error: the
//! caller must fix the input and resubmit, nothing is retried internally,
//! and a rejected operation leaves ledger state and balances untouched.

use marquee_shared::Money;
use thiserror::Error;

use crate::escrow::EscrowError;

/// Errors that can occur during booking operations.
#[derive(Debug, Error)]
pub enum BookingError {
    // ========== Booking Errors ==========
    /// Movie name is blank or the customer is under the age floor.
    #[error("Invalid ticket info: empty movie name or customer age below 18")]
    InvalidTicketInfo,

    /// The caller already holds a valid ticket, resolved or not.
    #[error("Cannot book: customer already holds a valid ticket")]
    AlreadyHasUnresolvedTicket,

    /// The attached payment is below the minimum deposit.
    #[error("Insufficient payment: sent {sent}, minimum {minimum}")]
    InsufficientPayment {
        /// The payment attached to the booking.
        sent: Money,
        /// The fixed minimum deposit.
        minimum: Money,
    },

    // ========== Resolution Errors ==========
    /// Check-in or cancel attempted with no currently valid ticket.
    #[error("No valid ticket")]
    NoValidTicket,

    /// Cancel or repeat check-in attempted after check-in.
    #[error("Customer already checked in")]
    AlreadyCheckedIn,

    // ========== Funds Errors ==========
    /// A funds movement was rejected by the escrow ledger.
    #[error(transparent)]
    Funds(#[from] EscrowError),
}

impl BookingError {
    /// Returns the error code for host-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTicketInfo => "INVALID_TICKET_INFO",
            Self::AlreadyHasUnresolvedTicket => "ALREADY_HAS_UNRESOLVED_TICKET",
            Self::InsufficientPayment { .. } => "INSUFFICIENT_PAYMENT",
            Self::NoValidTicket => "NO_VALID_TICKET",
            Self::AlreadyCheckedIn => "ALREADY_CHECKED_IN",
            Self::Funds(inner) => inner.error_code(),
        }
    }
}
