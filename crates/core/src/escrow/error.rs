//! Funds ledger error types.
//!
//! This module defines all errors that can occur while moving money between
//! customer balances, the escrow bucket, and the revenue bucket.

use marquee_shared::Money;
use thiserror::Error;

/// Errors that can occur during funds ledger operations.
#[derive(Debug, Error)]
pub enum EscrowError {
    // ========== Validation Errors ==========
    /// Transfer amount cannot be zero.
    #[error("Transfer amount cannot be zero")]
    ZeroAmount,

    /// Transfer amount cannot be negative.
    #[error("Transfer amount cannot be negative")]
    NegativeAmount,

    /// The portion kept from a payment cannot exceed the payment itself.
    #[error("Held amount {kept} exceeds attached payment {payment}")]
    HoldExceedsPayment {
        /// The attached payment.
        payment: Money,
        /// The portion requested to be held.
        kept: Money,
    },

    // ========== Balance Errors ==========
    /// Customer balance does not cover the attached payment.
    #[error("Not enough balance: available {available}, required {required}")]
    InsufficientFunds {
        /// The customer's liquid balance.
        available: Money,
        /// The amount the transfer needs.
        required: Money,
    },

    /// Escrow bucket does not cover the requested movement.
    #[error("Escrow does not cover movement: held {held}, required {required}")]
    InsufficientEscrow {
        /// The total currently held in escrow.
        held: Money,
        /// The amount the movement needs.
        required: Money,
    },
}

impl EscrowError {
    /// Returns the error code for host-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "ZERO_AMOUNT",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::HoldExceedsPayment { .. } => "HOLD_EXCEEDS_PAYMENT",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::InsufficientEscrow { .. } => "INSUFFICIENT_ESCROW",
        }
    }
}
