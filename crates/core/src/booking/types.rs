//! Booking domain types.
//!
//! This module defines the per-customer ticket record, the fixed pricing
//! constants, and the receipt returned by a successful booking.

use marquee_shared::Money;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The portion of an attached payment the venue keeps in escrow per booking.
pub const TICKET_PRICE: Money = Money::new(dec!(90000000000000000));

/// The minimum payment that must be attached to a booking.
///
/// Anything above [`TICKET_PRICE`] is refunded within the booking call
/// itself, so a customer paying exactly the minimum gets the difference
/// straight back.
pub const MIN_DEPOSIT: Money = Money::new(dec!(100000000000000000));

/// The minimum customer age accepted at booking time.
pub const MIN_CUSTOMER_AGE: u8 = 18;

/// Per-customer ticket record.
///
/// One record exists per customer identity, overwritten on each successful
/// booking. The flags only ever move one way per lifecycle:
/// - booking sets `is_valid = true`, `has_checked_in = false`
/// - cancel clears `is_valid` (and it is never set back on this record)
/// - check-in sets `has_checked_in = true` and leaves `is_valid` set forever
///
/// `deposit_held` is positive exactly while the ticket is unresolved; the
/// deposit is returned on cancel and captured by the venue on check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Label of the booked showing.
    pub movie_name: String,
    /// Customer age at booking time.
    pub customer_age: u8,
    /// True from successful booking until cancellation.
    pub is_valid: bool,
    /// True once the customer has checked in. Never reverts.
    pub has_checked_in: bool,
    /// Amount currently held in escrow for this ticket.
    pub deposit_held: Money,
}

impl Ticket {
    /// Returns true while the ticket awaits check-in or cancellation.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        self.is_valid && !self.has_checked_in
    }
}

/// Outcome of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    /// Label of the booked showing.
    pub movie_name: String,
    /// The portion of the payment held in escrow.
    pub amount_kept: Money,
    /// The overpayment returned to the customer within the booking call.
    pub refunded: Money,
}
