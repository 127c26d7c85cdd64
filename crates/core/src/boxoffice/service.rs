//! Thread-safe front desk over the booking ledger.
//!
//! Hosts that take concurrent requests go through this wrapper: every
//! operation runs under one global lock, so state mutation and funds
//! movement inside an operation are indivisible and the one-ticket-per-
//! customer rule cannot be broken by interleaved calls.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use marquee_shared::{CustomerId, Money};

use crate::booking::{BookingError, BookingLedger, BookingReceipt, JournalEntry, Ticket};

/// Cloneable handle to a shared booking ledger.
///
/// Clones share the same underlying ledger. Suitable for handing one
/// handle to each worker thread of a hosting layer.
#[derive(Debug, Clone, Default)]
pub struct BoxOffice {
    ledger: Arc<Mutex<BookingLedger>>,
}

impl BoxOffice {
    /// Creates a box office over an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a box office over an existing ledger.
    #[must_use]
    pub fn with_ledger(ledger: BookingLedger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    fn ledger(&self) -> MutexGuard<'_, BookingLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds liquid funds to a customer's balance.
    pub fn credit(&self, customer: CustomerId, amount: Money) -> Result<Money, BookingError> {
        let result = self.ledger().credit(customer, amount);
        match &result {
            Ok(balance) => info!(
                customer = %customer,
                amount = %amount,
                balance = %balance,
                "Credited customer balance"
            ),
            Err(err) => warn!(
                customer = %customer,
                amount = %amount,
                error_code = err.error_code(),
                "Credit rejected"
            ),
        }
        result
    }

    /// Books a ticket for the caller. See [`BookingLedger::book_ticket`].
    pub fn book_ticket(
        &self,
        caller: CustomerId,
        movie_name: &str,
        customer_age: u8,
        amount_sent: Money,
    ) -> Result<BookingReceipt, BookingError> {
        let result = self
            .ledger()
            .book_ticket(caller, movie_name, customer_age, amount_sent);
        match &result {
            Ok(receipt) => info!(
                customer = %caller,
                movie = %receipt.movie_name,
                kept = %receipt.amount_kept,
                refunded = %receipt.refunded,
                "Ticket booked"
            ),
            Err(err) => warn!(
                customer = %caller,
                error_code = err.error_code(),
                "Booking rejected"
            ),
        }
        result
    }

    /// Checks the caller in. See [`BookingLedger::check_in`].
    pub fn check_in(&self, caller: CustomerId) -> Result<(), BookingError> {
        let result = self.ledger().check_in(caller);
        match &result {
            Ok(()) => info!(customer = %caller, "Customer checked in"),
            Err(err) => warn!(
                customer = %caller,
                error_code = err.error_code(),
                "Check-in rejected"
            ),
        }
        result
    }

    /// Cancels the caller's ticket. See [`BookingLedger::cancel_ticket`].
    pub fn cancel_ticket(&self, caller: CustomerId) -> Result<Money, BookingError> {
        let result = self.ledger().cancel_ticket(caller);
        match &result {
            Ok(refund) => info!(
                customer = %caller,
                refund = %refund,
                "Ticket cancelled"
            ),
            Err(err) => warn!(
                customer = %caller,
                error_code = err.error_code(),
                "Cancellation rejected"
            ),
        }
        result
    }

    /// The customer's current liquid balance.
    #[must_use]
    pub fn balance_of(&self, customer: CustomerId) -> Money {
        self.ledger().balance_of(customer)
    }

    /// Whether the customer has checked in on their current record.
    #[must_use]
    pub fn check_in_status(&self, customer: CustomerId) -> bool {
        self.ledger().check_in_status(customer)
    }

    /// A snapshot of the customer's ticket record, if any.
    #[must_use]
    pub fn ticket(&self, customer: CustomerId) -> Option<Ticket> {
        self.ledger().ticket(customer).cloned()
    }

    /// Total currently held in escrow.
    #[must_use]
    pub fn escrow_total(&self) -> Money {
        self.ledger().escrow_total()
    }

    /// Total captured by the venue from check-ins.
    #[must_use]
    pub fn revenue_total(&self) -> Money {
        self.ledger().revenue_total()
    }

    /// Everything under the venue's custody.
    #[must_use]
    pub fn custody_total(&self) -> Money {
        self.ledger().custody_total()
    }

    /// A snapshot of all journalled events, in recording order.
    #[must_use]
    pub fn events(&self) -> Vec<JournalEntry> {
        self.ledger().events().to_vec()
    }

    /// A snapshot of one customer's journalled events.
    #[must_use]
    pub fn events_for(&self, customer: CustomerId) -> Vec<JournalEntry> {
        self.ledger().events_for(customer).cloned().collect()
    }
}
