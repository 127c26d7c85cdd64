//! The booking ledger state machine.
//!
//! This module owns the per-customer ticket records, the funds ledger,
//! and the audit journal, and enforces the booking protocol:
//!
//! 1. `book_ticket` - validates the ticket info, the one-ticket rule and
//!    the payment, then holds the ticket price in escrow
//! 2. `check_in` - resolves the ticket in the venue's favor, capturing
//!    the deposit as revenue
//! 3. `cancel_ticket` - resolves the ticket in the customer's favor,
//!    refunding the deposit in full
//!
//! Every precondition is checked before any effect, so a rejected
//! operation leaves tickets, balances, and the journal untouched.

use std::collections::HashMap;

use marquee_shared::{CustomerId, Money};

use super::error::BookingError;
use super::journal::{BookingEvent, Journal, JournalEntry};
use super::types::{BookingReceipt, MIN_CUSTOMER_AGE, MIN_DEPOSIT, TICKET_PRICE, Ticket};
use crate::escrow::FundsLedger;

/// Owned store of ticket records plus the funds that back them.
///
/// The ledger is single-threaded by design; hosts that take concurrent
/// calls wrap it in [`crate::boxoffice::BoxOffice`] so each operation
/// runs to completion without interleaving.
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    tickets: HashMap<CustomerId, Ticket>,
    funds: FundsLedger,
    journal: Journal,
}

impl BookingLedger {
    /// Creates an empty booking ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds liquid funds to a customer's balance.
    ///
    /// Stands in for the external deposit a hosting layer would perform.
    /// Returns the customer's updated balance.
    pub fn credit(&mut self, customer: CustomerId, amount: Money) -> Result<Money, BookingError> {
        Ok(self.funds.credit(customer, amount)?)
    }

    /// Books a ticket for the caller.
    ///
    /// Holds [`TICKET_PRICE`] of the attached payment in escrow and
    /// refunds the rest within the same call. The caller's balance must
    /// cover the full attached payment.
    pub fn book_ticket(
        &mut self,
        caller: CustomerId,
        movie_name: &str,
        customer_age: u8,
        amount_sent: Money,
    ) -> Result<BookingReceipt, BookingError> {
        // 1. Validate ticket info
        if movie_name.trim().is_empty() || customer_age < MIN_CUSTOMER_AGE {
            return Err(BookingError::InvalidTicketInfo);
        }

        // 2. One valid ticket per customer, resolved or not
        if self.tickets.get(&caller).is_some_and(|t| t.is_valid) {
            return Err(BookingError::AlreadyHasUnresolvedTicket);
        }

        // 3. Enforce the payment floor
        if amount_sent < MIN_DEPOSIT {
            return Err(BookingError::InsufficientPayment {
                sent: amount_sent,
                minimum: MIN_DEPOSIT,
            });
        }

        // 4. Hold the ticket price, refunding the overpayment
        let refunded = self.funds.hold(caller, amount_sent, TICKET_PRICE)?;

        // 5. Create the record and journal the booking
        self.tickets.insert(
            caller,
            Ticket {
                movie_name: movie_name.to_string(),
                customer_age,
                is_valid: true,
                has_checked_in: false,
                deposit_held: TICKET_PRICE,
            },
        );
        self.journal.record(
            caller,
            BookingEvent::Booked {
                movie_name: movie_name.to_string(),
                amount_kept: TICKET_PRICE,
                refunded,
            },
        );

        Ok(BookingReceipt {
            movie_name: movie_name.to_string(),
            amount_kept: TICKET_PRICE,
            refunded,
        })
    }

    /// Checks the caller in, capturing the held deposit as venue revenue.
    ///
    /// The ticket stays valid forever afterwards; the customer can never
    /// book again on this identity.
    pub fn check_in(&mut self, caller: CustomerId) -> Result<(), BookingError> {
        let Some(ticket) = self.tickets.get_mut(&caller) else {
            return Err(BookingError::NoValidTicket);
        };
        if !ticket.is_valid {
            return Err(BookingError::NoValidTicket);
        }
        if ticket.has_checked_in {
            return Err(BookingError::AlreadyCheckedIn);
        }

        // Capture first so a refused movement leaves the ticket untouched
        self.funds.capture(ticket.deposit_held)?;
        ticket.has_checked_in = true;
        ticket.deposit_held = Money::zero();
        self.journal.record(caller, BookingEvent::CheckedIn);
        Ok(())
    }

    /// Cancels the caller's ticket, refunding the held deposit in full.
    ///
    /// Returns the refunded amount. The record stays behind with
    /// `is_valid` cleared, so the caller is free to book again.
    pub fn cancel_ticket(&mut self, caller: CustomerId) -> Result<Money, BookingError> {
        let Some(ticket) = self.tickets.get_mut(&caller) else {
            return Err(BookingError::NoValidTicket);
        };
        if !ticket.is_valid {
            return Err(BookingError::NoValidTicket);
        }
        if ticket.has_checked_in {
            return Err(BookingError::AlreadyCheckedIn);
        }

        let refund = ticket.deposit_held;
        self.funds.release(caller, refund)?;
        ticket.is_valid = false;
        ticket.deposit_held = Money::zero();
        self.journal
            .record(caller, BookingEvent::Cancelled { refunded: refund });
        Ok(refund)
    }

    /// The customer's current liquid balance. Unknown customers hold zero.
    #[must_use]
    pub fn balance_of(&self, customer: CustomerId) -> Money {
        self.funds.balance_of(customer)
    }

    /// Whether the customer has checked in on their current record.
    #[must_use]
    pub fn check_in_status(&self, customer: CustomerId) -> bool {
        self.tickets
            .get(&customer)
            .is_some_and(|t| t.has_checked_in)
    }

    /// The customer's ticket record, if one was ever created.
    #[must_use]
    pub fn ticket(&self, customer: CustomerId) -> Option<&Ticket> {
        self.tickets.get(&customer)
    }

    /// Total currently held in escrow across all unresolved tickets.
    #[must_use]
    pub fn escrow_total(&self) -> Money {
        self.funds.escrow_total()
    }

    /// Total captured by the venue from check-ins.
    #[must_use]
    pub fn revenue_total(&self) -> Money {
        self.funds.revenue_total()
    }

    /// Everything under the venue's custody: liquid + escrow + revenue.
    #[must_use]
    pub fn custody_total(&self) -> Money {
        self.funds.custody_total()
    }

    /// All journalled events, in recording order.
    #[must_use]
    pub fn events(&self) -> &[JournalEntry] {
        self.journal.entries()
    }

    /// Journalled events for one customer, in recording order.
    pub fn events_for(&self, customer: CustomerId) -> impl Iterator<Item = &JournalEntry> {
        self.journal.for_customer(customer)
    }
}
