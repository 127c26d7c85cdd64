//! Audit journal of booking lifecycle events.
//!
//! Every successful state-changing operation appends one entry here, so
//! the full history of a customer's bookings can be reconstructed after
//! the fact. Entries are append-only and sequence-numbered from 1.

use chrono::{DateTime, Utc};
use marquee_shared::{CustomerId, Money};
use serde::{Deserialize, Serialize};

/// A booking lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingEvent {
    /// A ticket was booked and its deposit moved into escrow.
    Booked {
        /// Label of the booked showing.
        movie_name: String,
        /// The portion of the payment held in escrow.
        amount_kept: Money,
        /// The overpayment returned within the booking call.
        refunded: Money,
    },
    /// The customer checked in and the deposit was captured as revenue.
    CheckedIn,
    /// The ticket was cancelled and the deposit refunded in full.
    Cancelled {
        /// The deposit returned to the customer.
        refunded: Money,
    },
}

impl BookingEvent {
    /// Returns the string representation of the event kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Booked { .. } => "booked",
            Self::CheckedIn => "checked_in",
            Self::Cancelled { .. } => "cancelled",
        }
    }
}

/// One recorded journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Sequence number, monotonically increasing from 1.
    pub seq: u64,
    /// The customer the event belongs to.
    pub customer: CustomerId,
    /// When the event was recorded.
    pub recorded_at: DateTime<Utc>,
    /// The event itself.
    pub event: BookingEvent,
}

/// Append-only journal of booking events.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    next_seq: u64,
}

impl Journal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event and returns its assigned sequence number.
    pub fn record(&mut self, customer: CustomerId, event: BookingEvent) -> u64 {
        self.next_seq += 1;
        self.entries.push(JournalEntry {
            seq: self.next_seq,
            customer,
            recorded_at: Utc::now(),
            event,
        });
        self.next_seq
    }

    /// All recorded entries, in recording order.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Entries recorded for one customer, in recording order.
    pub fn for_customer(&self, customer: CustomerId) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter().filter(move |e| e.customer == customer)
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
