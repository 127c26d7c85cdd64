//! Customer balances and the escrow/revenue funds store.
//!
//! All money the venue holds lives here: per-customer liquid balances,
//! the escrow bucket for deposits on unresolved tickets, and the revenue
//! bucket for deposits forfeited at check-in. Every movement is validated
//! before anything is touched, so a failed transfer leaves no trace.

use std::collections::HashMap;

use marquee_shared::{CustomerId, Money};

use super::error::EscrowError;

/// Owned store of every amount the venue is responsible for.
///
/// Movements between the three pools are atomic: validation happens
/// up front and the commit cannot fail. The sum of all pools only
/// changes through [`FundsLedger::credit`].
#[derive(Debug, Clone, Default)]
pub struct FundsLedger {
    /// Liquid, withdrawable balance per customer.
    balances: HashMap<CustomerId, Money>,
    /// Deposits held against unresolved tickets.
    escrow: Money,
    /// Deposits forfeited to the venue at check-in.
    revenue: Money,
}

impl FundsLedger {
    /// Creates an empty funds ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds liquid funds to a customer's balance.
    ///
    /// This is the only operation that grows the total under custody.
    /// Returns the customer's updated balance.
    pub fn credit(&mut self, customer: CustomerId, amount: Money) -> Result<Money, EscrowError> {
        Self::validate_amount(amount)?;

        let balance = self.balances.entry(customer).or_default();
        *balance += amount;
        Ok(*balance)
    }

    /// Moves the kept portion of an attached payment into escrow.
    ///
    /// The customer's balance must cover the full `payment` even though
    /// only `kept` leaves it; the overpayment refund is netted inside the
    /// same movement. Returns the refunded portion (`payment - kept`).
    pub fn hold(
        &mut self,
        customer: CustomerId,
        payment: Money,
        kept: Money,
    ) -> Result<Money, EscrowError> {
        // 1. Validate amounts
        Self::validate_amount(payment)?;
        Self::validate_amount(kept)?;
        if kept > payment {
            return Err(EscrowError::HoldExceedsPayment { payment, kept });
        }

        // 2. Validate coverage
        let available = self.balance_of(customer);
        if available < payment {
            return Err(EscrowError::InsufficientFunds {
                available,
                required: payment,
            });
        }

        // 3. Commit
        let balance = self.balances.entry(customer).or_default();
        *balance -= kept;
        self.escrow += kept;
        Ok(payment - kept)
    }

    /// Returns escrowed funds to a customer's liquid balance.
    ///
    /// Returns the customer's updated balance.
    pub fn release(&mut self, customer: CustomerId, amount: Money) -> Result<Money, EscrowError> {
        Self::validate_amount(amount)?;
        if self.escrow < amount {
            return Err(EscrowError::InsufficientEscrow {
                held: self.escrow,
                required: amount,
            });
        }

        self.escrow -= amount;
        let balance = self.balances.entry(customer).or_default();
        *balance += amount;
        Ok(*balance)
    }

    /// Moves escrowed funds into venue revenue.
    ///
    /// Captured funds never return to a customer balance.
    pub fn capture(&mut self, amount: Money) -> Result<(), EscrowError> {
        Self::validate_amount(amount)?;
        if self.escrow < amount {
            return Err(EscrowError::InsufficientEscrow {
                held: self.escrow,
                required: amount,
            });
        }

        self.escrow -= amount;
        self.revenue += amount;
        Ok(())
    }

    /// The liquid balance of a customer. Unknown customers hold zero.
    #[must_use]
    pub fn balance_of(&self, customer: CustomerId) -> Money {
        self.balances.get(&customer).copied().unwrap_or_default()
    }

    /// Sum of all liquid customer balances.
    #[must_use]
    pub fn liquid_total(&self) -> Money {
        self.balances.values().copied().sum()
    }

    /// Total currently held in escrow.
    #[must_use]
    pub fn escrow_total(&self) -> Money {
        self.escrow
    }

    /// Total forfeited to the venue.
    #[must_use]
    pub fn revenue_total(&self) -> Money {
        self.revenue
    }

    /// Everything under the venue's custody: liquid + escrow + revenue.
    ///
    /// Constant under [`FundsLedger::hold`], [`FundsLedger::release`],
    /// and [`FundsLedger::capture`].
    #[must_use]
    pub fn custody_total(&self) -> Money {
        self.liquid_total() + self.escrow + self.revenue
    }

    fn validate_amount(amount: Money) -> Result<(), EscrowError> {
        if amount.is_zero() {
            return Err(EscrowError::ZeroAmount);
        }
        if amount.is_negative() {
            return Err(EscrowError::NegativeAmount);
        }
        Ok(())
    }
}
