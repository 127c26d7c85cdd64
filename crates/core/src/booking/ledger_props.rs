//! Property-based tests for the booking ledger.
//!
//! These tests drive the state machine with randomized inputs and whole
//! operation sequences, checking that the booking rules and the funds
//! conservation guarantees hold in every reachable state.

use proptest::prelude::*;
use rust_decimal::Decimal;

use marquee_shared::{CustomerId, Money};

use crate::booking::error::BookingError;
use crate::booking::ledger::BookingLedger;
use crate::booking::types::{MIN_DEPOSIT, TICKET_PRICE};

/// Strategy for movie names, blank ones included.
fn arb_movie_name() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{0,16}"
}

/// Strategy for blank movie names (empty or whitespace only).
fn arb_blank_name() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), " {1,8}"]
}

/// Strategy for any customer age.
fn arb_age() -> impl Strategy<Value = u8> {
    0u8..=90
}

/// Strategy for ages at or above the booking floor.
fn arb_adult_age() -> impl Strategy<Value = u8> {
    18u8..=90
}

/// Strategy for attached payments, from nothing up to twice the minimum.
fn arb_payment() -> impl Strategy<Value = Money> {
    (0u64..=200_000_000_000_000_000).prop_map(|n| Money::new(Decimal::from(n)))
}

/// Strategy for payments at or above the minimum deposit.
fn arb_covering_payment() -> impl Strategy<Value = Money> {
    (100_000_000_000_000_000u64..=200_000_000_000_000_000)
        .prop_map(|n| Money::new(Decimal::from(n)))
}

/// Strategy for credit amounts.
fn arb_credit_amount() -> impl Strategy<Value = Money> {
    (0u64..=300_000_000_000_000_000).prop_map(|n| Money::new(Decimal::from(n)))
}

/// One randomized operation against the ledger.
#[derive(Debug, Clone)]
enum LedgerOp {
    Credit(Money),
    Book {
        movie: String,
        age: u8,
        payment: Money,
    },
    CheckIn,
    Cancel,
}

fn arb_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        arb_credit_amount().prop_map(LedgerOp::Credit),
        (arb_movie_name(), arb_age(), arb_payment()).prop_map(|(movie, age, payment)| {
            LedgerOp::Book {
                movie,
                age,
                payment,
            }
        }),
        Just(LedgerOp::CheckIn),
        Just(LedgerOp::Cancel),
    ]
}

/// Strategy for a sequence of (customer index, operation) pairs.
fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<(usize, LedgerOp)>> {
    prop::collection::vec((0usize..3, arb_op()), 1..=max_len)
}

/// Checks every structural invariant the ledger promises.
fn check_invariants(
    ledger: &BookingLedger,
    customers: &[CustomerId],
    credited: Money,
    mutations: usize,
) {
    // Custody only grows through credits; book/check-in/cancel conserve it
    assert_eq!(
        ledger.custody_total(),
        credited,
        "custody total must equal everything credited"
    );

    // One journal entry per successful mutation, sequence-numbered from 1
    assert_eq!(
        ledger.events().len(),
        mutations,
        "journal length must equal the successful mutation count"
    );
    for (entry, expected_seq) in ledger.events().iter().zip(1u64..) {
        assert_eq!(entry.seq, expected_seq, "sequence numbers stay contiguous");
    }

    let mut held_sum = Money::zero();
    for &customer in customers {
        assert!(
            !ledger.balance_of(customer).is_negative(),
            "balances never go negative"
        );
        if let Some(ticket) = ledger.ticket(customer) {
            if ticket.has_checked_in {
                assert!(ticket.is_valid, "check-in only happens on a valid ticket");
            }
            assert_eq!(
                ticket.deposit_held.is_positive(),
                ticket.is_unresolved(),
                "deposit held exactly while the ticket is unresolved"
            );
            held_sum += ticket.deposit_held;
        }
    }
    assert_eq!(
        ledger.escrow_total(),
        held_sum,
        "escrow backs the held deposits exactly"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Booking validation properties
    // =========================================================================

    /// A blank movie name is rejected regardless of age or payment.
    #[test]
    fn prop_blank_movie_name_always_rejected(
        name in arb_blank_name(),
        age in arb_adult_age(),
        payment in arb_payment(),
    ) {
        let mut ledger = BookingLedger::new();
        let customer = CustomerId::new();

        let result = ledger.book_ticket(customer, &name, age, payment);
        prop_assert!(matches!(result, Err(BookingError::InvalidTicketInfo)));
        prop_assert!(ledger.ticket(customer).is_none());
    }

    /// An underage customer is rejected regardless of payment.
    #[test]
    fn prop_underage_always_rejected(
        name in arb_movie_name(),
        age in 0u8..18,
        payment in arb_payment(),
    ) {
        let mut ledger = BookingLedger::new();
        let customer = CustomerId::new();

        let result = ledger.book_ticket(customer, &name, age, payment);
        prop_assert!(matches!(result, Err(BookingError::InvalidTicketInfo)));
    }

    /// A payment below the minimum never creates a record, funded or not.
    #[test]
    fn prop_low_payment_never_creates_record(
        name in arb_movie_name(),
        age in arb_adult_age(),
        raw in 0u64..100_000_000_000_000_000,
    ) {
        prop_assume!(!name.trim().is_empty());

        let mut ledger = BookingLedger::new();
        let customer = CustomerId::new();

        let result = ledger.book_ticket(customer, &name, age, Money::new(Decimal::from(raw)));
        prop_assert!(
            matches!(result, Err(BookingError::InsufficientPayment { .. })),
            "expected InsufficientPayment, got {:?}",
            result
        );
        prop_assert!(ledger.ticket(customer).is_none());
        prop_assert!(ledger.events().is_empty());
    }

    // =========================================================================
    // Funds movement properties
    // =========================================================================

    /// Booking costs exactly the ticket price, whatever the payment.
    #[test]
    fn prop_booking_nets_exactly_ticket_price(
        name in arb_movie_name(),
        age in arb_adult_age(),
        payment in arb_covering_payment(),
    ) {
        prop_assume!(!name.trim().is_empty());

        let mut ledger = BookingLedger::new();
        let customer = CustomerId::new();
        ledger.credit(customer, payment).unwrap();

        let receipt = ledger.book_ticket(customer, &name, age, payment).unwrap();

        prop_assert_eq!(receipt.amount_kept, TICKET_PRICE);
        prop_assert_eq!(receipt.refunded, payment - TICKET_PRICE);
        prop_assert_eq!(ledger.balance_of(customer), payment - TICKET_PRICE);
        prop_assert_eq!(ledger.escrow_total(), TICKET_PRICE);
    }

    /// Cancelling restores the balance to its pre-booking value.
    #[test]
    fn prop_book_then_cancel_restores_balance(
        name in arb_movie_name(),
        age in arb_adult_age(),
        payment in arb_covering_payment(),
    ) {
        prop_assume!(!name.trim().is_empty());

        let mut ledger = BookingLedger::new();
        let customer = CustomerId::new();
        ledger.credit(customer, payment).unwrap();

        ledger.book_ticket(customer, &name, age, payment).unwrap();
        let refund = ledger.cancel_ticket(customer).unwrap();

        prop_assert_eq!(refund, TICKET_PRICE);
        prop_assert_eq!(ledger.balance_of(customer), payment);
        prop_assert!(ledger.escrow_total().is_zero());
    }

    // =========================================================================
    // Lifecycle properties
    // =========================================================================

    /// A successful booking blocks rebooking until cancellation.
    #[test]
    fn prop_rebooking_blocked_until_cancel(
        name in arb_movie_name(),
        age in arb_adult_age(),
        payment in arb_covering_payment(),
    ) {
        prop_assume!(!name.trim().is_empty());

        let mut ledger = BookingLedger::new();
        let customer = CustomerId::new();
        ledger.credit(customer, payment + payment).unwrap();

        ledger.book_ticket(customer, &name, age, payment).unwrap();
        let rebook = ledger.book_ticket(customer, &name, age, payment);
        prop_assert!(matches!(rebook, Err(BookingError::AlreadyHasUnresolvedTicket)));

        ledger.cancel_ticket(customer).unwrap();
        prop_assert!(ledger.book_ticket(customer, &name, age, payment).is_ok());
    }

    /// Check-in is permanent: no cancel, no repeat, no rebooking after it.
    #[test]
    fn prop_check_in_is_permanent(
        name in arb_movie_name(),
        age in arb_adult_age(),
        payment in arb_covering_payment(),
    ) {
        prop_assume!(!name.trim().is_empty());

        let mut ledger = BookingLedger::new();
        let customer = CustomerId::new();
        ledger.credit(customer, payment + payment).unwrap();

        ledger.book_ticket(customer, &name, age, payment).unwrap();
        ledger.check_in(customer).unwrap();

        prop_assert!(ledger.check_in_status(customer));
        prop_assert!(matches!(
            ledger.check_in(customer),
            Err(BookingError::AlreadyCheckedIn)
        ));
        prop_assert!(matches!(
            ledger.cancel_ticket(customer),
            Err(BookingError::AlreadyCheckedIn)
        ));
        prop_assert!(matches!(
            ledger.book_ticket(customer, &name, age, payment),
            Err(BookingError::AlreadyHasUnresolvedTicket)
        ));
        prop_assert_eq!(ledger.revenue_total(), TICKET_PRICE);
    }

    // =========================================================================
    // Whole-sequence invariants
    // =========================================================================

    /// Any operation sequence preserves the structural invariants.
    #[test]
    fn prop_random_walk_preserves_invariants(ops in arb_ops(40)) {
        let mut ledger = BookingLedger::new();
        let customers: Vec<CustomerId> = (0..3).map(|_| CustomerId::new()).collect();
        let mut credited = Money::zero();
        let mut mutations = 0usize;

        for (idx, op) in ops {
            let customer = customers[idx];
            match op {
                LedgerOp::Credit(amount) => {
                    if ledger.credit(customer, amount).is_ok() {
                        credited += amount;
                    }
                }
                LedgerOp::Book {
                    movie,
                    age,
                    payment,
                } => {
                    if ledger.book_ticket(customer, &movie, age, payment).is_ok() {
                        mutations += 1;
                    }
                }
                LedgerOp::CheckIn => {
                    if ledger.check_in(customer).is_ok() {
                        mutations += 1;
                    }
                }
                LedgerOp::Cancel => {
                    if ledger.cancel_ticket(customer).is_ok() {
                        mutations += 1;
                    }
                }
            }
            check_invariants(&ledger, &customers, credited, mutations);
        }
    }
}

// ============================================================================
// Deterministic edge cases
// ============================================================================

mod edge_case_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_two_customers_interleaved_stay_independent() {
        let mut ledger = BookingLedger::new();
        let alice = CustomerId::new();
        let bob = CustomerId::new();
        let payment = MIN_DEPOSIT;

        ledger.credit(alice, payment).unwrap();
        ledger.credit(bob, payment).unwrap();

        ledger.book_ticket(alice, "spiderman4", 19, payment).unwrap();
        ledger.book_ticket(bob, "spiderman5", 21, payment).unwrap();
        assert_eq!(ledger.escrow_total(), TICKET_PRICE + TICKET_PRICE);

        ledger.check_in(alice).unwrap();
        ledger.cancel_ticket(bob).unwrap();

        assert!(ledger.check_in_status(alice));
        assert!(!ledger.check_in_status(bob));
        assert_eq!(ledger.balance_of(bob), payment);
        assert_eq!(ledger.revenue_total(), TICKET_PRICE);
        assert!(ledger.escrow_total().is_zero());

        check_invariants(&ledger, &[alice, bob], payment + payment, 4);
    }

    #[test]
    fn test_repeated_book_cancel_rounds_leak_nothing() {
        let mut ledger = BookingLedger::new();
        let customer = CustomerId::new();
        ledger.credit(customer, MIN_DEPOSIT).unwrap();

        for _ in 0..50 {
            ledger
                .book_ticket(customer, "spiderman4", 19, MIN_DEPOSIT)
                .unwrap();
            ledger.cancel_ticket(customer).unwrap();
        }

        assert_eq!(ledger.balance_of(customer), MIN_DEPOSIT);
        assert!(ledger.escrow_total().is_zero());
        assert!(ledger.revenue_total().is_zero());
        assert_eq!(ledger.events().len(), 100);
    }

    #[test]
    fn test_overpayment_far_above_minimum_refunds_difference() {
        let mut ledger = BookingLedger::new();
        let customer = CustomerId::new();
        let payment = Money::new(dec!(1000000000000000000));
        ledger.credit(customer, payment).unwrap();

        let receipt = ledger
            .book_ticket(customer, "spiderman4", 19, payment)
            .unwrap();

        assert_eq!(receipt.refunded, Money::new(dec!(910000000000000000)));
        assert_eq!(ledger.balance_of(customer), Money::new(dec!(910000000000000000)));
        assert_eq!(ledger.escrow_total(), TICKET_PRICE);
    }
}
