//! Core booking and escrow logic for Marquee.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and funds movements live here.
//!
//! # Modules
//!
//! - `escrow` - Customer balances and the escrow/revenue funds ledger
//! - `booking` - Ticket lifecycle state machine and the audit journal
//! - `boxoffice` - Thread-safe front desk over the booking ledger

pub mod booking;
pub mod boxoffice;
pub mod escrow;
