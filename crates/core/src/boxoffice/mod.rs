//! Concurrent host support for Marquee.
//!
//! The booking ledger itself is single-threaded; this module provides the
//! mutual-exclusion wrapper a concurrent host uses so operations stay
//! atomic and totally ordered.

pub mod service;

pub use service::BoxOffice;
