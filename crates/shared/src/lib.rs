//! Shared types for Marquee.
//!
//! This crate provides common types used across all other crates:
//! - Money with decimal precision
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::{CustomerId, Money};
