//! # kundli-core
//!
//! Core types shared across the Kundli chart-verification crates.
//!
//! This crate provides:
//! - The fixed planet-code and sign-name lookup tables
//! - Chart kinds and the per-kind comparison policy enums
//! - The birth record descriptor supplied by record sources
//! - Per-record verdicts and the batch tally
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod outcome;
pub mod planet;
pub mod policy;
pub mod record;
pub mod sign;

/// Number of houses in a chart. Houses are numbered `1..=HOUSE_COUNT`.
pub const HOUSE_COUNT: usize = 12;

/// Whether `house` is a valid 1-based house number.
#[must_use]
pub fn is_valid_house(house: u8) -> bool {
    (1..=HOUSE_COUNT).contains(&usize::from(house))
}
