//! # kundli-compare
//!
//! Decides whether a generated chart and an independent reference chart
//! describe the same placements.
//!
//! The pipeline for one record:
//! - [`GeneratedChart::decode`] reads a generator response (status envelope
//!   plus one of four per-kind shapes) into 12 houses of sign + planet text
//! - [`ReferenceChart::decode`] reads a verifier response into the matching
//!   [`ReferenceChart`] variant
//! - [`Comparator`] builds a house index from the reference, extracts and
//!   resolves the generated planet codes, and matches house by house under
//!   the chart kind's [`ComparePolicy`](kundli_core::policy::ComparePolicy)
//!
//! Fetching the bodies, sourcing records and persisting failures belong to
//! the caller.

pub mod comparator;
pub mod extract;
pub mod generated;
pub mod reference;
pub mod resolve;

mod envelope;
mod error;
mod verify;

pub use comparator::{Comparator, compare};
pub use error::{CompareError, Endpoint, VerifyError};
pub use generated::{GeneratedChart, GeneratedHouse};
pub use reference::{HouseIndex, LabelKind, ReferenceChart, ReferenceHouse};
