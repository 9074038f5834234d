//! Comparison and verification error types.

use kundli_core::sign::Sign;
use std::fmt;
use thiserror::Error;

/// Why a generated chart does not match its reference.
///
/// Every variant makes the comparison fail; none is skipped or retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// A generated planet token carries a code outside the planet table.
    #[error("unknown planet code '{code}' in '{text}'")]
    UnknownPlanet { code: String, text: String },

    /// A reference planet label is not in the planet table.
    #[error("house {house}: unknown reference planet '{label}'")]
    UnknownLabel { house: u8, label: String },

    /// A house key or number outside `1..=12`.
    #[error("invalid house '{house}'")]
    InvalidHouse { house: String },

    /// The same house appears twice in a per-house listing.
    #[error("house {house} listed more than once")]
    DuplicateHouse { house: u8 },

    /// A positional listing has more entries than a chart has houses.
    #[error("{count} house entries, at most 12 allowed")]
    TooManyHouses { count: usize },

    #[error("house {house}: unknown sign name '{name}'")]
    UnknownSign { house: u8, name: String },

    #[error("house {house}: sign index {index} outside 1..=12")]
    InvalidSign { house: u8, index: u8 },

    /// Two reference entries put the same house in different signs.
    #[error("house {house}: reference lists both {first} and {second}")]
    ConflictingSign { house: u8, first: Sign, second: Sign },

    /// `actual` is the generated sign index, `None` when the generator gave none.
    #[error("house {house}: expected sign {expected}, got index {actual:?}")]
    SignMismatch {
        house: u8,
        expected: Sign,
        actual: Option<u8>,
    },

    #[error("house {house}: planet mismatch, expected {expected:?}, got {actual:?}")]
    PlanetMismatch {
        house: u8,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("house {house}: expected {expected} planets, got {actual}")]
    CountMismatch {
        house: u8,
        expected: usize,
        actual: usize,
    },

    /// A generated code is absent from the reference's short codes.
    #[error("house {house}: '{code}' not in reference")]
    MissingPlanet { house: u8, code: String },

    #[error("house {house} missing in generated data but has planets in reference data")]
    MissingInGenerated { house: u8 },

    #[error("house {house} has generated planets but is missing in reference data")]
    MissingInReference { house: u8 },
}

/// Which side of the comparison a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Generator,
    Verifier,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generator => "generator",
            Self::Verifier => "verifier",
        })
    }
}

/// Errors from verifying one record's response bodies.
///
/// All of them make the record invalid; see
/// [`Comparator::verify`](crate::Comparator::verify).
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The response envelope reported a non-success status.
    #[error("{endpoint} returned status {status}: {message}")]
    Status {
        endpoint: Endpoint,
        status: u16,
        message: String,
    },

    /// The body is not valid JSON or does not match the chart kind's shape.
    #[error("{endpoint} response decode error: {error}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        error: serde_json::Error,
    },

    /// The decoded charts are malformed or do not match.
    #[error(transparent)]
    Chart(#[from] CompareError),
}
