//! Per-record verdicts and the batch tally.
//!
//! Every failure mode (transport, status, decode, unknown planet, mismatch)
//! collapses to [`Verdict::Invalid`]; the detail only exists in log output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::BirthRecord;

/// Outcome of verifying one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    #[must_use]
    pub const fn from_match(matched: bool) -> Self {
        if matched { Self::Valid } else { Self::Invalid }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running pass/fail counts plus the records that failed, in arrival order.
///
/// Serializes as the batch summary; [`Tally::failed_records`] is the list a
/// driver writes to its output file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Tally {
    passed: u32,
    failed: u32,
    failed_records: Vec<BirthRecord>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one verified record, keeping it if it failed.
    pub fn record(&mut self, record: &BirthRecord, verdict: Verdict) {
        match verdict {
            Verdict::Valid => self.passed += 1,
            Verdict::Invalid => {
                self.failed += 1;
                self.failed_records.push(record.clone());
            }
        }
    }

    #[must_use]
    pub const fn passed(&self) -> u32 {
        self.passed
    }

    #[must_use]
    pub const fn failed(&self) -> u32 {
        self.failed
    }

    #[must_use]
    pub const fn tested(&self) -> u32 {
        self.passed + self.failed
    }

    #[must_use]
    pub fn failed_records(&self) -> &[BirthRecord] {
        &self.failed_records
    }

    /// Consume the tally, yielding the failing records.
    #[must_use]
    pub fn into_failed_records(self) -> Vec<BirthRecord> {
        self.failed_records
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tested {} entries - {} passed, {} failed",
            self.tested(),
            self.passed,
            self.failed
        )
    }
}
