//! Body-level verification of one record.

use kundli_core::enums::ChartKind;
use kundli_core::outcome::Verdict;
use kundli_core::record::BirthRecord;

use crate::comparator::Comparator;
use crate::error::VerifyError;
use crate::generated::GeneratedChart;
use crate::reference::ReferenceChart;

impl Comparator {
    /// Verify one record from its generator and verifier response bodies.
    ///
    /// Non-success statuses, undecodable bodies, malformed charts, unknown
    /// planet codes and mismatches all yield [`Verdict::Invalid`]; the cause
    /// is logged at `warn` with the record id. A caller whose fetch failed
    /// records [`Verdict::Invalid`] without calling this.
    pub fn verify(
        &self,
        record: &BirthRecord,
        kind: ChartKind,
        generated_body: &str,
        reference_body: &str,
    ) -> Verdict {
        match self.try_verify(kind, generated_body, reference_body) {
            Ok(()) => {
                tracing::debug!(id = record.id, %kind, "entry valid");
                Verdict::Valid
            }
            Err(error) => {
                tracing::warn!(id = record.id, %kind, %error, "entry invalid");
                Verdict::Invalid
            }
        }
    }

    fn try_verify(
        &self,
        kind: ChartKind,
        generated_body: &str,
        reference_body: &str,
    ) -> Result<(), VerifyError> {
        let generated = GeneratedChart::decode(kind, generated_body)?;
        let reference = ReferenceChart::decode(kind, reference_body)?;
        self.check(&generated, &reference)?;
        Ok(())
    }
}
