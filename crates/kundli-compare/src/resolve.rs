//! Planet-code resolution through the fixed planet table.

use kundli_core::planet::Planet;

use crate::error::CompareError;
use crate::extract::extract_codes;

/// Resolve a two-letter code. `text` is the house string it came from and
/// only feeds the error message.
///
/// # Errors
///
/// Returns [`CompareError::UnknownPlanet`] for a code outside the table.
pub fn resolve_code(code: &str, text: &str) -> Result<Planet, CompareError> {
    Planet::from_code(code).ok_or_else(|| CompareError::UnknownPlanet {
        code: code.to_string(),
        text: text.to_string(),
    })
}

/// Extract and resolve every planet in a house string, in token order.
///
/// # Errors
///
/// Returns [`CompareError::UnknownPlanet`] on the first unknown code.
pub fn resolve_house(text: &str) -> Result<Vec<Planet>, CompareError> {
    extract_codes(text)
        .into_iter()
        .map(|code| resolve_code(code, text))
        .collect()
}
