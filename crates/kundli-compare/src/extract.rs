//! Planet-token extraction from generated house text.
//!
//! A house string holds zero or more whitespace-separated tokens such as
//! `Su₁₂`, `Ma(R)` or `As`. Each token starts with a two-letter planet code
//! followed by optional non-letter decoration.
//!
//! A code is the run of Unicode letters (general category `L`) at the start
//! of a token. Letter-like symbols such as `Ⓡ` or `Ⅱ` are decoration.
//! Decoration that itself starts with a letter is not split off: `MaR`
//! yields the code `MaR`, which the resolver then rejects.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+").expect("literal pattern compiles"));

/// Extract the planet codes from a house string, in token order.
///
/// Duplicates are preserved. Tokens with no leading letters (bare
/// subscripts, arrows) are dropped. Empty input yields an empty list.
#[must_use]
pub fn extract_codes(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(leading_letters)
        .filter(|code| !code.is_empty())
        .collect()
}

/// The run of letters at the start of `token`.
fn leading_letters(token: &str) -> &str {
    LEADING_LETTERS.find(token).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("   ", &[])]
    #[case("Su", &["Su"])]
    #[case("As ₀₅ Ma ₀₁", &["As", "Ma"])]
    #[case("Su₁₂ Me₀₄", &["Su", "Me"])]
    #[case("Ma(R) Sa(C)", &["Ma", "Sa"])]
    #[case("Ra↑ Ke↓", &["Ra", "Ke"])]
    #[case("Ju  Ju", &["Ju", "Ju"])]
    #[case("Ve\tMo\nSu", &["Ve", "Mo", "Su"])]
    #[case("₀₅ → *", &[])]
    #[case("Ma\u{24C7}", &["Ma"])]
    #[case("Su\u{2161} Mo\u{2167}", &["Su", "Mo"])]
    #[case("Ⓡ Ke", &["Ke"])]
    fn extracts_codes(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(extract_codes(text), expected);
    }

    #[test]
    fn alphabetic_decoration_stays_attached() {
        assert_eq!(extract_codes("MaR Su"), vec!["MaR", "Su"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Mo₀₃ Ju(R) As";
        assert_eq!(extract_codes(text), extract_codes(text));
        let joined = extract_codes(text).join(" ");
        assert_eq!(extract_codes(&joined), extract_codes(text));
    }
}
