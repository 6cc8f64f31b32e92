//! Mutual-connection count extraction from card insight text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::InsightParseError;

static DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit-run pattern is valid"));

/// Extracts the mutual-connection count from a card's insight text.
///
/// The text must contain exactly one maximal digit run. Insight strings mix
/// in other numbers ("10 mutual connections · 500 followers"), and which
/// number is the mutual count cannot be told apart reliably, so anything but
/// exactly one run is rejected rather than guessed at.
///
/// # Errors
///
/// Returns [`InsightParseError::AmbiguousNumbers`] when zero or more than
/// one digit run is present, and [`InsightParseError::OutOfRange`] when the
/// single run does not fit the count type.
pub fn parse_mutual_count(text: &str) -> Result<u64, InsightParseError> {
    let runs: Vec<&str> = DIGIT_RUNS.find_iter(text).map(|m| m.as_str()).collect();
    match runs.as_slice() {
        [only] => only.parse().map_err(|_| InsightParseError::OutOfRange {
            text: text.to_owned(),
        }),
        _ => Err(InsightParseError::AmbiguousNumbers {
            found: runs.len(),
            text: text.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_count_parses() {
        assert_eq!(parse_mutual_count("10 mutual connections"), Ok(10));
    }

    #[test]
    fn count_embedded_in_names_parses() {
        assert_eq!(
            parse_mutual_count("Jane Doe, John Smith, and 12 other mutual connections"),
            Ok(12)
        );
    }

    #[test]
    fn two_numbers_are_ambiguous() {
        assert_eq!(
            parse_mutual_count("10 mutual connections · 500 followers"),
            Err(InsightParseError::AmbiguousNumbers {
                found: 2,
                text: "10 mutual connections · 500 followers".to_owned(),
            })
        );
    }

    #[test]
    fn empty_text_has_no_number() {
        assert_eq!(
            parse_mutual_count(""),
            Err(InsightParseError::AmbiguousNumbers {
                found: 0,
                text: String::new(),
            })
        );
    }

    #[test]
    fn text_without_digits_has_no_number() {
        assert!(matches!(
            parse_mutual_count("mutual connections"),
            Err(InsightParseError::AmbiguousNumbers { found: 0, .. })
        ));
    }

    #[test]
    fn follower_shorthand_parses_as_its_digit_run() {
        // "3k followers" carries a single digit run; the threshold check
        // downstream is what rejects such cards, not the parser.
        assert_eq!(parse_mutual_count("3k followers"), Ok(3));
    }

    #[test]
    fn three_numbers_report_the_full_count() {
        assert!(matches!(
            parse_mutual_count("1 of 2 in 3"),
            Err(InsightParseError::AmbiguousNumbers { found: 3, .. })
        ));
    }

    #[test]
    fn leading_zeros_parse() {
        assert_eq!(parse_mutual_count("007 mutual connections"), Ok(7));
    }

    #[test]
    fn adjacent_digits_are_one_run() {
        assert_eq!(parse_mutual_count("1234 mutual connections"), Ok(1234));
    }

    #[test]
    fn oversized_run_is_out_of_range() {
        assert!(matches!(
            parse_mutual_count("99999999999999999999999 mutual connections"),
            Err(InsightParseError::OutOfRange { .. })
        ));
    }
}
