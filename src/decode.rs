//! Bounded base64 decoding of data URI payloads.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::types::Result;

/// Standard alphabet, tolerant to missing padding and to a prefix cut mid-quantum.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Returns at most the first `max_chars` characters of `payload`.
fn char_prefix(payload: &str, max_chars: usize) -> &str {
    match payload.char_indices().nth(max_chars) {
        Some((i, _)) => &payload[..i],
        None => payload,
    }
}

/// Decodes the first `max_chars` characters of a base64 payload, or all of it for `None`.
///
/// ASCII whitespace is counted by the prefix but ignored when decoding, so line-wrapped
/// payloads are accepted. A prefix that ends in the middle of a 4-character group
/// decodes to the bytes its complete characters describe; a lone trailing character
/// carries no full byte and is dropped.
pub(crate) fn decode_prefix(payload: &str, max_chars: Option<usize>) -> Result<Vec<u8>> {
    let prefix = match max_chars {
        Some(n) => char_prefix(payload, n),
        None => payload,
    };
    let mut text: String = prefix.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let padding = text.len() - text.trim_end_matches('=').len();
    if padding > 2 {
        return Err(invalid_format!("{} padding characters at the end of base64 payload", padding));
    }
    text.truncate(text.len() - padding);

    if text.len() % 4 == 1 && text.is_char_boundary(text.len() - 1) {
        text.pop();
    }
    Ok(LENIENT.decode(&text)?)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::decode_prefix;

    #[rstest]
    #[case("QUJDREVG", None, b"ABCDEF".to_vec())]
    #[case("QUJDREVG", Some(4), b"ABC".to_vec())]
    #[case("QUJDREVG", Some(6), b"ABCD".to_vec())]
    #[case("QUJDREVG", Some(7), b"ABCDE".to_vec())]
    #[case("QUJDREVG", Some(5), b"ABC".to_vec())]
    #[case("QUJDREVG", Some(100), b"ABCDEF".to_vec())]
    #[case("QUJDRA==", None, b"ABCD".to_vec())]
    #[case("QUJDRA==", Some(7), b"ABCD".to_vec())]
    #[case("QUJDRA", None, b"ABCD".to_vec())]
    #[case("QUJDRA=", None, b"ABCD".to_vec())]
    #[case("QUJD\r\nREVG", None, b"ABCDEF".to_vec())]
    #[case(" QUJD REVG\n", None, b"ABCDEF".to_vec())]
    #[case("QU\tJD\nREVG", Some(6), b"ABC".to_vec())]
    #[case("", None, Vec::new())]
    #[case("Q", None, Vec::new())]
    fn test_decode_prefix(
        #[case] payload: &str,
        #[case] max_chars: Option<usize>,
        #[case] expected: Vec<u8>,
    ) {
        assert_eq!(decode_prefix(payload, max_chars).unwrap(), expected);
    }

    #[test]
    fn test_decode_prefix_counts_characters() {
        // the prefix stops before the multibyte character instead of splitting it
        assert!(decode_prefix("QUJD\u{e9}xxx", Some(4)).is_ok());
        assert!(decode_prefix("QUJD\u{e9}xxx", Some(5)).is_err());
    }

    #[test]
    fn test_decode_prefix_rejects_foreign_characters() {
        assert!(decode_prefix("QU*D", None).is_err());
        assert!(decode_prefix("QU=D", None).is_err());
    }

    #[rstest]
    #[case("QUJDRA===")]
    #[case("R0lGODlhAQABAAAAACw====")]
    #[case("QUJD====")]
    fn test_decode_prefix_rejects_excess_padding(#[case] payload: &str) {
        assert!(decode_prefix(payload, None).is_err());
    }
}
