//! Media type detection from the textual header of a data URI.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const SCHEME: &str = "data:";
pub(crate) const PAYLOAD_SEPARATOR: char = ',';

static MEDIA_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:(image/[a-z-]+)").expect("media type pattern is valid")
});

/// Returns the `image/<subtype>` declared before the payload separator, if any.
///
/// Parameters such as `;base64` or `;charset=...` are not inspected.
pub(crate) fn media_type(input: &str) -> Option<&str> {
    let header = match input.find(PAYLOAD_SEPARATOR) {
        Some(i) => &input[..i],
        None => input,
    };
    MEDIA_TYPE
        .captures(header)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
