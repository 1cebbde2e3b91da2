use log::{debug, trace};

use crate::formats::{gif, jpeg, png};
use crate::sniff::{self, PAYLOAD_SEPARATOR, SCHEME};
use crate::traits::LoadableMetadata;
use crate::types::{Dimensions, Error, Format, ImageSize, Result};

/// Text after the first separator and, if present, before the next one.
fn segment_after_separator(input: &str) -> Option<&str> {
    input.split(PAYLOAD_SEPARATOR).nth(1)
}

/// Text after the first separator.
fn rest_after_separator(input: &str) -> Option<&str> {
    input.split_once(PAYLOAD_SEPARATOR).map(|(_, rest)| rest)
}

fn missing_payload() -> Error {
    invalid_format!("no payload separator")
}

/// Reads dimensions for the declared `format` from the payload of `input`.
pub(crate) fn load(input: &str, format: Format) -> Result<Dimensions> {
    Ok(match format {
        Format::Jpeg => {
            let payload = segment_after_separator(input).ok_or_else(missing_payload)?;
            jpeg::Metadata::load_from_payload(payload)?.dimensions
        }
        Format::Png => {
            let payload = rest_after_separator(input).ok_or_else(missing_payload)?;
            png::Metadata::load_from_payload(payload)?.dimensions
        }
        Format::Gif => {
            let payload = rest_after_separator(input).ok_or_else(missing_payload)?;
            gif::Metadata::load_from_payload(payload)?.dimensions
        }
    })
}

/// Returns width, height and format of a JPEG, PNG or GIF image embedded in a
/// `data:<media type>[;<params>],<base64 payload>` URI.
///
/// The payload is always treated as base64. Anything which is not such a URI,
/// declares another media type, or whose payload does not reveal the dimensions
/// gives `None`; the reason is only reported through `log` at debug level.
///
/// JPEG dimensions are read from the first baseline (SOF0) frame header only;
/// progressive and other JPEG variants give `None`.
pub fn image_size(input: &str) -> Option<ImageSize> {
    if !input.starts_with(SCHEME) {
        debug!("input does not start with {:?}", SCHEME);
        return None;
    }

    let mime_type = match sniff::media_type(input) {
        Some(mime_type) => mime_type,
        None => {
            debug!("no image media type declared");
            return None;
        }
    };
    let format = match Format::from_mime_type(mime_type) {
        Some(format) => format,
        None => {
            debug!("unsupported media type {}", mime_type);
            return None;
        }
    };

    match load(input, format) {
        Ok(dimensions) => {
            trace!("{}: {}x{}", format, dimensions.width, dimensions.height);
            Some(ImageSize::new(dimensions, format))
        }
        Err(e) => {
            debug!("cannot read {} dimensions: {}", format, e);
            None
        }
    }
}
