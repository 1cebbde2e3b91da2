use std::io::BufRead;

use crate::decode;
use crate::types::Result;

pub(crate) trait LoadableMetadata: Sized {
    /// Number of base64 characters to decode from the start of the payload.
    ///
    /// `None` means the whole payload is needed.
    const PAYLOAD_PREFIX: Option<usize>;

    /// Reads metadata from decoded image bytes.
    fn load<R: ?Sized + BufRead>(r: &mut R) -> Result<Self>;

    #[inline]
    fn load_from_buffer(mut buf: &[u8]) -> Result<Self> {
        Self::load(&mut buf)
    }

    /// Decodes as much of `payload` as this format needs and reads metadata from it.
    fn load_from_payload(payload: &str) -> Result<Self> {
        let bytes = decode::decode_prefix(payload, Self::PAYLOAD_PREFIX)?;
        Self::load_from_buffer(&bytes)
    }
}
