use std::io::BufRead;

use byteorder::{BigEndian, ReadBytesExt};

use crate::traits::LoadableMetadata;
use crate::types::{Dimensions, Result};
use crate::utils::BufReadExt;

/// Signature (8 bytes) plus IHDR chunk length and type (8 bytes).
const IHDR_DATA_OFFSET: u64 = 16;

#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Metadata {
    pub dimensions: Dimensions,
}

impl LoadableMetadata for Metadata {
    // 32 characters decode to the 24 bytes ending with the IHDR height
    const PAYLOAD_PREFIX: Option<usize> = Some(32);

    fn load<R: ?Sized + BufRead>(r: &mut R) -> Result<Metadata> {
        // the signature and chunk type are not validated
        if r.skip_exact(IHDR_DATA_OFFSET)? != IHDR_DATA_OFFSET {
            return Err(unexpected_eof!("when skipping to IHDR data"));
        }

        let width = r.read_u32::<BigEndian>().map_err(if_eof!("when reading width"))?;
        let height = r.read_u32::<BigEndian>().map_err(if_eof!("when reading height"))?;

        Ok(Metadata {
            dimensions: (width, height).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use rstest::rstest;

    use super::Metadata;
    use crate::traits::LoadableMetadata;
    use crate::types::{Dimensions, Error};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut v = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR".to_vec();
        v.extend_from_slice(&width.to_be_bytes());
        v.extend_from_slice(&height.to_be_bytes());
        v.extend_from_slice(&[8, 6, 0, 0, 0, 0x1f, 0x15, 0xc4, 0x89]);
        v
    }

    #[test]
    fn test_ihdr_dimensions() {
        let md = Metadata::load_from_buffer(&png(1920, 1080)).unwrap();
        assert_eq!(md.dimensions, Dimensions { width: 1920, height: 1080 });
    }

    #[test]
    fn test_full_u32_range() {
        let md = Metadata::load_from_buffer(&png(u32::MAX, 0x01020304)).unwrap();
        assert_eq!(md.dimensions, Dimensions { width: u32::MAX, height: 0x01020304 });
    }

    #[test]
    fn test_payload_prefix_only_is_decoded() {
        let mut payload = STANDARD.encode(png(300, 200));
        // anything after the prefix is never looked at
        payload.push_str("!!! not base64 !!!");
        let md = Metadata::load_from_payload(&payload).unwrap();
        assert_eq!(md.dimensions, Dimensions { width: 300, height: 200 });
    }

    #[rstest]
    #[case(0)]
    #[case(16)]
    #[case(20)]
    #[case(23)]
    fn test_truncated(#[case] len: usize) {
        let data = png(5, 7);
        assert!(matches!(
            Metadata::load_from_buffer(&data[..len]),
            Err(Error::UnexpectedEndOfFile(_))
        ));
    }

    #[test]
    fn test_exactly_24_bytes() {
        let data = png(5, 7);
        let md = Metadata::load_from_payload(&STANDARD.encode(&data[..24])).unwrap();
        assert_eq!(md.dimensions, Dimensions { width: 5, height: 7 });
    }
}
