//! Dimensions of GIF images.
//!
//! The logical screen width and height directly follow the `GIF87a`/`GIF89a`
//! signature and are stored little-endian.

use std::io::BufRead;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::traits::LoadableMetadata;
use crate::types::{Dimensions, Result};
use crate::utils::BufReadExt;

const SIGNATURE_LEN: u64 = 6;
/// Bytes which must be present for the descriptor to be considered readable.
const MIN_LEN: usize = 12;

#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Metadata {
    /// Logical screen dimensions of the image.
    pub dimensions: Dimensions,
}

impl LoadableMetadata for Metadata {
    // 16 characters decode to the first 12 bytes
    const PAYLOAD_PREFIX: Option<usize> = Some(16);

    fn load<R: ?Sized + BufRead>(r: &mut R) -> Result<Metadata> {
        let mut head = [0u8; MIN_LEN];
        r.read_exact(&mut head).map_err(if_eof!("when reading logical screen descriptor"))?;

        let mut descriptor = &head[..];
        descriptor.skip_exact(SIGNATURE_LEN)?;
        let width = descriptor.read_u16::<LittleEndian>().map_err(if_eof!("when reading logical width"))?;
        let height = descriptor.read_u16::<LittleEndian>().map_err(if_eof!("when reading logical height"))?;

        Ok(Metadata {
            dimensions: (width, height).into()
        })
    }
}
