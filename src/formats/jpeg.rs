//! Dimensions of baseline JPEG images.
//!
//! The frame header can be preceded by any number of variable-length segments
//! (APPn, DQT, DHT, comments), so the whole payload is decoded and scanned
//! segment by segment.

use std::io::BufRead;

use byteorder::{BigEndian, ReadBytesExt};

use crate::traits::LoadableMetadata;
use crate::types::{Dimensions, Result};
use crate::utils::BufReadExt;

const MARKER_PREFIX: u8 = 0xff;
/// Start of frame, baseline DCT. Other SOF variants are not recognized.
const SOF0: u8 = 0xc0;

#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Metadata {
    pub dimensions: Dimensions,
}

impl LoadableMetadata for Metadata {
    const PAYLOAD_PREFIX: Option<usize> = None;

    fn load<R: ?Sized + BufRead>(r: &mut R) -> Result<Metadata> {
        // start of image marker, never inspected
        if r.skip_exact(2)? != 2 {
            return Err(unexpected_eof!("when skipping start of image"));
        }

        let mut index = 0usize;
        loop {
            let prefix = r.read_u8().map_err(if_eof!("when searching for segment {}", index))?;
            if prefix != MARKER_PREFIX {
                return Err(invalid_format!("segment {} starts with {:#04x} instead of a marker", index, prefix));
            }

            let marker_type = r.read_u8().map_err(if_eof!("when reading marker type of segment {}", index))?;
            // includes the two length bytes
            let size = r.read_u16::<BigEndian>()
                .map_err(if_eof!("when reading length of segment {}", index))?;

            if marker_type == SOF0 {
                // sample precision, nearly always 8
                r.read_u8().map_err(if_eof!("when reading sample precision"))?;
                let h = r.read_u16::<BigEndian>().map_err(if_eof!("when reading height"))?;
                let w = r.read_u16::<BigEndian>().map_err(if_eof!("when reading width"))?;
                return Ok(Metadata {
                    dimensions: (w, h).into()
                });
            }

            let body = match size.checked_sub(2) {
                Some(n) => u64::from(n),
                None => return Err(invalid_format!("invalid length of segment {}: {}", index, size)),
            };
            if r.skip_exact(body)? != body {
                return Err(unexpected_eof!("when skipping segment {} ({:#04x})", index, marker_type));
            }
            index += 1;
        }
    }
}
