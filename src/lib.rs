//! Reads pixel dimensions of JPEG, PNG and GIF images embedded in `data:` URIs.
//!
//! Only the part of the base64 payload which contains the dimensions is decoded:
//! a fixed prefix for PNG and GIF. JPEG frame headers can sit anywhere in the
//! segment stream, so JPEG payloads are decoded whole and scanned.
//!
//! ```
//! let size = data_image_size::image_size("data:image/gif;base64,R0lGODlhAQABAAAAACw=").unwrap();
//! assert_eq!((size.width, size.height), (1, 1));
//! assert_eq!(size.mime_type(), "image/gif");
//! ```

pub use types::{Dimensions, Format, ImageSize};
pub use generic::image_size;

#[macro_use] mod macros;
mod traits;
mod types;
mod utils;
mod sniff;
mod decode;
mod generic;
mod formats;
