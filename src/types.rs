use std::borrow::Cow;
use std::fmt;
use std::io;
use std::result;

/// Reasons why dimensions could not be read from a payload.
///
/// These never leave the crate: `image_size` reports every one of them as `None`.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("invalid image format: {0}")]
    InvalidFormat(Cow<'static, str>),
    #[error("unexpected end of data{}", .0.as_ref().map(|s| format!(": {}", s)).unwrap_or_default())]
    UnexpectedEndOfFile(Option<Cow<'static, str>>),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

pub(crate) type Result<T> = result::Result<T, Error>;

/// Width and height of an image, in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl From<(u16, u16)> for Dimensions {
    #[inline]
    fn from((w, h): (u16, u16)) -> Dimensions {
        Dimensions { width: w.into(), height: h.into() }
    }
}

impl From<(u32, u32)> for Dimensions {
    #[inline]
    fn from((width, height): (u32, u32)) -> Dimensions {
        Dimensions { width, height }
    }
}

/// Image formats whose dimensions can be read from a data URI.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Format {
    Jpeg,
    Png,
    Gif,
}

impl Format {
    /// Maps a media type such as `image/png` to a supported format.
    pub fn from_mime_type(mime_type: &str) -> Option<Format> {
        match mime_type {
            "image/jpeg" => Some(Format::Jpeg),
            "image/png"  => Some(Format::Png),
            "image/gif"  => Some(Format::Gif),
            _            => None,
        }
    }

    #[inline]
    pub fn mime_type(self) -> &'static str {
        match self {
            Format::Jpeg => "image/jpeg",
            Format::Png  => "image/png",
            Format::Gif  => "image/gif",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Result of a successful dimensions lookup.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
    /// Format declared by the data URI header.
    pub format: Format,
}

impl ImageSize {
    #[inline]
    pub fn new(dimensions: Dimensions, format: Format) -> ImageSize {
        ImageSize {
            width: dimensions.width,
            height: dimensions.height,
            format,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions { width: self.width, height: self.height }
    }

    /// Media type string as declared in the data URI, e.g. `image/jpeg`.
    #[inline]
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}
