//! Per-format readers for the fields which hold image dimensions.

pub(crate) mod gif;
pub(crate) mod jpeg;
pub(crate) mod png;
