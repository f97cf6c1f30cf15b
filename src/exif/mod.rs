//! EXIF decoding and field extraction.
//!
//! The pipeline for one image is [`ImageReader`] (bytes or path to
//! [`RawExifTable`]) followed by [`extract`] (table to [`ExtractedRecord`]).
//! [`tags`] holds the fixed dictionary of the four reported fields.

mod extract;
mod reader;
mod table;
pub mod tags;
mod value;

pub use extract::{describe_bytes, extract, ExtractedRecord, ImageSummary};
pub use reader::{ExifReader, ImageReader};
pub use table::{Ifd, RawExifTable};
pub use tags::{FieldName, Locale};
pub use value::{ExifValue, NOT_FOUND};
