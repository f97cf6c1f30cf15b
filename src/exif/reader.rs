//! Image reading: the only place that talks to the EXIF decoder.
//!
//! [`ImageReader`] is the seam the rest of the crate depends on. The
//! production implementation, [`ExifReader`], is backed by `kamadak-exif`
//! and accepts anything that crate recognizes as a container (JPEG first
//! and foremost). Tests substitute their own readers.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use exif::{Context, Field, In, Value};
use tracing::trace;

use super::table::RawExifTable;
use super::tags::{EXIF_IFD, GPS_IFD, INTEROP_IFD, PRIMARY_IFD};
use super::value::ExifValue;
use crate::error::PhotoInfoError;

/// Produces the raw EXIF table of an image.
pub trait ImageReader {
    /// Reads the image at `path`.
    fn read_path(&self, path: &Path) -> Result<RawExifTable, PhotoInfoError>;

    /// Reads an image held in memory, such as an uploaded file.
    fn read_bytes(&self, bytes: &[u8]) -> Result<RawExifTable, PhotoInfoError>;
}

/// [`ImageReader`] backed by the `kamadak-exif` decoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExifReader;

impl ExifReader {
    pub fn new() -> Self {
        Self
    }
}

impl ImageReader for ExifReader {
    fn read_path(&self, path: &Path) -> Result<RawExifTable, PhotoInfoError> {
        let file = File::open(path).map_err(|source| PhotoInfoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        read_container(&mut reader, path)
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<RawExifTable, PhotoInfoError> {
        read_container(&mut Cursor::new(bytes), Path::new("<bytes>"))
    }
}

fn read_container<R: BufRead + Seek>(
    reader: &mut R,
    path: &Path,
) -> Result<RawExifTable, PhotoInfoError> {
    let exif = exif::Reader::new()
        .read_from_container(reader)
        .map_err(|source| PhotoInfoError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let mut table = RawExifTable::new();
    for field in exif.fields().filter(|f| f.ifd_num == In::PRIMARY) {
        table.insert(group_of(field.tag.0), field.tag.1, convert_value(field));
    }
    trace!(path = %path.display(), tags = table.len(), "decoded EXIF");

    Ok(table)
}

/// Maps a decoder tag context to the IFD group id it lives under.
fn group_of(context: Context) -> u16 {
    match context {
        Context::Tiff => PRIMARY_IFD,
        Context::Exif => EXIF_IFD,
        Context::Gps => GPS_IFD,
        Context::Interop => INTEROP_IFD,
    }
}

/// Converts a decoded field into an [`ExifValue`].
///
/// Multi-valued numeric fields keep their first component. Anything the
/// report cannot use numerically is kept as its decoder display text.
fn convert_value(field: &Field) -> ExifValue {
    let numeric = match &field.value {
        Value::Byte(v) => v.first().map(|&x| ExifValue::Number(f64::from(x))),
        Value::Short(v) => v.first().map(|&x| ExifValue::Number(f64::from(x))),
        Value::Long(v) => v.first().map(|&x| ExifValue::Number(f64::from(x))),
        Value::SByte(v) => v.first().map(|&x| ExifValue::Number(f64::from(x))),
        Value::SShort(v) => v.first().map(|&x| ExifValue::Number(f64::from(x))),
        Value::SLong(v) => v.first().map(|&x| ExifValue::Number(f64::from(x))),
        Value::Float(v) => v.first().map(|&x| ExifValue::Number(f64::from(x))),
        Value::Double(v) => v.first().map(|&x| ExifValue::Number(x)),
        Value::Rational(v) => v
            .first()
            .map(|r| ExifValue::Rational(i64::from(r.num), i64::from(r.denom))),
        Value::SRational(v) => v
            .first()
            .map(|r| ExifValue::Rational(i64::from(r.num), i64::from(r.denom))),
        Value::Ascii(v) => v
            .first()
            .map(|s| ExifValue::Text(String::from_utf8_lossy(s).trim_end().to_string())),
        _ => None,
    };

    numeric.unwrap_or_else(|| ExifValue::Text(field.display_value().to_string()))
}
