//! Field extraction from a decoded EXIF table.

use super::reader::ImageReader;
use super::table::RawExifTable;
use super::tags::{FieldName, EXIF_IFD};
use super::value::ExifValue;
use crate::fraction::exposure_fraction;

/// The four reported fields of one image.
///
/// Always holds exactly one value per [`FieldName`]; absent tags are
/// [`ExifValue::Missing`].
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedRecord {
    values: [ExifValue; 4],
}

impl ExtractedRecord {
    /// A record with every field missing.
    pub fn missing() -> Self {
        Self {
            values: [
                ExifValue::Missing,
                ExifValue::Missing,
                ExifValue::Missing,
                ExifValue::Missing,
            ],
        }
    }

    pub fn get(&self, field: FieldName) -> &ExifValue {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FieldName, value: ExifValue) {
        self.values[field.index()] = value;
    }

    pub fn exposure_time(&self) -> &ExifValue {
        self.get(FieldName::ExposureTime)
    }

    /// Fields and values in report column order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &ExifValue)> {
        FieldName::ALL.into_iter().zip(self.values.iter())
    }

    /// True when none of the four tags was found.
    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(ExifValue::is_missing)
    }
}

/// Pulls the reported fields out of the Exif sub-IFD of `table`.
///
/// A table without the sub-IFD yields an all-missing record. Values are
/// passed through unmodified.
pub fn extract(table: &RawExifTable) -> ExtractedRecord {
    let mut record = ExtractedRecord::missing();

    let Some(ifd) = table.ifd(EXIF_IFD) else {
        return record;
    };

    for (&tag, value) in ifd {
        if let Some(field) = FieldName::from_tag(tag) {
            record.set(field, value.clone());
        }
    }

    record
}

/// What an interactive viewer shows for a single uploaded image.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSummary {
    Exif {
        record: ExtractedRecord,
        /// Exposure time as a fraction string, or "Not Found".
        exposure_fraction: String,
    },
    /// The bytes could not be decoded; shown as "no EXIF information available".
    NoExif,
}

/// Reads, extracts and normalizes one in-memory image.
///
/// Decode failures become [`ImageSummary::NoExif`] instead of an error.
pub fn describe_bytes<R: ImageReader + ?Sized>(
    reader: &R,
    bytes: &[u8],
    max_denominator: u32,
) -> ImageSummary {
    match reader.read_bytes(bytes) {
        Ok(table) => {
            let record = extract(&table);
            let exposure_fraction = exposure_fraction(record.exposure_time(), max_denominator);
            ImageSummary::Exif {
                record,
                exposure_fraction,
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "no EXIF information available");
            ImageSummary::NoExif
        }
    }
}
