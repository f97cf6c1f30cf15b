//! Report rows, CSV serialization and the run summary.
//!
//! # Column Layout
//!
//! | column | content |
//! |---|---|
//! | 1 | file name (basename) |
//! | 2-5 | exposure time, ISO, focal length, aperture |
//! | 6 | exposure time as a fraction |
//! | 7 | file path |
//!
//! Absent fields are written as `Not Found`. A row without a fraction or
//! path (for example an in-memory upload) leaves that cell empty.
//!
//! # Deterministic Output
//!
//! Rows are kept sorted by file name, then by path, so re-running over the
//! same inputs produces byte-identical output.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::encoding::TextEncoding;
use crate::error::PhotoInfoError;
use crate::exif::{ExifValue, ExtractedRecord, FieldName, Locale};

/// Number of columns in a report.
pub const COLUMN_COUNT: usize = 7;

/// One image in the report.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub file_name: String,
    pub record: ExtractedRecord,
    pub exposure_fraction: Option<String>,
    pub file_path: Option<PathBuf>,
}

impl ReportRow {
    fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(COLUMN_COUNT);
        cells.push(self.file_name.clone());
        cells.extend(self.record.iter().map(|(_, value)| value.to_string()));
        cells.push(self.exposure_fraction.clone().unwrap_or_default());
        cells.push(
            self.file_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        );
        cells
    }

    fn from_cells(cells: &csv::StringRecord) -> Self {
        let mut record = ExtractedRecord::missing();
        for field in FieldName::ALL {
            record.set(field, ExifValue::parse_cell(&cells[1 + field.index()]));
        }
        let optional = |cell: &str| (!cell.is_empty()).then(|| cell.to_string());

        ReportRow {
            file_name: cells[0].to_string(),
            record,
            exposure_fraction: optional(&cells[5]),
            file_path: optional(&cells[6]).map(PathBuf::from),
        }
    }
}

/// The ordered set of report rows plus the header language.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    rows: Vec<ReportRow>,
    locale: Locale,
}

impl Report {
    /// Creates an empty report.
    pub fn new(locale: Locale) -> Self {
        Self {
            rows: Vec::new(),
            locale,
        }
    }

    /// Builds a report from rows in any order.
    pub fn from_rows(rows: Vec<ReportRow>, locale: Locale) -> Self {
        let mut report = Self { rows, locale };
        report.sort();
        report
    }

    fn sort(&mut self) {
        // stable: equal keys keep insertion order
        self.rows.sort_by(|a, b| {
            a.file_name
                .cmp(&b.file_name)
                .then_with(|| a.file_path.cmp(&b.file_path))
        });
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers in output order.
    pub fn header(&self) -> [&'static str; COLUMN_COUNT] {
        let locale = self.locale;
        [
            locale.file_name_label(),
            FieldName::ExposureTime.label(locale),
            FieldName::IsoSensitivity.label(locale),
            FieldName::FocalLength.label(locale),
            FieldName::Aperture.label(locale),
            locale.fraction_label(),
            locale.file_path_label(),
        ]
    }

    /// Serializes the report to CSV text.
    pub fn to_csv_string(&self) -> Result<String, PhotoInfoError> {
        let dummy_path = Path::new("<string>");
        let mut csv_writer = csv::Writer::from_writer(Vec::new());

        csv_writer
            .write_record(self.header())
            .map_err(|source| PhotoInfoError::CsvWrite {
                path: dummy_path.to_path_buf(),
                source,
            })?;
        for row in &self.rows {
            csv_writer
                .write_record(row.cells())
                .map_err(|source| PhotoInfoError::CsvWrite {
                    path: dummy_path.to_path_buf(),
                    source,
                })?;
        }

        let bytes = csv_writer
            .into_inner()
            .map_err(|e| PhotoInfoError::Io(e.into_error()))?;

        String::from_utf8(bytes).map_err(|e| PhotoInfoError::CsvInvalid {
            path: dummy_path.to_path_buf(),
            message: format!("Invalid UTF-8 in output: {}", e),
        })
    }

    /// Writes the report to `path` in the given encoding.
    ///
    /// # Errors
    /// Fails if the file cannot be written or the text contains characters
    /// `encoding` cannot represent. Nothing is written in the latter case.
    pub fn write_to_path(
        &self,
        path: &Path,
        encoding: TextEncoding,
    ) -> Result<(), PhotoInfoError> {
        let text = self.to_csv_string()?;
        let bytes = encoding.encode(&text, path)?;
        fs::write(path, bytes).map_err(PhotoInfoError::Io)
    }

    /// Parses report CSV text with any supported header language.
    pub fn from_csv_str(csv_str: &str) -> Result<Self, PhotoInfoError> {
        let dummy_path = Path::new("<string>");
        let mut csv_reader = csv::Reader::from_reader(csv_str.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|source| PhotoInfoError::CsvParse {
                path: dummy_path.to_path_buf(),
                source,
            })?
            .clone();
        let locale = detect_locale(&headers).ok_or_else(|| PhotoInfoError::CsvInvalid {
            path: dummy_path.to_path_buf(),
            message: format!("unrecognized header row: {:?}", headers),
        })?;

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let cells = result.map_err(|source| PhotoInfoError::CsvParse {
                path: dummy_path.to_path_buf(),
                source,
            })?;
            rows.push(ReportRow::from_cells(&cells));
        }

        Ok(Self::from_rows(rows, locale))
    }

    /// Reads a report file written by [`Report::write_to_path`].
    pub fn read_from_path(
        path: &Path,
        encoding: TextEncoding,
    ) -> Result<Self, PhotoInfoError> {
        let bytes = fs::read(path).map_err(PhotoInfoError::Io)?;
        let text = encoding.decode(&bytes, path)?;
        Self::from_csv_str(&text).map_err(|e| match e {
            PhotoInfoError::CsvParse { source, .. } => PhotoInfoError::CsvParse {
                path: path.to_path_buf(),
                source,
            },
            PhotoInfoError::CsvInvalid { message, .. } => PhotoInfoError::CsvInvalid {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }
}

fn detect_locale(headers: &csv::StringRecord) -> Option<Locale> {
    [Locale::En, Locale::Ja].into_iter().find(|&locale| {
        let expected = Report::new(locale).header();
        headers.len() == COLUMN_COUNT && headers.iter().eq(expected.iter().copied())
    })
}

/// An input that matched the file filter but produced no row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// What a run did, for display on the terminal.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub output: PathBuf,
    pub encoding: &'static str,
    pub rows: usize,
    pub skipped: Vec<SkippedFile>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} row(s) to {} ({})",
            self.rows,
            self.output.display(),
            self.encoding
        )?;

        if !self.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skipped ({}):", self.skipped.len())?;
            for skipped in &self.skipped {
                writeln!(f, "  - {}: {}", skipped.path.display(), skipped.reason)?;
            }
        }

        Ok(())
    }
}
