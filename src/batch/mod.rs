//! Batch extraction over files and directories.
//!
//! [`build_report`] expands its inputs, reads every JPEG it finds, and
//! collects one [`ReportRow`] per readable image. Failures are isolated per
//! file: an image that cannot be decoded is logged, recorded as a
//! [`SkippedFile`], and the batch moves on.
//!
//! # Input Expansion
//!
//! - A directory contributes its immediate entries (no recursion) whose
//!   name has a `.jpg` or `.jpeg` extension, in any letter case.
//! - A file is kept if its name passes the same filter.
//! - Anything else (other extensions, subdirectories, paths that do not
//!   exist) is dropped without a warning, as is a directory entry that
//!   cannot be read (a dangling symlink, say) unless it is named like a JPEG.

pub mod report;

use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

use crate::error::PhotoInfoError;
use crate::exif::{extract, ImageReader, Locale};
use crate::fraction::{exposure_fraction, DEFAULT_MAX_DENOMINATOR};

pub use report::{Report, ReportRow, RunSummary, SkippedFile};

/// File extensions accepted as JPEG, compared case-insensitively.
pub const JPEG_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// A command-line input, classified once before processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSpec {
    File(PathBuf),
    Directory(PathBuf),
}

impl InputSpec {
    /// Classifies `path` by querying the filesystem.
    ///
    /// Returns `None` for paths that are neither a file nor a directory,
    /// including ones that do not exist.
    pub fn classify(path: &Path) -> Option<InputSpec> {
        let metadata = std::fs::metadata(path).ok()?;
        if metadata.is_dir() {
            Some(InputSpec::Directory(path.to_path_buf()))
        } else if metadata.is_file() {
            Some(InputSpec::File(path.to_path_buf()))
        } else {
            None
        }
    }

    /// JPEG files this input stands for.
    ///
    /// A directory that cannot be listed yields a [`SkippedFile`] for
    /// itself.
    fn expand(&self) -> Result<Vec<PathBuf>, SkippedFile> {
        match self {
            InputSpec::File(path) => Ok(if is_jpeg_name(path) {
                vec![path.clone()]
            } else {
                trace!(path = %path.display(), "ignoring non-JPEG file");
                Vec::new()
            }),
            InputSpec::Directory(dir) => list_jpegs(dir).map_err(|message| SkippedFile {
                path: dir.clone(),
                reason: message,
            }),
        }
    }
}

/// True when the file name ends in one of [`JPEG_EXTENSIONS`].
pub fn is_jpeg_name(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    JPEG_EXTENSIONS
        .iter()
        .any(|allowed| ext.eq_ignore_ascii_case(allowed))
}

fn list_jpegs(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // The directory itself could not be read.
            Err(source) if source.depth() == 0 => {
                return Err(format!("failed while listing directory: {source}"));
            }
            Err(source) => {
                if source.path().is_some_and(is_jpeg_name) {
                    warn!(error = %source, "unreadable directory entry, skipping");
                } else {
                    trace!(error = %source, "ignoring unreadable directory entry");
                }
                continue;
            }
        };

        if entry.file_type().is_file() && is_jpeg_name(entry.path()) {
            files.push(entry.into_path());
        } else {
            trace!(path = %entry.path().display(), "ignoring directory entry");
        }
    }

    Ok(files)
}

/// Tunables of a batch run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    /// Largest denominator of the exposure-time fraction.
    pub max_denominator: u32,
    /// Language of the report headers.
    pub locale: Locale,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_denominator: DEFAULT_MAX_DENOMINATOR,
            locale: Locale::default(),
        }
    }
}

/// Result of a batch run: the report plus every file left out of it.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchOutcome {
    pub report: Report,
    pub skipped: Vec<SkippedFile>,
}

/// Builds a report over `inputs`.
///
/// Never fails as a whole; per-file problems end up in
/// [`BatchOutcome::skipped`] and are logged at `warn` level.
pub fn build_report<R: ImageReader + ?Sized>(
    inputs: &[PathBuf],
    reader: &R,
    options: &BatchOptions,
) -> BatchOutcome {
    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for input in inputs {
        let Some(spec) = InputSpec::classify(input) else {
            trace!(path = %input.display(), "ignoring input that is not a file or directory");
            continue;
        };

        let files = match spec.expand() {
            Ok(files) => files,
            Err(skip) => {
                warn!(path = %skip.path.display(), reason = %skip.reason, "skipping directory");
                skipped.push(skip);
                continue;
            }
        };

        for path in files {
            match process_file(&path, reader, options) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "not jpeg or no exif, skipping");
                    skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    let report = Report::from_rows(rows, options.locale);
    info!(rows = report.len(), skipped = skipped.len(), "report assembled");

    BatchOutcome { report, skipped }
}

/// Reads one image and turns it into a report row.
pub fn process_file<R: ImageReader + ?Sized>(
    path: &Path,
    reader: &R,
    options: &BatchOptions,
) -> Result<ReportRow, PhotoInfoError> {
    let table = reader.read_path(path)?;
    let record = extract(&table);
    let fraction = exposure_fraction(record.exposure_time(), options.max_denominator);
    debug!(path = %path.display(), exposure = %fraction, "extracted");

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ReportRow {
        file_name,
        record,
        exposure_fraction: Some(fraction),
        file_path: Some(path.to_path_buf()),
    })
}
