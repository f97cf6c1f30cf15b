//! Photoinfo: EXIF shooting data of JPEG photos as a CSV report.
//!
//! Photoinfo reads the exposure time, ISO sensitivity, focal length and
//! aperture from the Exif sub-IFD of each JPEG it is given, renders the
//! exposure time as a photographer-friendly fraction (`1/2000` rather than
//! `0.0005`), and writes one row per image to a CSV file.
//!
//! # Modules
//!
//! - [`exif`]: EXIF decoding, tag dictionary and field extraction
//! - [`fraction`]: closest-fraction formatting
//! - [`batch`]: input expansion, report assembly and CSV output
//! - [`encoding`]: text encoding of the report file
//! - [`error`]: Error types for photoinfo operations

pub mod batch;
pub mod encoding;
pub mod error;
pub mod exif;
pub mod fraction;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub use batch::{build_report, BatchOptions, BatchOutcome, Report, ReportRow};
pub use encoding::TextEncoding;
pub use error::PhotoInfoError;

/// The photoinfo CLI application.
#[derive(Parser)]
#[command(name = "photoinfo")]
#[command(version, author, about)]
struct Cli {
    /// JPEG files or directories containing them.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Where to write the CSV report.
    #[arg(
        short,
        long,
        env = "PHOTOINFO_OUTPUT",
        default_value = "photo_info.csv"
    )]
    output: PathBuf,

    /// Text encoding of the report ('auto' picks shift-jis on Windows, utf-8 elsewhere).
    #[arg(
        long,
        env = "PHOTOINFO_ENCODING",
        value_enum,
        default_value_t = EncodingChoice::Auto
    )]
    encoding: EncodingChoice,

    /// Largest denominator used for the exposure-time fraction.
    #[arg(
        long,
        default_value_t = fraction::DEFAULT_MAX_DENOMINATOR,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_denominator: u32,

    /// Language of the report headers.
    #[arg(long, value_enum, default_value_t = exif::Locale::En)]
    lang: exif::Locale,

    /// Format of the summary printed after the report is written ('text' or 'json').
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary: SummaryFormat,
}

/// Encoding as given on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EncodingChoice {
    Auto,
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[value(name = "shift-jis", alias = "shift_jis", alias = "sjis")]
    ShiftJis,
}

impl EncodingChoice {
    fn resolve(self) -> TextEncoding {
        match self {
            EncodingChoice::Auto => TextEncoding::platform_default(),
            EncodingChoice::Utf8 => TextEncoding::Utf8,
            EncodingChoice::ShiftJis => TextEncoding::ShiftJis,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

/// Run the photoinfo CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`. Only a
/// failure to write the report is returned as an error; unreadable images
/// are logged and listed in the summary.
pub fn run() -> Result<(), PhotoInfoError> {
    let cli = Cli::parse();

    // Decided once per run.
    let encoding = cli.encoding.resolve();
    let options = BatchOptions {
        max_denominator: cli.max_denominator,
        locale: cli.lang,
    };

    let outcome = build_report(&cli.files, &exif::ExifReader::new(), &options);
    outcome.report.write_to_path(&cli.output, encoding)?;

    let summary = batch::RunSummary {
        output: cli.output,
        encoding: encoding.name(),
        rows: outcome.report.len(),
        skipped: outcome.skipped,
    };

    match cli.summary {
        SummaryFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        SummaryFormat::Text => print!("{}", summary),
    }

    Ok(())
}
