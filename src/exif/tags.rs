//! Tag dictionary for the fields photoinfo reports.
//!
//! Only four tags from the Exif sub-IFD are recognized. Everything else in
//! the EXIF block is ignored by extraction.

/// Group id of the primary image IFD (IFD0).
pub const PRIMARY_IFD: u16 = 0;
/// Group id of the Exif sub-IFD, named after the IFD0 pointer tag (0x8769).
pub const EXIF_IFD: u16 = 34665;
/// Group id of the GPS sub-IFD (pointer tag 0x8825).
pub const GPS_IFD: u16 = 34853;
/// Group id of the Interoperability sub-IFD (pointer tag 0xA005).
pub const INTEROP_IFD: u16 = 40965;

/// `ExposureTime` in the Exif sub-IFD.
pub const TAG_EXPOSURE_TIME: u16 = 0x829A;
/// `PhotographicSensitivity` (formerly `ISOSpeedRatings`).
pub const TAG_ISO_SPEED: u16 = 0x8827;
/// `FocalLength`.
pub const TAG_FOCAL_LENGTH: u16 = 0x920A;
/// `FNumber`.
pub const TAG_APERTURE: u16 = 0x829D;

/// One of the four reported fields, in report column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    ExposureTime,
    IsoSensitivity,
    FocalLength,
    Aperture,
}

impl FieldName {
    /// All fields in their fixed order.
    pub const ALL: [FieldName; 4] = [
        FieldName::ExposureTime,
        FieldName::IsoSensitivity,
        FieldName::FocalLength,
        FieldName::Aperture,
    ];

    /// Resolves an Exif sub-IFD tag id to its field, if it is one we report.
    pub fn from_tag(tag: u16) -> Option<FieldName> {
        match tag {
            TAG_EXPOSURE_TIME => Some(FieldName::ExposureTime),
            TAG_ISO_SPEED => Some(FieldName::IsoSensitivity),
            TAG_FOCAL_LENGTH => Some(FieldName::FocalLength),
            TAG_APERTURE => Some(FieldName::Aperture),
            _ => None,
        }
    }

    /// The EXIF tag id backing this field.
    pub fn tag(self) -> u16 {
        match self {
            FieldName::ExposureTime => TAG_EXPOSURE_TIME,
            FieldName::IsoSensitivity => TAG_ISO_SPEED,
            FieldName::FocalLength => TAG_FOCAL_LENGTH,
            FieldName::Aperture => TAG_APERTURE,
        }
    }

    /// Position of this field within [`FieldName::ALL`].
    pub fn index(self) -> usize {
        match self {
            FieldName::ExposureTime => 0,
            FieldName::IsoSensitivity => 1,
            FieldName::FocalLength => 2,
            FieldName::Aperture => 3,
        }
    }

    /// Display label used as a report column header.
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, FieldName::ExposureTime) => "Exposure Time",
            (Locale::En, FieldName::IsoSensitivity) => "ISO Sensitivity",
            (Locale::En, FieldName::FocalLength) => "Focal Length",
            (Locale::En, FieldName::Aperture) => "Aperture",
            (Locale::Ja, FieldName::ExposureTime) => "露出時間",
            (Locale::Ja, FieldName::IsoSensitivity) => "ISO感度",
            (Locale::Ja, FieldName::FocalLength) => "焦点距離",
            (Locale::Ja, FieldName::Aperture) => "F値",
        }
    }
}

/// Language of the report headers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Header of the leading file-name column.
    pub fn file_name_label(self) -> &'static str {
        match self {
            Locale::En => "File Name",
            Locale::Ja => "ファイル名",
        }
    }

    /// Header of the exposure-time fraction column.
    pub fn fraction_label(self) -> &'static str {
        match self {
            Locale::En => "Exposure Time (fraction)",
            Locale::Ja => "露出時間(分数)",
        }
    }

    /// Header of the trailing file-path column.
    pub fn file_path_label(self) -> &'static str {
        match self {
            Locale::En => "File Path",
            Locale::Ja => "ファイルパス",
        }
    }
}
