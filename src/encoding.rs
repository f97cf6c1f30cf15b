//! Text encoding of the written report.
//!
//! Spreadsheet software on Japanese Windows installs opens CSV files as
//! Shift_JIS, everything else expects UTF-8. The choice is made once, by
//! the caller, and passed down explicitly.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};

use crate::error::PhotoInfoError;

/// Encoding used for the report file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    ShiftJis,
}

impl TextEncoding {
    /// Shift_JIS on Windows targets, UTF-8 elsewhere.
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            TextEncoding::ShiftJis
        } else {
            TextEncoding::Utf8
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::ShiftJis => "shift-jis",
        }
    }

    fn encoding(self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => UTF_8,
            TextEncoding::ShiftJis => SHIFT_JIS,
        }
    }

    /// Encodes report text, refusing characters the encoding lacks.
    ///
    /// `path` is only used in the error.
    pub fn encode<'a>(
        self,
        text: &'a str,
        path: &Path,
    ) -> Result<Cow<'a, [u8]>, PhotoInfoError> {
        let (bytes, _, had_unmappable) = self.encoding().encode(text);
        if had_unmappable {
            return Err(PhotoInfoError::Unencodable {
                encoding: self.name(),
                path: path.to_path_buf(),
            });
        }
        Ok(bytes)
    }

    /// Decodes report bytes written with this encoding.
    pub fn decode<'a>(
        self,
        bytes: &'a [u8],
        path: &Path,
    ) -> Result<Cow<'a, str>, PhotoInfoError> {
        self.encoding()
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| PhotoInfoError::CsvInvalid {
                path: path.to_path_buf(),
                message: format!("bytes are not valid {}", self.name()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_jis_round_trips_japanese_headers() {
        let text = "ファイル名,露出時間,F値\n";
        let path = Path::new("photo_info.csv");
        let bytes = TextEncoding::ShiftJis.encode(text, path).unwrap();
        assert_ne!(bytes.as_ref(), text.as_bytes());

        let decoded = TextEncoding::ShiftJis.decode(&bytes, path).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn utf8_is_passthrough() {
        let text = "Exposure Time,1/2000\n";
        let bytes = TextEncoding::Utf8.encode(text, Path::new("x.csv")).unwrap();
        assert_eq!(bytes.as_ref(), text.as_bytes());
    }

    #[test]
    fn unmappable_characters_are_rejected() {
        let err = TextEncoding::ShiftJis
            .encode("photo 📷.jpg", Path::new("x.csv"))
            .unwrap_err();
        assert!(matches!(
            err,
            PhotoInfoError::Unencodable {
                encoding: "shift-jis",
                ..
            }
        ));
    }

    #[test]
    fn platform_default_follows_target() {
        let expected = if cfg!(windows) {
            TextEncoding::ShiftJis
        } else {
            TextEncoding::Utf8
        };
        assert_eq!(TextEncoding::platform_default(), expected);
    }
}
