#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Camera settings to embed in a synthetic JPEG.
///
/// Rationals are `(numerator, denominator)`. When every field is `None`
/// the image carries an EXIF block without an Exif sub-IFD.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExifFixture {
    pub exposure_time: Option<(u32, u32)>,
    pub f_number: Option<(u32, u32)>,
    pub iso: Option<u16>,
    pub focal_length: Option<(u32, u32)>,
}

impl ExifFixture {
    /// 1/2000 s, f/2.8, ISO 200, 50 mm.
    pub fn typical() -> Self {
        Self {
            exposure_time: Some((1, 2000)),
            f_number: Some((28, 10)),
            iso: Some(200),
            focal_length: Some((50, 1)),
        }
    }
}

const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

fn push_entry(out: &mut Vec<u8>, tag: u16, field_type: u16, value: [u8; 4]) {
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&field_type.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&value);
}

fn short_value(v: u16) -> [u8; 4] {
    let b = v.to_le_bytes();
    [b[0], b[1], 0, 0]
}

/// Little-endian TIFF structure holding the fixture's fields.
pub fn tiff_bytes(fixture: &ExifFixture) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&8u32.to_le_bytes());

    // Entries must be in ascending tag order.
    let rationals = [
        (0x829Au16, fixture.exposure_time),
        (0x829D, fixture.f_number),
    ];
    let mut count = rationals.iter().filter(|(_, v)| v.is_some()).count();
    count += usize::from(fixture.iso.is_some());
    count += usize::from(fixture.focal_length.is_some());

    if count == 0 {
        // IFD0 with only an Orientation tag.
        out.extend_from_slice(&1u16.to_le_bytes());
        push_entry(&mut out, 0x0112, TYPE_SHORT, short_value(1));
        out.extend_from_slice(&0u32.to_le_bytes());
        return out;
    }

    let exif_ifd_offset: u32 = 8 + 2 + 12 + 4;
    out.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut out, 0x8769, TYPE_LONG, exif_ifd_offset.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    let data_start = exif_ifd_offset + 2 + 12 * count as u32 + 4;
    let mut data = Vec::new();
    let mut push_rational = |out: &mut Vec<u8>, tag: u16, (num, den): (u32, u32)| {
        let offset = data_start + data.len() as u32;
        push_entry(out, tag, TYPE_RATIONAL, offset.to_le_bytes());
        data.extend_from_slice(&num.to_le_bytes());
        data.extend_from_slice(&den.to_le_bytes());
    };

    out.extend_from_slice(&(count as u16).to_le_bytes());
    for (tag, value) in rationals {
        if let Some(value) = value {
            push_rational(&mut out, tag, value);
        }
    }
    if let Some(iso) = fixture.iso {
        push_entry(&mut out, 0x8827, TYPE_SHORT, short_value(iso));
    }
    if let Some(focal) = fixture.focal_length {
        push_rational(&mut out, 0x920A, focal);
    }
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&data);
    out
}

/// A minimal JPEG: SOI, an APP1 Exif segment, EOI.
pub fn jpeg_with_exif(fixture: &ExifFixture) -> Vec<u8> {
    let tiff = tiff_bytes(fixture);
    let segment_len = (2 + 6 + tiff.len()) as u16;

    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE1];
    bytes.extend_from_slice(&segment_len.to_be_bytes());
    bytes.extend_from_slice(b"Exif\0\0");
    bytes.extend_from_slice(&tiff);
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes
}

/// A JPEG with no APP1 segment at all.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

pub fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, bytes).expect("write file");
}

pub fn write_jpeg(path: &Path, fixture: &ExifFixture) {
    write_file(path, &jpeg_with_exif(fixture));
}
