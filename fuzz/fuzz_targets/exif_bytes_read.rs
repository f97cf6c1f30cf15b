//! Fuzz target for EXIF decoding of in-memory images.
//!
//! Arbitrary bytes go through the same path as an uploaded file: decode,
//! extract the four fields, format the exposure time.

#![no_main]

use libfuzzer_sys::fuzz_target;
use photoinfo::exif::{describe_bytes, ExifReader};
use photoinfo::fraction::DEFAULT_MAX_DENOMINATOR;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = describe_bytes(&ExifReader::new(), data, DEFAULT_MAX_DENOMINATOR);
});
