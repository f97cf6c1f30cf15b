//! Fuzz target for exposure-time cells given as text ("1/250", "0.004").

#![no_main]

use libfuzzer_sys::fuzz_target;
use photoinfo::exif::ExifValue;
use photoinfo::fraction::exposure_fraction;

fuzz_target!(|data: (&str, u32)| {
    let (text, max_denominator) = data;
    let value = ExifValue::parse_cell(text);
    let _ = exposure_fraction(&value, max_denominator);
    let _ = exposure_fraction(&ExifValue::Text(text.to_string()), max_denominator);
});
