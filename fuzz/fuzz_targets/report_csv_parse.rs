//! Fuzz target for report CSV parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use photoinfo::Report;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let text = String::from_utf8_lossy(data);
    if let Ok(report) = Report::from_csv_str(&text) {
        let _ = report.to_csv_string();
    }
});
