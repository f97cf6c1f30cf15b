#![allow(dead_code)]

use photoinfo::exif::{ExifValue, ExtractedRecord, FieldName, Locale, NOT_FOUND};
use photoinfo::ReportRow;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Tolerance when comparing approximation errors computed in f64.
pub const EPS_FRACTION: f64 = 1e-12;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Parses a rendered fraction ("p/q", "-p/q" or "p") back into parts.
pub fn parse_fraction(text: &str) -> Option<(i128, u128)> {
    match text.split_once('/') {
        Some((num, den)) => Some((num.parse().ok()?, den.parse().ok()?)),
        None => Some((text.parse().ok()?, 1)),
    }
}

/// Distance from `value` to the best fraction with denominator at most
/// `max_den`, found by trying every denominator.
pub fn brute_force_best_error(value: f64, max_den: u32) -> f64 {
    (1..=max_den)
        .map(|q| {
            let q = f64::from(q);
            let p = (value * q).round();
            (value - p / q).abs()
        })
        .fold(f64::INFINITY, f64::min)
}

/// Exposure times as cameras store them: a small numerator over a
/// denominator that may exceed the bound.
pub fn arb_exposure_ratio() -> BoxedStrategy<(i64, i64)> {
    (1i64..=100, 1i64..=100_000).boxed()
}

pub fn arb_exif_value() -> BoxedStrategy<ExifValue> {
    prop_oneof![
        Just(ExifValue::Missing),
        (1i64..=1000, 1i64..=10_000).prop_map(|(p, q)| ExifValue::Rational(p, q)),
        (0u32..=25_600).prop_map(|n| ExifValue::Number(f64::from(n))),
        proptest::string::string_regex("[A-Za-z][A-Za-z ,\"]{0,15}")
            .expect("valid text regex")
            .prop_filter("sentinel text", |text| text != NOT_FOUND)
            .prop_map(ExifValue::Text),
    ]
    .boxed()
}

fn file_name_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex("[a-z0-9_,]{1,12}\\.(jpg|JPG|jpeg)")
        .expect("valid filename regex")
        .boxed()
}

pub fn arb_report_row() -> BoxedStrategy<ReportRow> {
    (
        file_name_strategy(),
        proptest::collection::vec(arb_exif_value(), 4),
        proptest::option::of(
            proptest::string::string_regex("[0-9]{1,4}/[1-9][0-9]{0,3}")
                .expect("valid fraction regex"),
        ),
        any::<bool>(),
    )
        .prop_map(|(file_name, values, exposure_fraction, with_path)| {
            let mut record = ExtractedRecord::missing();
            for (field, value) in FieldName::ALL.into_iter().zip(values) {
                record.set(field, value);
            }
            let file_path = with_path.then(|| format!("photos/{}", file_name).into());
            ReportRow {
                file_name,
                record,
                exposure_fraction,
                file_path,
            }
        })
        .boxed()
}

pub fn arb_locale() -> BoxedStrategy<Locale> {
    prop_oneof![Just(Locale::En), Just(Locale::Ja)].boxed()
}
