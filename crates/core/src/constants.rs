//! Constants used throughout the intake core crate.
//!
//! Ranges, keywords and filename pieces live here so the validators, the collectors and the
//! persistence layer agree on them.

/// Placeholder written to the output file for a vital sign the operator skipped.
pub const NOT_RECORDED: &str = "Not recorded";

/// Keywords that make the pain scale question relevant.
pub const PAIN_KEYWORDS: [&str; 4] = ["pain", "hurt", "ache", "sore"];

/// Inclusive body temperature range in degrees Fahrenheit.
pub const TEMPERATURE_RANGE_F: std::ops::RangeInclusive<f64> = 90.0..=110.0;

/// Inclusive height range in inches (2' to 8').
pub const HEIGHT_RANGE_IN: std::ops::RangeInclusive<f64> = 24.0..=96.0;

/// Inclusive heart rate range in beats per minute.
pub const HEART_RATE_RANGE_BPM: std::ops::RangeInclusive<i64> = 30..=200;

/// Inclusive pain scale range.
pub const PAIN_SCALE: std::ops::RangeInclusive<i64> = 0..=10;

/// Input format for dates of birth (MM/DD/YYYY).
pub const DATE_OF_BIRTH_FORMAT: &str = "%m/%d/%Y";

/// Timestamp format embedded in generated filenames.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Format of the `timestamp` field in the saved record.
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Prefix for generated intake filenames.
pub const FILENAME_PREFIX: &str = "medical_data";

/// Filename used by the sample command when no output is given.
pub const SAMPLE_FILENAME: &str = "sample_medical_data.json";

/// Default directory for generated filenames when nothing is configured.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Width of the `=` rule drawn around section headers.
pub const HEADER_WIDTH: usize = 50;

/// Width of the rule used by the full report view.
pub const REPORT_WIDTH: usize = 60;
