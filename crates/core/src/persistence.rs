//! Writing and reading intake files.

use crate::config::IntakeConfig;
use crate::constants::{FILENAME_PREFIX, FILENAME_TIMESTAMP_FORMAT};
use crate::error::{IntakeError, IntakeResult};
use crate::record::{IntakeRecord, PatientInfo};
use crate::wire;
use chrono::NaiveDateTime;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path separators in a name would escape the output directory.
fn filename_safe(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect()
}

/// `medical_data_<first>_<last>_<YYYYMMDD_HHMMSS>.json`
pub fn default_filename(info: &PatientInfo, at: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}_{}.json",
        FILENAME_PREFIX,
        filename_safe(info.first_name.as_str()),
        filename_safe(info.last_name.as_str()),
        at.format(FILENAME_TIMESTAMP_FORMAT)
    )
}

/// The explicit output file if one was configured, otherwise a generated name inside the
/// output directory.
pub fn resolve_output_path(cfg: &IntakeConfig, info: &PatientInfo, at: NaiveDateTime) -> PathBuf {
    match cfg.output_file() {
        Some(file) => file.to_path_buf(),
        None => cfg.output_dir().join(default_filename(info, at)),
    }
}

/// Write a finalised record to `path` as indented JSON.
///
/// The parent directory is created if needed. An unstamped record is refused. The JSON is
/// staged in a temporary file beside `path` and renamed into place, so `path` never holds a
/// partial record.
pub fn save_record(record: &IntakeRecord, path: &Path) -> IntakeResult<()> {
    if !record.is_finalised() {
        return Err(IntakeError::NotFinalised);
    }

    let mut json = wire::to_json(record)?;
    json.push('\n');

    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(IntakeError::FileWrite)?;
            parent
        }
        None => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".intake-")
        .suffix(".partial")
        .tempfile_in(dir)
        .map_err(IntakeError::FileWrite)?;
    staged
        .write_all(json.as_bytes())
        .map_err(IntakeError::FileWrite)?;
    staged
        .as_file()
        .sync_all()
        .map_err(IntakeError::FileWrite)?;
    staged
        .persist(path)
        .map_err(|e| IntakeError::FileWrite(e.error))?;

    tracing::info!(path = %path.display(), "intake record saved");
    Ok(())
}

/// Read and validate a previously saved record.
pub fn load_record(path: &Path) -> IntakeResult<IntakeRecord> {
    let json = fs::read_to_string(path).map_err(IntakeError::FileRead)?;
    wire::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_record;
    use chrono::NaiveDate;
    use intake_types::NonEmptyText;
    use tempfile::TempDir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_micro_opt(9, 15, 2, 500_000)
            .unwrap()
    }

    #[test]
    fn test_default_filename_is_deterministic() {
        let record = sample_record(at()).unwrap();
        assert_eq!(
            default_filename(&record.patient_info, at()),
            "medical_data_Jane_Smith_20250131_091502.json"
        );
    }

    #[test]
    fn test_default_filename_neutralises_separators() {
        let mut record = sample_record(at()).unwrap();
        record.patient_info.last_name = NonEmptyText::new("Smith/../etc").unwrap();
        let name = default_filename(&record.patient_info, at());
        assert!(!name.contains('/'));
        assert_eq!(name, "medical_data_Jane_Smith_.._etc_20250131_091502.json");
    }

    #[test]
    fn test_explicit_output_file_overrides_generated_name() {
        let record = sample_record(at()).unwrap();
        let cfg = IntakeConfig::new(PathBuf::from("out"), Some(PathBuf::from("visit.json")))
            .unwrap();
        assert_eq!(
            resolve_output_path(&cfg, &record.patient_info, at()),
            PathBuf::from("visit.json")
        );

        let cfg = IntakeConfig::new(PathBuf::from("out"), None).unwrap();
        assert_eq!(
            resolve_output_path(&cfg, &record.patient_info, at()),
            PathBuf::from("out/medical_data_Jane_Smith_20250131_091502.json")
        );
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("record.json");
        let record = sample_record(at()).unwrap();

        save_record(&record, &path).expect("save should succeed");
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("}\n"));
        assert!(contents.contains("\"timestamp\": \"2025-01-31T09:15:02.500000\""));

        let loaded = load_record(&path).expect("load should succeed");
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_refuses_unstamped_record() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("record.json");
        let mut record = sample_record(at()).unwrap();
        record.timestamp = None;

        let err = save_record(&record, &path).unwrap_err();
        assert!(matches!(err, IntakeError::NotFinalised));
        assert!(!path.exists(), "no file should be written");
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_save_leaves_no_staging_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("record.json");
        fs::write(&path, "stale").unwrap();
        let record = sample_record(at()).unwrap();

        save_record(&record, &path).expect("save should succeed");

        assert_eq!(dir_entries(temp_dir.path()), vec!["record.json".to_string()]);
        assert_eq!(load_record(&path).unwrap(), record);
    }

    #[test]
    fn test_failed_save_writes_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("record.json");
        fs::create_dir(&path).unwrap();
        let record = sample_record(at()).unwrap();

        let err = save_record(&record, &path).unwrap_err();
        assert!(matches!(err, IntakeError::FileWrite(_)));
        assert_eq!(dir_entries(temp_dir.path()), vec!["record.json".to_string()]);
        assert!(path.is_dir());
    }

    #[test]
    fn test_load_missing_file_is_file_read_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = load_record(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, IntakeError::FileRead(_)));
    }
}
