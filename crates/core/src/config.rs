//! Intake runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the session. Nothing
//! below the binary reads environment variables.

use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::error::{IntakeError, IntakeResult};
use std::path::{Path, PathBuf};

/// Where a saved record should go.
#[derive(Clone, Debug)]
pub struct IntakeConfig {
    output_dir: PathBuf,
    output_file: Option<PathBuf>,
}

impl IntakeConfig {
    /// Create a new `IntakeConfig`.
    ///
    /// `output_dir` is where generated filenames are placed. It does not need to exist yet, but
    /// it must not be an existing file. `output_file`, when given, overrides the generated name
    /// entirely and is used as-is.
    pub fn new(output_dir: PathBuf, output_file: Option<PathBuf>) -> IntakeResult<Self> {
        if output_dir.as_os_str().is_empty() {
            return Err(IntakeError::InvalidConfig(
                "output directory cannot be empty".into(),
            ));
        }
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(IntakeError::InvalidConfig(format!(
                "output directory {} is not a directory",
                output_dir.display()
            )));
        }
        if let Some(file) = &output_file {
            if file.as_os_str().is_empty() || file.is_dir() {
                return Err(IntakeError::InvalidConfig(format!(
                    "output file {} is not a usable file path",
                    file.display()
                )));
            }
        }

        Ok(Self {
            output_dir,
            output_file,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }
}

/// Resolve the output directory from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns the current directory.
pub fn output_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}
