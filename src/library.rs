//! Library-style entry points for MediConnect.
//!
//! These load messages and bundles from disk (or stdin) and run the sniffer
//! and checker on them. The CLI in `src/main.rs` is a thin layer on top.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;

pub use crate::check::{
    IssueCounts, Severity, ValidationIssue, ValidationReport, build_report, check, format_report,
    is_failure, print_report,
};
pub use crate::client::{ApiClient, Conversion, HealthResponse};
pub use crate::config::{ClientConfig, ConfigOverrides};
pub use crate::error::{ApiError, ApiResult, InputError, SessionError};
pub use crate::samples::{SAMPLES, Sample, find_sample};
pub use crate::session::DemoSession;
pub use crate::sniff::{MessageTypeTag, classify};

/// Path that means "read from stdin".
pub const STDIN_PATH: &str = "-";

pub fn read_text(path: &Path) -> Result<String, InputError> {
    let read = if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a raw message from a file or a built-in sample key.
///
/// A file takes precedence when both are given.
pub fn load_message(file: Option<&Path>, sample: Option<&str>) -> Result<String, InputError> {
    match (file, sample) {
        (Some(path), _) => read_text(path),
        (None, Some(key)) => find_sample(key)
            .map(|sample| sample.data.to_string())
            .ok_or_else(|| InputError::UnknownSample(key.to_string())),
        (None, None) => Err(InputError::NoMessage),
    }
}

pub fn load_bundle(path: &Path) -> Result<Value, InputError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn classify_file(path: &Path) -> Result<MessageTypeTag, InputError> {
    Ok(classify(&read_text(path)?))
}

pub fn check_file(path: &Path) -> Result<ValidationReport, InputError> {
    Ok(check(&load_bundle(path)?))
}
