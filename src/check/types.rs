use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Map an `OperationOutcome.issue.severity` code.
    pub fn from_outcome_code(code: &str) -> Severity {
        match code {
            "fatal" | "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub location: String,
    pub details: String,
}

impl ValidationIssue {
    pub fn new(severity: Severity, location: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            severity,
            location: location.into(),
            details: details.into(),
        }
    }

    pub fn error(location: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(Severity::Error, location, details)
    }

    pub fn warning(location: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(Severity::Warning, location, details)
    }

    pub fn info(location: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(Severity::Info, location, details)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl IssueCounts {
    pub fn tally<'a>(issues: impl IntoIterator<Item = &'a ValidationIssue>) -> Self {
        let mut counts = IssueCounts::default();
        for issue in issues {
            match issue.severity {
                Severity::Error => counts.error += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
            }
        }
        counts
    }

    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }

    pub fn total(&self) -> usize {
        self.error + self.warning + self.info
    }
}

/// Outcome of one check run. `is_valid` is false exactly when an
/// error-severity issue is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub summary: String,
    pub issues: Vec<ValidationIssue>,
    pub issue_counts: IssueCounts,
}
