//! FHIR `OperationOutcome` as returned by the remote `/api/validate`
//! endpoint, and its translation into [`ValidationIssue`]s.

use serde::Deserialize;

use crate::check::types::{Severity, ValidationIssue};

#[derive(Debug, Deserialize)]
pub struct OperationOutcome {
    #[serde(rename = "resourceType")]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub issue: Vec<OutcomeIssue>,
}

impl OperationOutcome {
    pub fn is_operation_outcome(&self) -> bool {
        self.resource_type.as_deref() == Some(OPERATION_OUTCOME)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutcomeIssue {
    pub severity: Option<String>,
    pub code: Option<String>,
    pub diagnostics: Option<String>,
    pub details: Option<CodeableConcept>,
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(default)]
    pub expression: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CodeableConcept {
    pub text: Option<String>,
}

pub const OPERATION_OUTCOME: &str = "OperationOutcome";

/// Parse a response body as an `OperationOutcome`.
///
/// Malformed JSON is an error; callers decide what to do with a
/// well-formed body of another `resourceType`.
pub fn parse_operation_outcome(body_text: &str) -> serde_json::Result<OperationOutcome> {
    serde_json::from_str::<OperationOutcome>(body_text)
}

pub fn issues_from_outcome(outcome: &OperationOutcome) -> Vec<ValidationIssue> {
    outcome.issue.iter().map(to_validation_issue).collect()
}

fn to_validation_issue(issue: &OutcomeIssue) -> ValidationIssue {
    let severity = Severity::from_outcome_code(issue.severity.as_deref().unwrap_or_default());
    let location = issue
        .expression
        .first()
        .or_else(|| issue.location.first())
        .cloned()
        .unwrap_or_else(|| "Bundle".to_string());
    let details = issue
        .diagnostics
        .clone()
        .or_else(|| {
            issue
                .details
                .as_ref()
                .and_then(|details| details.text.clone())
        })
        .or_else(|| issue.code.clone())
        .unwrap_or_else(|| "(no diagnostics provided)".to_string());

    ValidationIssue::new(severity, location, details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_operation_outcome_rejects_invalid_json() {
        assert!(parse_operation_outcome("not-json").is_err());
        assert!(parse_operation_outcome("<html>gateway</html>").is_err());
    }

    #[test]
    fn other_resource_types_are_not_outcomes() {
        let outcome = parse_operation_outcome(r#"{"success":false,"errorMessage":"Invalid API key"}"#)
            .expect("well-formed json");
        assert!(!outcome.is_operation_outcome());
        assert!(outcome.issue.is_empty());
    }

    #[test]
    fn maps_outcome_issues() {
        let json = r#"{
            "resourceType":"OperationOutcome",
            "issue":[
                {"severity":"fatal","code":"structure","diagnostics":"Unparseable","location":["Bundle"]},
                {"severity":"warning","code":"invalid","details":{"text":"Unknown system"},"expression":["Bundle.entry[0].resource.identifier[0].system"],"location":["line 4"]},
                {"severity":"information","code":"informational"}
            ]
        }"#;

        let outcome = parse_operation_outcome(json).expect("outcome parse");
        assert!(outcome.is_operation_outcome());
        let issues = issues_from_outcome(&outcome);

        assert_eq!(outcome.resource_type.as_deref(), Some("OperationOutcome"));
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0], ValidationIssue::error("Bundle", "Unparseable"));
        assert_eq!(
            issues[1],
            ValidationIssue::warning(
                "Bundle.entry[0].resource.identifier[0].system",
                "Unknown system"
            )
        );
        assert_eq!(issues[2], ValidationIssue::info("Bundle", "informational"));
    }
}
