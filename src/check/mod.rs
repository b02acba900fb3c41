mod outcome;
mod report;
mod rules;
mod types;

pub use outcome::{
    CodeableConcept, OPERATION_OUTCOME, OperationOutcome, OutcomeIssue, issues_from_outcome,
    parse_operation_outcome,
};
pub use report::{NO_ISSUES_SUMMARY, build_report, format_report, is_failure, print_report};
pub use rules::check;
pub use types::{IssueCounts, Severity, ValidationIssue, ValidationReport};
