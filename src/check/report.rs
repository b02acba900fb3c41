use crate::check::types::{IssueCounts, Severity, ValidationIssue, ValidationReport};

pub const NO_ISSUES_SUMMARY: &str = "Valid FHIR Bundle - no issues found";

/// Aggregate issues into a report: counts, validity and summary line.
pub fn build_report(issues: Vec<ValidationIssue>) -> ValidationReport {
    let issue_counts = IssueCounts::tally(&issues);
    ValidationReport {
        is_valid: issue_counts.error == 0,
        summary: summarize(&issue_counts),
        issues,
        issue_counts,
    }
}

fn summarize(counts: &IssueCounts) -> String {
    match (counts.error, counts.warning, counts.info) {
        (0, 0, 0) => NO_ISSUES_SUMMARY.to_string(),
        (0, warnings, infos) if warnings > 0 && infos > 0 => {
            format!("Valid with {warnings} warnings and {infos} recommendations")
        }
        (0, warnings, 0) => format!(
            "Valid with {} {}",
            warnings,
            plural(warnings, "warning", "warnings")
        ),
        (0, _, infos) => format!(
            "Valid with {} {}",
            infos,
            plural(infos, "recommendation", "recommendations")
        ),
        _ => format!("Validation failed with {} issues", counts.total()),
    }
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

pub fn is_failure(report: &ValidationReport) -> bool {
    !report.is_valid
}

pub fn format_report(report: &ValidationReport, source: &str) -> String {
    let counts = &report.issue_counts;
    let mut output = String::new();
    output.push_str("FHIR Bundle Check\n");
    output.push_str("-----------------\n");
    output.push_str(&format!("Source: {}\n", source));
    output.push_str(&format!(
        "Issues: {} (errors: {}, warnings: {}, info: {})\n",
        counts.total(),
        counts.error,
        counts.warning,
        counts.info
    ));

    if report.is_valid {
        output.push_str("Result: PASS ✅\n");
    } else {
        output.push_str("Result: FAIL ❌\n");
    }
    output.push_str(&format!("Summary: {}\n", report.summary));

    if report.issues.is_empty() {
        output.push_str("\nNo issues reported.\n");
        return output;
    }

    output.push_str("\nIssues by severity:\n");
    for severity in Severity::ALL {
        let items: Vec<&ValidationIssue> = report
            .issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .collect();
        if items.is_empty() {
            continue;
        }

        output.push_str(&format!("- {} ({})\n", severity, items.len()));
        for (index, item) in items.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {}: {}\n",
                index + 1,
                item.location,
                item.details
            ));
        }
    }

    output
}

pub fn print_report(report: &ValidationReport, source: &str) {
    println!("{}", format_report(report, source));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(errors: usize, warnings: usize, infos: usize) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        issues.extend((0..errors).map(|i| ValidationIssue::error(format!("E{i}"), "error")));
        issues.extend((0..warnings).map(|i| ValidationIssue::warning(format!("W{i}"), "warning")));
        issues.extend((0..infos).map(|i| ValidationIssue::info(format!("I{i}"), "info")));
        issues
    }

    #[test]
    fn summary_wording_per_severity_mix() {
        let cases = [
            ((0, 0, 0), "Valid FHIR Bundle - no issues found"),
            ((1, 0, 0), "Validation failed with 1 issues"),
            ((1, 2, 3), "Validation failed with 6 issues"),
            ((0, 2, 1), "Valid with 2 warnings and 1 recommendations"),
            ((0, 1, 0), "Valid with 1 warning"),
            ((0, 3, 0), "Valid with 3 warnings"),
            ((0, 0, 1), "Valid with 1 recommendation"),
            ((0, 0, 4), "Valid with 4 recommendations"),
        ];

        for ((errors, warnings, infos), expected) in cases {
            let report = build_report(issues(errors, warnings, infos));
            assert_eq!(report.summary, expected);
        }
    }

    #[test]
    fn warnings_and_infos_do_not_invalidate() {
        assert!(build_report(issues(0, 5, 5)).is_valid);
        assert!(!build_report(issues(1, 0, 0)).is_valid);
    }

    #[test]
    fn issue_order_is_preserved() {
        let report = build_report(issues(1, 1, 1));
        let order: Vec<&str> = report.issues.iter().map(|i| i.location.as_str()).collect();
        assert_eq!(order, vec!["E0", "W0", "I0"]);
    }

    #[test]
    fn format_lists_issues_grouped_by_severity() {
        let report = build_report(vec![
            ValidationIssue::info("Bundle.timestamp", "Consider adding a timestamp"),
            ValidationIssue::error("Bundle", "Missing resourceType"),
        ]);
        let text = format_report(&report, "bundle.json");

        assert!(text.contains("Source: bundle.json"));
        assert!(text.contains("Result: FAIL"));
        assert!(text.contains("Issues: 2 (errors: 1, warnings: 0, info: 1)"));
        let error_at = text.find("- error (1)").expect("error group");
        let info_at = text.find("- info (1)").expect("info group");
        assert!(error_at < info_at);
        assert!(!text.contains("- warning"));
        assert!(text.contains("  1. Bundle: Missing resourceType"));
    }

    #[test]
    fn format_clean_report() {
        let report = build_report(Vec::new());
        let text = format_report(&report, "inline");
        assert!(text.contains("Result: PASS"));
        assert!(text.contains("No issues reported."));
        assert!(!is_failure(&report));
    }
}
