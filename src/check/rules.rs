use serde_json::Value;

use crate::check::report::build_report;
use crate::check::types::{ValidationIssue, ValidationReport};

const BUNDLE: &str = "Bundle";
const PATIENT: &str = "Patient";

/// Shallow structural check of a FHIR Bundle returned by the conversion
/// service.
///
/// Accepts any JSON value. Absent, null, empty and wrongly-typed fields are
/// all treated as missing; nothing here can fail.
pub fn check(bundle: &Value) -> ValidationReport {
    let mut issues = Vec::new();

    match non_empty_str(bundle, "resourceType") {
        None => issues.push(ValidationIssue::error(BUNDLE, "Missing resourceType")),
        Some(BUNDLE) => {}
        Some(other) => issues.push(ValidationIssue::warning(
            "Bundle.resourceType",
            format!("Expected resourceType 'Bundle', found '{other}'"),
        )),
    }

    if non_empty_str(bundle, "type").is_none() {
        issues.push(ValidationIssue::warning(
            "Bundle.type",
            "Missing Bundle type",
        ));
    }

    if non_empty_str(bundle, "timestamp").is_none() {
        issues.push(ValidationIssue::info(
            "Bundle.timestamp",
            "Consider adding a timestamp",
        ));
    }

    match non_empty_array(bundle, "entry") {
        None => issues.push(ValidationIssue::warning(
            "Bundle.entry",
            "Bundle contains no entries",
        )),
        Some(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                check_entry(index, entry, &mut issues);
            }
        }
    }

    build_report(issues)
}

fn check_entry(index: usize, entry: &Value, issues: &mut Vec<ValidationIssue>) {
    let Some(resource) = entry.get("resource").filter(|value| value.is_object()) else {
        issues.push(ValidationIssue::error(
            format!("Bundle.entry[{index}]"),
            "Entry missing resource",
        ));
        return;
    };

    let resource_type = non_empty_str(resource, "resourceType");
    if resource_type.is_none() {
        issues.push(ValidationIssue::error(
            format!("Bundle.entry[{index}].resource"),
            "Resource missing resourceType",
        ));
    }

    if resource_type == Some(PATIENT) {
        if non_empty_array(resource, "name").is_none() {
            issues.push(ValidationIssue::info(
                format!("Patient[{index}].name"),
                "Patient should have a name",
            ));
        }
        if non_empty_array(resource, "identifier").is_none() {
            issues.push(ValidationIssue::warning(
                format!("Patient[{index}].identifier"),
                "Patient should have at least one identifier",
            ));
        }
    }

    if non_empty_str(resource, "id").is_none() {
        let (location_type, described) = match resource_type {
            Some(name) => (name, name.to_string()),
            None => ("Resource", "Resource of unknown type".to_string()),
        };
        issues.push(ValidationIssue::info(
            format!("{location_type}[{index}].id"),
            format!("{described} should have an id"),
        ));
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

fn non_empty_array<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value
        .get(key)
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
}
