use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::sniff::MessageTypeTag;

pub const TARGET_FORMAT: &str = "FHIR";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest<'a> {
    pub source_format: MessageTypeTag,
    pub target_format: &'a str,
    pub data: &'a str,
}

/// Body of `/api/convert` responses. Error responses share this shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    #[serde(default)]
    pub success: bool,
    pub converted_data: Option<Value>,
    pub error_message: Option<String>,
    pub error_code: Option<String>,
    pub details: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ValidateRequest<'a> {
    pub data: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    #[serde(default = "unknown_status")]
    pub status: String,
    pub version: Option<String>,
}

fn unknown_status() -> String {
    "unknown".to_string()
}

/// A successful conversion: the tag that was sent and the bundle that came
/// back.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub source_format: MessageTypeTag,
    pub bundle: Value,
}
