use reqwest::StatusCode;
use serde_json::Value;

use crate::check::{
    OPERATION_OUTCOME, ValidationReport, build_report, issues_from_outcome,
    parse_operation_outcome,
};
use crate::client::types::{
    Conversion, ConvertRequest, ConvertResponse, HealthResponse, TARGET_FORMAT, ValidateRequest,
};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::sniff::{MessageTypeTag, classify};

pub const API_KEY_HEADER: &str = "X-API-Key";

const CONVERT_PATH: &str = "/api/convert";
const VALIDATE_PATH: &str = "/api/validate";
const HEALTH_PATH: &str = "/api/health";

/// Client for the remote conversion service. No retries; every call is a
/// single request bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sniff the message type and convert `raw` to a FHIR Bundle.
    pub async fn convert(&self, raw: &str) -> ApiResult<Conversion> {
        self.convert_as(raw, classify(raw)).await
    }

    pub async fn convert_as(
        &self,
        raw: &str,
        source_format: MessageTypeTag,
    ) -> ApiResult<Conversion> {
        let url = self.config.endpoint(CONVERT_PATH);
        let request = ConvertRequest {
            source_format,
            target_format: TARGET_FORMAT,
            data: raw,
        };

        tracing::debug!(url = %url, source_format = %source_format, "sending conversion request");
        let response = self.with_api_key(self.http.post(&url)).json(&request).send().await?;
        let status = response.status();
        let body_text = response.text().await?;
        tracing::debug!(%status, bytes = body_text.len(), "conversion response received");

        if !status.is_success() {
            return Err(status_error(status, &body_text));
        }

        let body: ConvertResponse =
            serde_json::from_str(&body_text).map_err(ApiError::InvalidResponse)?;
        if !body.success {
            return Err(ApiError::Rejected {
                code: body.error_code,
                message: body
                    .error_message
                    .unwrap_or_else(|| "conversion was not successful".to_string()),
            });
        }

        let bundle = match body.converted_data {
            Some(Value::String(text)) => {
                serde_json::from_str(&text).map_err(ApiError::InvalidConvertedData)?
            }
            Some(Value::Null) | None => return Err(ApiError::MissingConvertedData),
            Some(structured) => structured,
        };

        Ok(Conversion {
            source_format,
            bundle,
        })
    }

    /// Ask the service to validate a bundle, optionally against a profile.
    pub async fn validate(
        &self,
        bundle: &Value,
        profile: Option<&str>,
    ) -> ApiResult<ValidationReport> {
        let url = self.config.endpoint(VALIDATE_PATH);
        let request = ValidateRequest {
            data: bundle,
            profile,
        };

        tracing::debug!(url = %url, profile = ?profile, "sending validation request");
        let response = self.with_api_key(self.http.post(&url)).json(&request).send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &body_text));
        }

        let outcome = parse_operation_outcome(&body_text).map_err(ApiError::InvalidResponse)?;
        if !outcome.is_operation_outcome() {
            return Err(unexpected_response(&body_text));
        }
        Ok(build_report(issues_from_outcome(&outcome)))
    }

    pub async fn health(&self) -> ApiResult<HealthResponse> {
        let url = self.config.endpoint(HEALTH_PATH);
        let response = self.with_api_key(self.http.get(&url)).send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &body_text));
        }
        serde_json::from_str(&body_text).map_err(ApiError::InvalidResponse)
    }

    fn with_api_key(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.api_key() {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }
}

fn status_error(status: StatusCode, body_text: &str) -> ApiError {
    let message = serde_json::from_str::<ConvertResponse>(body_text)
        .ok()
        .and_then(|body| body.error_message)
        .unwrap_or_else(|| {
            let trimmed = body_text.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("no response body")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        });
    tracing::warn!(%status, %message, "service returned an error status");
    ApiError::Status { status, message }
}

fn unexpected_response(body_text: &str) -> ApiError {
    let message = serde_json::from_str::<ConvertResponse>(body_text)
        .ok()
        .and_then(|body| body.error_message)
        .unwrap_or_else(|| format!("expected an {OPERATION_OUTCOME}"));
    tracing::warn!(%message, "validation response was not an OperationOutcome");
    ApiError::UnexpectedResponse(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_error_message() {
        let body = r#"{"success":false,"errorMessage":"Invalid API key"}"#;
        let err = status_error(StatusCode::UNAUTHORIZED, body);
        assert!(matches!(
            err,
            ApiError::Status { status, ref message }
                if status == StatusCode::UNAUTHORIZED && message == "Invalid API key"
        ));
    }

    #[test]
    fn unexpected_response_uses_service_error_message() {
        let err = unexpected_response(r#"{"success":false,"errorMessage":"Invalid API key"}"#);
        assert!(matches!(err, ApiError::UnexpectedResponse(ref message) if message == "Invalid API key"));

        let err = unexpected_response(r#"{"resourceType":"Bundle"}"#);
        assert_eq!(
            err.to_string(),
            "unexpected response from service: expected an OperationOutcome"
        );
    }

    #[test]
    fn status_error_falls_back_to_body_then_reason() {
        let err = status_error(StatusCode::TOO_MANY_REQUESTS, "slow down\n");
        assert_eq!(err.to_string(), "service returned HTTP 429 Too Many Requests: slow down");

        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(
            err.to_string(),
            "service returned HTTP 500 Internal Server Error: Internal Server Error"
        );
    }
}
