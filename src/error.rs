use std::path::PathBuf;

use reqwest::StatusCode;

/// Errors talking to the remote conversion service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("service rejected the request: {message}")]
    Rejected {
        code: Option<String>,
        message: String,
    },
    #[error("response body is not valid JSON: {0}")]
    InvalidResponse(#[source] serde_json::Error),
    #[error("unexpected response from service: {0}")]
    UnexpectedResponse(String),
    #[error("response did not include convertedData")]
    MissingConvertedData,
    #[error("convertedData is not valid JSON: {0}")]
    InvalidConvertedData(#[source] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from the interactive demo session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no message to convert")]
    EmptyInput,
    #[error("unknown sample '{0}'")]
    UnknownSample(String),
    #[error("validation requires a prior successful conversion")]
    NoConversion,
    #[error("conversion failed: {0}")]
    Conversion(#[from] ApiError),
}

/// Errors loading a message or bundle for the CLI and library entry points.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid JSON: {source}", path = path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown sample '{0}'")]
    UnknownSample(String),
    #[error("provide either a message file or --sample")]
    NoMessage,
}
