mod http;
mod types;

pub use http::{API_KEY_HEADER, ApiClient};
pub use types::{
    Conversion, ConvertRequest, ConvertResponse, HealthResponse, TARGET_FORMAT, ValidateRequest,
};
