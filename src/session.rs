//! State for one interactive demo run: the pasted message, the last
//! conversion or error, and the last local check of the converted bundle.

use crate::check::{ValidationReport, check};
use crate::client::{ApiClient, Conversion};
use crate::error::SessionError;
use crate::samples::{Sample, find_sample};

const EMPTY_INPUT_MESSAGE: &str = "Paste an HL7 or EDI message, or load a sample, before converting.";

#[derive(Debug, Default)]
pub struct DemoSession {
    input: String,
    selected: Option<&'static Sample>,
    result: Option<Conversion>,
    error: Option<String>,
    validation: Option<ValidationReport>,
}

impl DemoSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the input with a built-in sample and clear previous results.
    pub fn load_sample(&mut self, key: &str) -> Result<&'static Sample, SessionError> {
        let sample = find_sample(key).ok_or_else(|| SessionError::UnknownSample(key.to_string()))?;
        self.selected = Some(sample);
        self.input = sample.data.to_string();
        self.clear_results();
        Ok(sample)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected_sample(&self) -> Option<&'static Sample> {
        self.selected
    }

    pub fn result(&self) -> Option<&Conversion> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn validation(&self) -> Option<&ValidationReport> {
        self.validation.as_ref()
    }

    /// Send the current input for conversion. Previous results are cleared
    /// first, so a failure never leaves a stale bundle behind.
    pub async fn convert(&mut self, client: &ApiClient) -> Result<&Conversion, SessionError> {
        self.clear_results();

        if self.input.trim().is_empty() {
            self.error = Some(EMPTY_INPUT_MESSAGE.to_string());
            return Err(SessionError::EmptyInput);
        }

        match client.convert(&self.input).await {
            Ok(conversion) => Ok(self.result.insert(conversion)),
            Err(err) => {
                tracing::warn!(error = %err, "conversion failed");
                self.error = Some(format!("Conversion failed: {err}"));
                Err(err.into())
            }
        }
    }

    /// Run the local shape check over the last converted bundle.
    pub fn validate(&mut self) -> Result<&ValidationReport, SessionError> {
        let Some(conversion) = self.result.as_ref() else {
            self.error = Some(SessionError::NoConversion.to_string());
            return Err(SessionError::NoConversion);
        };

        let report = check(&conversion.bundle);
        Ok(self.validation.insert(report))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clear_results(&mut self) {
        self.result = None;
        self.error = None;
        self.validation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sniff::MessageTypeTag;

    #[test]
    fn load_sample_replaces_input() {
        let mut session = DemoSession::new();
        session.set_input("stale text");

        let sample = session.load_sample("oru").expect("ORU sample");
        assert_eq!(sample.tag, MessageTypeTag::Oru);
        assert_eq!(session.input(), sample.data);
        assert_eq!(session.selected_sample().map(|s| s.key), Some("ORU"));
    }

    #[test]
    fn unknown_sample_leaves_state_alone() {
        let mut session = DemoSession::new();
        session.set_input("MSH|");
        assert!(matches!(
            session.load_sample("XYZ"),
            Err(SessionError::UnknownSample(key)) if key == "XYZ"
        ));
        assert_eq!(session.input(), "MSH|");
    }

    #[test]
    fn validate_requires_conversion() {
        let mut session = DemoSession::new();
        assert!(matches!(session.validate(), Err(SessionError::NoConversion)));
        assert_eq!(
            session.error(),
            Some("validation requires a prior successful conversion")
        );
        assert!(session.validation().is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = DemoSession::new();
        session.load_sample("ADT").expect("ADT sample");
        let _ = session.validate();
        session.reset();
        assert_eq!(session.input(), "");
        assert!(session.selected_sample().is_none());
        assert!(session.error().is_none());
    }
}
