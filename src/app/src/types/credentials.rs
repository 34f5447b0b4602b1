use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use crate::error::RequestError;

/// WiFi credentials as entered in the form. Lives for one save action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CredentialSubmission {
    #[validate(min_length = 1)]
    pub ssid: String,
    pub password: String,
}

impl CredentialSubmission {
    /// Validated constructor; an empty SSID is rejected.
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Result<Self, RequestError> {
        let submission = Self {
            ssid: ssid.into(),
            password: password.into(),
        };
        submission
            .validate()
            .map_err(|e| RequestError::Validation(e.to_string()))?;
        Ok(submission)
    }

    /// `application/x-www-form-urlencoded` body for `POST /save`.
    /// The password pair is always sent, even when empty.
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("ssid", &self.ssid)
            .append_pair("password", &self.password)
            .finish()
    }
}
