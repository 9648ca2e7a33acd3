use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// error body returned by the user service, e.g. `{"error": "Missing password"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub error: Option<String>,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.error {
            Some(details) => write!(f, "{}: {}", self.status, details),
            None => write!(f, "{}", self.status),
        }
    }
}

impl ApiError {
    pub fn unknown(status: u16) -> Self {
        ApiError {
            status,
            error: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_service_error_body() {
        let err: ApiError = serde_json::from_str(r#"{"error":"Missing password"}"#).unwrap();
        assert_eq!(err.with_status(400).to_string(), "400: Missing password");
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        let err: ApiError = serde_json::from_str("{}").unwrap();
        assert_eq!(err, ApiError::unknown(0));
        assert_eq!(ApiError::unknown(502).to_string(), "502");
    }
}
