//! build-time configuration of the remote user service

pub const DEFAULT_API_URL: &str = "https://reqres.in/api";
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// sent as `x-api-key` when present
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("USERDESK_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            api_key: option_env!("USERDESK_API_KEY")
                .filter(|key| !key.is_empty())
                .map(String::from),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
