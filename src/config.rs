use serde::Deserialize;

/// Default CereVoice Cloud REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://cerevoice.com/rest/rest_1_1.php";

/// API connection settings. Immutable for the lifetime of a [`Client`].
///
/// [`Client`]: crate::client::Client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub account_id: String,
    pub password: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl ClientConfig {
    pub fn new(account_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            password: password.into(),
            api_url: default_api_url(),
        }
    }

    /// Override the endpoint, e.g. to point at a test server.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoint() {
        let config = ClientConfig::new("account", "secret");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.account_id, "account");
        assert_eq!(config.password, "secret");
    }

    #[test]
    fn test_with_api_url_overrides_endpoint() {
        let config = ClientConfig::new("account", "secret").with_api_url("http://127.0.0.1:9999");
        assert_eq!(config.api_url, "http://127.0.0.1:9999");
    }
}
