use crate::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_USER_AGENT: &str = concat!("polygonio-client/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "POLYGONIO_API_KEY";
/// Optional environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "POLYGONIO_BASE_URL";

/// Client settings that do not change between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl ClientConfig {
    /// Scheme and host, e.g. `https://api.polygon.io`. Must be `https`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        if !base_url.starts_with("https://") {
            return Err(ClientError::InsecureBaseUrl { url: base_url });
        }
        self.base_url = base_url.trim_end_matches('/').to_owned();
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Default settings with [`BASE_URL_ENV`] applied when set.
    pub fn from_env() -> Result<Self, ClientError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => Self::default().with_base_url(base_url.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
