use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Build from `KANBAN_API_URL`, falling back to [`DEFAULT_SERVER_URL`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url = std::env::var("KANBAN_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self::with_builder(AppConfig::builder().server_url(server_url))
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
        })
    }

    /// Point the client at `server_url` with the default API prefix
    pub fn for_server(server_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(server_url))
    }

    /// Get the full URL for a path below the API prefix
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.app.server_url, self.app.api_prefix, path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }
}
