//! Client configuration.
//!
//! Credentials and URLs are plain constructor arguments; the library
//! reads no environment variables and stores nothing.

/// Production Habitica API host.
pub const DEFAULT_BASE_URL: &str = "https://habitica.com";

/// Maintainer id used in the default `x-client` header, per Habitica's
/// third-party tool rules.
const DEVELOPER_ID: &str = "4c4ca53f-c059-4ffa-966e-9d29dd405daf";

/// Connection settings for [`HabiticaApi`](crate::api::HabiticaApi).
///
/// `api_user`/`api_key` are the two static authentication headers; both
/// must be present for authenticated endpoints and must be supplied
/// together. `x_client` identifies the calling application as
/// `"<maintainer uuid> - <app name>"`; when absent a library default is
/// sent.
#[derive(Debug, Clone)]
pub struct HabiticaConfig {
    pub api_user: Option<String>,
    pub api_key: Option<String>,
    pub base_url: String,
    pub x_client: Option<String>,
}

impl Default for HabiticaConfig {
    fn default() -> Self {
        HabiticaConfig {
            api_user: None,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            x_client: None,
        }
    }
}

impl HabiticaConfig {
    /// Configuration for an authenticated client against the production
    /// host.
    pub fn authenticated(api_user: impl Into<String>, api_key: impl Into<String>) -> Self {
        HabiticaConfig {
            api_user: Some(api_user.into()),
            api_key: Some(api_key.into()),
            ..HabiticaConfig::default()
        }
    }

    /// Configuration for an unauthenticated client (login and content
    /// endpoints only).
    pub fn anonymous() -> Self {
        HabiticaConfig::default()
    }

    /// Override the API host, e.g. for a self-hosted instance.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Identify the calling application in the `x-client` header.
    pub fn with_x_client(mut self, x_client: impl Into<String>) -> Self {
        self.x_client = Some(x_client.into());
        self
    }

    pub(crate) fn resolved_x_client(&self) -> String {
        self.x_client
            .clone()
            .unwrap_or_else(|| format!("{DEVELOPER_ID} - habitica-client/{}", version()))
    }

    pub(crate) fn user_agent(&self) -> String {
        format!("habitica-client/{}", version())
    }
}

fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
