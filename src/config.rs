use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{ZoomError, ZoomResult};

/// Base path for the OAuth2 authorization and token endpoints.
pub const ZOOM_OAUTH_URL: &str = "https://zoom.us/oauth";

/// Base path for the bearer-authenticated REST API.
pub const ZOOM_API_URL: &str = "https://api.zoom.us/v2";

/// Settings required to talk to Zoom on behalf of an OAuth app.
#[derive(Debug, Clone)]
pub struct ZoomConfig {
    /// The OAuth app's client ID.
    pub client_id: String,
    /// The OAuth app's client secret. Redacted from `Debug` output.
    pub client_secret: SecretString,
    /// Must match a redirect URI registered in the OAuth app settings.
    pub redirect_uri: String,
    pub oauth_base_url: String,
    pub api_base_url: String,
}

impl ZoomConfig {
    /// Creates a configuration against Zoom's production endpoints.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
            redirect_uri: redirect_uri.into(),
            oauth_base_url: ZOOM_OAUTH_URL.to_string(),
            api_base_url: ZOOM_API_URL.to_string(),
        }
    }

    pub fn with_oauth_base_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_base_url = url.into();
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Reads the configuration from `ZOOM_*` environment variables.
    pub fn from_env() -> ZoomResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// `ZOOM_CLIENT_ID`, `ZOOM_CLIENT_SECRET` and `ZOOM_REDIRECT_URI` are required;
    /// `ZOOM_OAUTH_BASE_URL` and `ZOOM_API_BASE_URL` override the defaults when present.
    pub fn from_lookup<F>(lookup: F) -> ZoomResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| ZoomError::Config(format!("{key} is not set")))
        };

        let mut config = Self::new(
            required("ZOOM_CLIENT_ID")?,
            required("ZOOM_CLIENT_SECRET")?,
            required("ZOOM_REDIRECT_URI")?,
        );
        if let Some(url) = lookup("ZOOM_OAUTH_BASE_URL") {
            config.oauth_base_url = url;
        }
        if let Some(url) = lookup("ZOOM_API_BASE_URL") {
            config.api_base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Ensures every required setting is present and both base URLs are usable.
    pub fn validate(&self) -> ZoomResult<()> {
        for (name, value) in [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret().as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(ZoomError::Config(format!(
                    "client_id, client_secret and redirect_uri must be set ({name} is empty)"
                )));
            }
        }

        parse_base_url("oauth_base_url", &self.oauth_base_url)?;
        parse_base_url("api_base_url", &self.api_base_url)?;
        Ok(())
    }
}

/// Parses a base URL that endpoint paths will be appended onto.
pub(crate) fn parse_base_url(name: &str, value: &str) -> ZoomResult<Url> {
    let url = Url::parse(value)
        .map_err(|err| ZoomError::Config(format!("{name} is not a valid URL: {err}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ZoomError::Config(format!(
            "{name} must be an absolute http(s) URL"
        )));
    }
    Ok(url)
}
