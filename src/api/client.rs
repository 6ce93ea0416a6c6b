use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::{
    config::{parse_base_url, ZoomConfig},
    error::ZoomResult,
    http_client::{build_http_client, send_json},
};

/// A client for a single Zoom OAuth app.
///
/// Holds no per-user state: access tokens are passed into each call, so one
/// client can be cloned and shared freely across tasks.
#[derive(Debug, Clone)]
pub struct ZoomClient {
    pub(crate) config: ZoomConfig,
    oauth_base: Url,
    api_base: Url,
    pub(crate) http: reqwest::Client,
}

impl ZoomClient {
    /// Creates a client around the given configuration.
    /// Fails before any request can be made if a setting is missing.
    pub fn new(config: ZoomConfig) -> ZoomResult<Self> {
        config.validate()?;
        let oauth_base = parse_base_url("oauth_base_url", &config.oauth_base_url)?;
        let api_base = parse_base_url("api_base_url", &config.api_base_url)?;

        Ok(Self {
            config,
            oauth_base,
            api_base,
            http: build_http_client()?,
        })
    }

    pub(crate) fn oauth_endpoint(&self, segments: &[&str]) -> Url {
        endpoint(&self.oauth_base, segments)
    }

    pub(crate) fn api_endpoint(&self, segments: &[&str]) -> Url {
        endpoint(&self.api_base, segments)
    }

    /// Performs a bearer-authenticated GET against the REST API.
    pub(crate) async fn get_json(&self, token: &str, url: Url) -> ZoomResult<Value> {
        debug!(method = "GET", path = url.path(), "calling zoom api");
        let request = self
            .http
            .get(url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json");
        send_json(request).await
    }

    /// Performs a bearer-authenticated POST with a JSON body against the REST API.
    pub(crate) async fn post_json(
        &self,
        token: &str,
        url: Url,
        body: &Value,
    ) -> ZoomResult<Value> {
        debug!(method = "POST", path = url.path(), "calling zoom api");
        let request = self.http.post(url).bearer_auth(token).json(body);
        send_json(request).await
    }
}

/// Appends each segment onto the base URL's path, percent-encoding as needed.
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Base URLs are checked to be hierarchical when the client is created.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
