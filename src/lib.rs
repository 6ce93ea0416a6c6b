//! OAuth2 client and REST wrapper for the Zoom API.
//!
//! A [`ZoomClient`] builds the authorization URL, exchanges codes and refresh
//! tokens for access tokens, and issues a handful of bearer-authenticated calls.
//! Responses are handed back as `serde_json::Value` documents.

mod api;
mod config;
mod error;
mod http_client;
mod oauth;
#[cfg(test)]
mod test_support;

pub use api::{meeting_body, ZoomClient, DEFAULT_TIMEZONE};
pub use config::{ZoomConfig, ZOOM_API_URL, ZOOM_OAUTH_URL};
pub use error::{ZoomError, ZoomResult};
pub use http_client::{MAX_REDIRECTS, REQUEST_TIMEOUT};
pub use oauth::TokenResponse;
