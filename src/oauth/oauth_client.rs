use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    api::ZoomClient,
    error::{ZoomError, ZoomResult},
    http_client::send_json,
};

impl ZoomClient {
    /// Exchanges an authorization code for an access token.
    ///
    /// Access tokens expire after one hour; keep the returned `refresh_token`
    /// around for [`ZoomClient::get_refreshed_token`].
    pub async fn get_token(&self, code: &str) -> ZoomResult<Value> {
        self.request_token(&[
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ])
        .await
    }

    /// Obtains a new access token using a refresh token.
    ///
    /// Zoom rotates refresh tokens: the latest one returned must be used for the next refresh.
    pub async fn get_refreshed_token(&self, refresh_token: &str) -> ZoomResult<Value> {
        self.request_token(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn request_token(&self, params: &[(&str, &str)]) -> ZoomResult<Value> {
        let url = self.oauth_endpoint(&["token"]);
        debug!(path = url.path(), "requesting zoom access token");

        // `form` also sets the application/x-www-form-urlencoded content type.
        let request = self
            .http
            .post(url)
            .basic_auth(
                &self.config.client_id,
                Some(self.config.client_secret.expose_secret()),
            )
            .form(params);
        let body = send_json(request).await?;

        match vendor_error(&body) {
            Some(error) => {
                warn!(%error, "zoom rejected token request");
                Err(error)
            }
            None => Ok(body),
        }
    }
}

/// Token responses report failure as `{"error": ..., "reason": ...}` rather than via status code.
fn vendor_error(body: &Value) -> Option<ZoomError> {
    let error = body.get("error").filter(|value| !value.is_null())?;
    let reason = body
        .get("reason")
        .or_else(|| body.get("error_description"))
        .filter(|value| !value.is_null())
        .map(json_text)
        .unwrap_or_default();

    Some(ZoomError::Vendor {
        error: json_text(error),
        reason,
    })
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
