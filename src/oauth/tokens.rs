use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ZoomResult;

/// The fields of a successful token response most callers care about.
///
/// Token calls return the vendor JSON untouched; this is an optional typed
/// view for hosts that persist tokens themselves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Valid for 90 days, and replaced on every refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime of `access_token` in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl TokenResponse {
    pub fn from_value(value: &Value) -> ZoomResult<Self> {
        Ok(Self::deserialize(value)?)
    }
}
