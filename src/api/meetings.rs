use serde_json::{json, Map, Value};

use super::ZoomClient;
use crate::error::ZoomResult;

/// Timezone new meetings are scheduled in unless the caller says otherwise.
pub const DEFAULT_TIMEZONE: &str = "Europe/Rome";

const MEETINGS_QUERY: [(&str, &str); 1] = [("page_size", "300")];

impl ZoomClient {
    /// Lists a user's scheduled meetings.
    pub async fn get_meetings(&self, token: &str, user_id: &str) -> ZoomResult<Value> {
        let mut url = self.api_endpoint(&["users", user_id, "meetings"]);
        url.query_pairs_mut().extend_pairs(MEETINGS_QUERY);
        self.get_json(token, url).await
    }

    /// Retrieves the details of a single meeting.
    pub async fn get_meeting(&self, token: &str, meeting_id: &str) -> ZoomResult<Value> {
        let url = self.api_endpoint(&["meetings", meeting_id]);
        self.get_json(token, url).await
    }

    /// Creates a meeting hosted by the given user. See [`meeting_body`] for how
    /// `params` is combined with the defaults.
    pub async fn create_meeting(
        &self,
        token: &str,
        user_id: &str,
        params: &Map<String, Value>,
    ) -> ZoomResult<Value> {
        let url = self.api_endpoint(&["users", user_id, "meetings"]);
        self.post_json(token, url, &meeting_body(params)).await
    }
}

/// Builds the request body for a new meeting.
///
/// Top-level fields from `params` override the defaults, while the audio and
/// video settings are always forced regardless of `params.settings`.
pub fn meeting_body(params: &Map<String, Value>) -> Value {
    let mut body = overlay_caller_fields(params);
    let settings = force_settings(params.get("settings"));
    body.insert("settings".to_string(), Value::Object(settings));
    Value::Object(body)
}

/// Meeting defaults, with the caller's fields taking precedence.
fn overlay_caller_fields(params: &Map<String, Value>) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("type".to_string(), json!(2));
    body.insert("timezone".to_string(), json!(DEFAULT_TIMEZONE));
    body.insert("default_password".to_string(), json!(true));
    body.extend(params.clone());
    body
}

/// The caller's settings, with forced audio/video values taking precedence.
fn force_settings(caller_settings: Option<&Value>) -> Map<String, Value> {
    let mut settings = match caller_settings {
        Some(Value::Object(settings)) => settings.clone(),
        _ => Map::new(),
    };
    settings.insert("host_video".to_string(), json!(true));
    settings.insert("participant_video".to_string(), json!(true));
    settings.insert("audio".to_string(), json!("voip"));
    settings
}
