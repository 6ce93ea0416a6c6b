use chrono::{Local, NaiveDate};
use serde_json::Value;

use super::ZoomClient;
use crate::error::ZoomResult;

/// Only the first page of active users is ever requested.
const USERS_QUERY: [(&str, &str); 3] = [
    ("status", "active"),
    ("page_size", "30"),
    ("page_number", "1"),
];

/// Recordings are listed from the epoch up to (and including) `today`.
fn recordings_query(today: NaiveDate) -> [(&'static str, String); 3] {
    [
        ("page_size", "300".to_string()),
        ("from", "1970-01-01".to_string()),
        ("to", today.format("%Y-%m-%d").to_string()),
    ]
}

impl ZoomClient {
    /// Lists the account's active users.
    pub async fn get_users(&self, token: &str) -> ZoomResult<Value> {
        let mut url = self.api_endpoint(&["users"]);
        url.query_pairs_mut().extend_pairs(USERS_QUERY);
        self.get_json(token, url).await
    }

    /// Lists all cloud recordings of a user, by user ID or email address.
    pub async fn get_recordings(&self, token: &str, user_id: &str) -> ZoomResult<Value> {
        let today = Local::now().date_naive();
        let mut url = self.api_endpoint(&["users", user_id, "recordings"]);
        url.query_pairs_mut().extend_pairs(recordings_query(today).iter());
        self.get_json(token, url).await
    }
}
