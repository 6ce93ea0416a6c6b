use crate::api::ZoomClient;

impl ZoomClient {
    /// Builds the URL the user should be sent to in order to authorize this app.
    ///
    /// Zoom prompts the user, then redirects back to `redirect_uri` with the
    /// authorization code in its `code` query parameter. No request is made here.
    pub fn authorize(&self) -> String {
        let mut url = self.oauth_endpoint(&["authorize"]);
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("client_id", &self.config.client_id);
        url.to_string()
    }
}
