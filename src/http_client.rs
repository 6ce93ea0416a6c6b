use reqwest::{redirect::Policy, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ZoomResult;

/// Every request gives up after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Up to this many redirects are followed; one more is reported as a transport error.
pub const MAX_REDIRECTS: usize = 10;

/// Builds the HTTP client shared by every call a `ZoomClient` makes.
pub fn build_http_client() -> ZoomResult<reqwest::Client> {
    http_client_with_timeout(REQUEST_TIMEOUT)
}

pub(crate) fn http_client_with_timeout(timeout: Duration) -> ZoomResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .redirect(redirect_policy())
        .http1_only()
        .user_agent(concat!("zoomoauth/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// `previous` holds the original URL plus every hop followed so far.
fn redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() > MAX_REDIRECTS {
            attempt.error("too many redirects")
        } else {
            attempt.follow()
        }
    })
}

/// Sends the given request and decodes its body as JSON.
///
/// Zoom's status code is not inspected: whatever document the vendor sends back
/// is handed to the caller. A body that isn't JSON at all decodes to `Value::Null`.
pub async fn send_json(request: RequestBuilder) -> ZoomResult<Value> {
    let response = request.send().await?;
    debug!(status = %response.status(), url = %response.url().path(), "zoom responded");

    // Reading the body can still fail mid-transfer; that's a transport error too.
    let body = response.text().await?;
    Ok(decode_body(&body))
}

fn decode_body(body: &str) -> Value {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, "zoom response body is not JSON");
            Value::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZoomError;
    use mockito::{Mock, Server, ServerGuard};
    use serde_json::json;
    use std::{io::Write, time::Instant};

    /// Serves `hops` redirects in a row before answering with JSON.
    async fn redirect_chain(server: &mut ServerGuard, hops: usize) -> Vec<Mock> {
        let mut mocks = Vec::new();
        for hop in 0..hops {
            let mock = server
                .mock("GET", format!("/hop/{hop}").as_str())
                .with_status(302)
                .with_header("location", &format!("/hop/{}", hop + 1))
                .create_async()
                .await;
            mocks.push(mock);
        }
        let last = server
            .mock("GET", format!("/hop/{hops}").as_str())
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;
        mocks.push(last);
        mocks
    }

    async fn follow(hops: usize) -> ZoomResult<Value> {
        let mut server = Server::new_async().await;
        let _mocks = redirect_chain(&mut server, hops).await;
        let client = build_http_client()?;
        send_json(client.get(format!("{}/hop/0", server.url()))).await
    }

    #[test]
    fn decodes_json_bodies() {
        assert_eq!(
            decode_body(r#"{"access_token":"X","expires_in":3600}"#),
            json!({"access_token": "X", "expires_in": 3600})
        );
    }

    #[test]
    fn undecodable_body_becomes_null() {
        assert_eq!(decode_body(""), Value::Null);
        assert_eq!(decode_body("<html>bad gateway</html>"), Value::Null);
    }

    #[test]
    fn transport_limits_match_zoom_integration() {
        assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(30));
        assert_eq!(MAX_REDIRECTS, 10);
    }

    #[tokio::test]
    async fn follows_up_to_max_redirects() {
        let body = follow(MAX_REDIRECTS).await.expect("10 redirects should be followed");
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn one_redirect_too_many_is_a_transport_error() {
        let err = follow(MAX_REDIRECTS + 1).await.unwrap_err();
        assert!(matches!(err, ZoomError::Transport(ref e) if e.is_redirect()));
    }

    #[tokio::test]
    async fn stalled_body_hits_the_timeout() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/slow")
            .with_chunked_body(|writer| {
                writer.write_all(br#"{"ok":"#)?;
                std::thread::sleep(Duration::from_secs(1));
                writer.write_all(b"true}")
            })
            .create_async()
            .await;

        let client = http_client_with_timeout(Duration::from_millis(100))
            .expect("client should build");
        let started = Instant::now();
        let err = send_json(client.get(format!("{}/slow", server.url())))
            .await
            .unwrap_err();

        assert!(matches!(err, ZoomError::Transport(_)));
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
