//! HTTP implementation of the directory source
//!
//! One `GET` against a fixed endpoint, expected to answer with
//! `{ "data": { "users": [...] } }`. Unified processing: send the request,
//! log, classify the failure. A non-success status is reported without
//! reading the body; a success body that fails to parse is logged in full
//! (truncated) and reported as a parse failure.

use async_trait::async_trait;

use crate::error::{DirectoryError, DirectoryResult};
use crate::traits::UserSource;
use crate::types::{User, UsersEnvelope};

/// Default directory endpoint, overridable via [`ENDPOINT_ENV_VAR`].
pub const DEFAULT_ENDPOINT: &str =
    "https://9e06da9a-97cf-4701-adfc-9b9a5713bbb9.mock.pstmn.io/users";

/// Environment variable consulted by [`HttpUserSource::from_env`].
pub const ENDPOINT_ENV_VAR: &str = "USER_DIRECTORY_ENDPOINT";

/// Maximum number of bytes of a response body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// [`UserSource`] backed by `reqwest` against the configured endpoint.
pub struct HttpUserSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUserSource {
    /// Create a source for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a source for the configured endpoint: the
    /// `USER_DIRECTORY_ENDPOINT` environment variable when set, the
    /// compiled-in default otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// The endpoint URL this source talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> DirectoryResult<Vec<User>> {
        log::debug!("[directory] GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let status = response.status();
        log::debug!("[directory] Response status: {status}");

        // A failure status is classified without consulting the body.
        if !status.is_success() {
            log::warn!("[directory] Fetch failed: HTTP {status}");
            return Err(DirectoryError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            DirectoryError::Network(format!("Failed to read response body: {e}"))
        })?;

        let envelope: UsersEnvelope = serde_json::from_str(&body).map_err(|e| {
            log::error!("[directory] JSON parse failed: {e}");
            log::error!("[directory] Raw response: {}", truncate_for_log(&body));
            DirectoryError::Parse(e.to_string())
        })?;

        log::debug!(
            "[directory] Loaded {} user(s)",
            envelope.data.users.len()
        );
        Ok(envelope.data.users)
    }
}

/// Best-effort probe of an avatar resource.
///
/// Returns `true` only for a reachable resource answering 2xx. Every
/// failure mode collapses to `false`: the caller's only recourse is to
/// substitute the placeholder, so the distinction carries no information.
pub async fn avatar_reachable(url: &str) -> bool {
    match reqwest::get(url).await {
        Ok(response) => response.status().is_success(),
        Err(e) => {
            log::debug!("[directory] Avatar probe failed for {url}: {e}");
            false
        }
    }
}

/// Truncate a response body for safe logging.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a loopback socket and
    /// return the endpoint URL pointing at it.
    async fn serve_once(status_line: &str, body: &str) -> String {
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/users")
    }

    fn john_doe_body() -> &'static str {
        r#"{"data":{"users":[{"id":"1","username":"jdoe","firstname":"John","lastname":"Doe","email":"jdoe@example.com","avatar":"https://robohash.org/jdoe.png","role":"Engineer","join_date":"01/01/2023","description":"A skilled engineer."}]}}"#
    }

    #[tokio::test]
    async fn fetch_users_success() {
        let endpoint = serve_once("200 OK", john_doe_body()).await;
        let users = HttpUserSource::new(endpoint).fetch_users().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].full_name(), "John Doe");
        assert_eq!(users[0].role, "Engineer");
    }

    #[tokio::test]
    async fn failure_status_reported_without_parsing_body() {
        // The body is deliberately not JSON: reaching the parser would fail
        // with Parse, proving the status short-circuits first.
        let endpoint = serve_once("500 Internal Server Error", "<html>boom</html>").await;
        let err = HttpUserSource::new(endpoint)
            .fetch_users()
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::Http { status: 500 }));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let endpoint = serve_once("200 OK", "not json at all").await;
        let err = HttpUserSource::new(endpoint)
            .fetch_users()
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::Parse(_)));
    }

    #[tokio::test]
    async fn missing_users_key_is_parse_error() {
        let endpoint = serve_once("200 OK", r#"{"data":{}}"#).await;
        let err = HttpUserSource::new(endpoint)
            .fetch_users()
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::Parse(_)));
    }

    // ---- truncate_for_log ----

    #[test]
    fn short_body_logged_unchanged() {
        assert_eq!(truncate_for_log("hello"), "hello");
    }

    #[test]
    fn long_body_truncated_with_length() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.ends_with(&format!("[truncated, total {} bytes]", s.len())));
    }
}
