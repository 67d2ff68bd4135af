//! The user directory client: two GETs, nothing else.

use reqwest::Client;
use tracing::debug;
use url::Url;
use userdeck_core::User;

use crate::error::TransportError;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Stateless HTTP client for the `{base}/users` collection.
///
/// Cloning is cheap (the inner `reqwest::Client` is an `Arc` around a
/// connection pool), which lets the event loop hand a copy to each
/// spawned fetch task.
#[derive(Debug, Clone)]
pub struct UserClient {
    base: Url,
    http: Client,
}

impl UserClient {
    /// Build a client against `base` (e.g. `https://jsonplaceholder.typicode.com`).
    pub fn new(base: Url) -> Result<Self, TransportError> {
        let http = Client::builder().user_agent(APP_USER_AGENT).build()?;
        Ok(Self { base, http })
    }

    /// Fetch the full user collection with one GET to `{base}/users`.
    pub async fn fetch_all(&self) -> Result<Vec<User>, TransportError> {
        let url = self.endpoint(&["users"]);
        debug!(%url, "fetching user collection");

        let body = self.get_checked(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch a single user with one GET to `{base}/users/{id}`.
    pub async fn fetch_one(&self, id: u64) -> Result<User, TransportError> {
        let url = self.endpoint(&["users", &id.to_string()]);
        debug!(%url, id, "fetching user detail");

        let body = self.get_checked(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Issue the GET and return the body text, mapping non-2xx to
    /// [`TransportError::Status`].
    async fn get_checked(&self, url: String) -> Result<String, TransportError> {
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { status });
        }

        Ok(response.text().await?)
    }

    /// Join path segments onto the base URL without double slashes.
    fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base.as_str().trim_end_matches('/').to_string();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> UserClient {
        UserClient::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let c = client("https://example.com");
        assert_eq!(c.endpoint(&["users"]), "https://example.com/users");
        assert_eq!(c.endpoint(&["users", "3"]), "https://example.com/users/3");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let c = client("https://example.com/api/");
        assert_eq!(c.endpoint(&["users"]), "https://example.com/api/users");
    }

    /// Answer exactly one HTTP request with a canned response.
    fn serve_once(response: &'static str) -> (std::net::SocketAddr, std::thread::JoinHandle<()>) {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            stream.write_all(response.as_bytes()).unwrap();
        });
        (addr, handle)
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_status_error() {
        let (addr, server) = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        );

        let c = client(&format!("http://{addr}"));
        let err = c.fetch_one(99).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::Status { status } if status == reqwest::StatusCode::NOT_FOUND
        ));

        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_decode_error() {
        let (addr, server) = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 9\r\nconnection: close\r\n\r\nnot json!",
        );

        let c = client(&format!("http://{addr}"));
        let err = c.fetch_all().await.unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));

        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_fetch_all_connection_failure_is_request_error() {
        // Nothing listens on this port; the request must fail before a body.
        let c = client("http://127.0.0.1:1");
        let err = c.fetch_all().await.unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }

    #[tokio::test]
    async fn test_fetch_one_connection_failure_is_request_error() {
        let c = client("http://127.0.0.1:1");
        let err = c.fetch_one(7).await.unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }

    #[test]
    fn test_collection_body_decodes() {
        let body = r#"[
            {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz", "username": "Bret"},
            {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv"}
        ]"#;
        let users: Vec<User> = serde_json::from_str(body).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].extra_str("username"), Some("Bret"));
        assert_eq!(users[1].name, "Ervin Howell");
    }
}
