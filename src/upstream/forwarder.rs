//! Outbound requests to the posts API.

use axum::body::Bytes;
use axum::http::{header, Method, StatusCode};
use reqwest::Client;

use crate::config::UpstreamConfig;
use crate::http::response::GatewayError;

/// What came back from upstream, buffered.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Issues one upstream call per inbound posts request.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: Client,
    base_url: String,
}

impl Forwarder {
    /// Create a forwarder with a default client.
    pub fn new(config: &UpstreamConfig) -> Self {
        Self::with_client(Client::new(), &config.base_url)
    }

    /// Create a forwarder around an existing client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `<base>/posts`
    pub fn collection_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    /// `<base>/posts/<id>`, with `id` inserted as given. Percent-encoded
    /// ids stay encoded.
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    /// GET /posts
    pub async fn list(&self) -> Result<UpstreamReply, GatewayError> {
        self.send(Method::GET, self.collection_url(), None).await
    }

    /// POST /posts
    pub async fn create(&self, body: Bytes) -> Result<UpstreamReply, GatewayError> {
        self.send(Method::POST, self.collection_url(), Some(body)).await
    }

    /// GET /posts/{id}
    pub async fn get(&self, id: &str) -> Result<UpstreamReply, GatewayError> {
        self.send(Method::GET, self.item_url(id), None).await
    }

    /// PUT /posts/{id}
    pub async fn update(&self, id: &str, body: Bytes) -> Result<UpstreamReply, GatewayError> {
        self.send(Method::PUT, self.item_url(id), Some(body)).await
    }

    /// DELETE /posts/{id}
    pub async fn delete(&self, id: &str) -> Result<UpstreamReply, GatewayError> {
        self.send(Method::DELETE, self.item_url(id), None).await
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<Bytes>,
    ) -> Result<UpstreamReply, GatewayError> {
        tracing::debug!(method = %method, url = %url, "Forwarding request");

        let mut request = self.client.request(method.clone(), url.as_str());
        if method != Method::GET {
            request = request.header(header::CONTENT_TYPE, "application/json");
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(GatewayError::Request)?;
        let status = response.status();
        let body = response.bytes().await.map_err(GatewayError::Body)?;

        tracing::debug!(method = %method, url = %url, status = %status, bytes = body.len(), "Upstream replied");

        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_posts() {
        let fwd = Forwarder::with_client(Client::new(), "https://api.example.com");
        assert_eq!(fwd.collection_url(), "https://api.example.com/posts");
        assert_eq!(fwd.item_url("42"), "https://api.example.com/posts/42");
    }

    #[test]
    fn trailing_slash_on_base_is_stripped() {
        let fwd = Forwarder::with_client(Client::new(), "http://localhost:9000/");
        assert_eq!(fwd.collection_url(), "http://localhost:9000/posts");
    }

    #[test]
    fn item_id_is_not_validated() {
        let fwd = Forwarder::with_client(Client::new(), "http://localhost:9000");
        assert_eq!(fwd.item_url("not-a-number"), "http://localhost:9000/posts/not-a-number");
    }

    #[test]
    fn encoded_id_stays_one_segment() {
        let fwd = Forwarder::with_client(Client::new(), "http://localhost:9000");
        let url = reqwest::Url::parse(&fwd.item_url("a%2Fb")).unwrap();
        assert_eq!(url.path(), "/posts/a%2Fb");
        assert_eq!(url.query(), None);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_request_error() {
        // Nothing listens on loopback port 1.
        let fwd = Forwarder::with_client(Client::new(), "http://127.0.0.1:1");
        let err = fwd.list().await.unwrap_err();
        assert!(matches!(err, GatewayError::Request(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn short_upstream_body_is_a_body_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nhello")
                .await;
            let _ = socket.shutdown().await;
        });

        let fwd = Forwarder::with_client(Client::new(), &format!("http://{addr}"));
        let err = fwd.get("1").await.unwrap_err();
        assert!(matches!(err, GatewayError::Body(_)), "{err:?}");
    }
}
