//! In-memory transport for testing.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Transport;
use crate::Request;
use crate::error::{ErrorKind, Result};

/// In-memory transport for testing.
///
/// Responses are canned bodies keyed by request path (the query string is
/// ignored), and every request received is recorded so tests can assert on
/// what the source sent.
///
/// # Examples
///
/// Requires the `mock` feature.
///
/// ```ignore
/// use mdx_source::{MockTransport, Request, Transport};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = MockTransport::with_responses([
///     ("/at-home/server/c-1", r#"{"baseUrl": "https://cdn", "chapter": {"hash": "h", "data": []}}"#),
/// ]);
/// let body = transport.get(&Request::new("https://api", "/at-home/server/c-1")).await?;
/// assert!(!body.is_empty());
/// assert_eq!(transport.requests().await.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct MockTransport {
    responses: RwLock<HashMap<String, Vec<u8>>>,
    requests: RwLock<Vec<Request>>,
}

impl MockTransport {
    /// Create a mock transport pre-populated with responses.
    pub fn with_responses(responses: impl IntoIterator<Item = (impl Into<String>, impl Into<Vec<u8>>)>) -> Self {
        let responses = responses.into_iter().map(|(path, body)| (path.into(), body.into())).collect();
        Self {
            responses: RwLock::new(responses),
            requests: RwLock::default(),
        }
    }

    /// Add (or replace) the response for a path.
    pub async fn respond(&self, path: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.responses.write().await.insert(path.into(), body.into());
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<Request> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn get(&self, request: &Request) -> Result<Vec<u8>> {
        self.requests.write().await.push(request.clone());
        match self.responses.read().await.get(&request.path) {
            Some(body) => Ok(body.clone()),
            None => exn::bail!(ErrorKind::NotFound(request.path.clone())),
        }
    }
}
