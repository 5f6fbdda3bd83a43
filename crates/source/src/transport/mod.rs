//! The seam between the source and whatever performs HTTP for the host.
//!
//! The source never talks to the network itself. Hosts implement
//! [`Transport`] on top of their own HTTP stack, scheduler and rate limiter;
//! the source only builds [`Request`]s and interprets the bodies that come
//! back.

#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(any(test, feature = "mock"))]
pub use self::mock::MockTransport;
use crate::Request;
use crate::error::Result;
use async_trait::async_trait;

/// Performs `GET` requests on behalf of the source.
///
/// Implementations should honour [`Request::timeout`] and
/// [`Request::requests_per_second`], and should report failures using the
/// source's [`ErrorKind`](crate::error::ErrorKind):
/// - `NotFound` when the API answers 404,
/// - `Transport` for everything that might succeed on retry.
///
/// # Examples
///
/// ```
/// use mdx_source::{Request, Transport, error::Result};
///
/// async fn fetch_text(transport: &dyn Transport, request: &Request) -> Result<String> {
///     let body = transport.get(request).await?;
///     Ok(String::from_utf8_lossy(&body).into_owned())
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Name of the transport, used for logging only.
    fn name(&self) -> &str;

    /// Performs the request and returns the raw response body.
    async fn get(&self, request: &Request) -> Result<Vec<u8>>;
}
