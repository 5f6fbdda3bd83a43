//! Host-facing MangaDex source.
//!
//! Builds API requests, hands them to a host-provided [`Transport`], and
//! normalizes the responses with [`mdx_normalize`]. HTTP, scheduling and rate
//! limiting all live behind the transport.

pub mod endpoints;
pub mod error;
mod request;
mod source;
pub mod transport;

use std::sync::Arc;

pub use crate::request::Request;
pub use crate::source::{Source, StoreHandle};
#[cfg(any(test, feature = "mock"))]
pub use crate::transport::MockTransport;
pub use crate::transport::Transport;

pub type TransportHandle = Arc<dyn Transport + Send + Sync>;
