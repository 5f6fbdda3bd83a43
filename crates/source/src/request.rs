use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

/// An outbound `GET` request, ready for a [`Transport`](crate::Transport).
///
/// Query keys are sent verbatim (the API uses bracketed array keys such as
/// `includes[]`); values are percent-encoded by [`to_url`](Self::to_url).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// API base URL without a trailing slash
    pub base_url: String,
    /// Path beginning with `/`, e.g. `/manga/{id}`
    pub path: String,
    /// Query pairs in the order they are sent; keys may repeat
    pub query: Vec<(String, String)>,
    /// Advisory per-request timeout
    pub timeout: Duration,
    /// Advisory ceiling on outbound requests per second
    pub requests_per_second: u32,
}
impl Request {
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            query: Vec::new(),
            timeout: Duration::from_secs(20),
            requests_per_second: 4,
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn params<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query.extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_limits(mut self, timeout: Duration, requests_per_second: u32) -> Self {
        self.timeout = timeout;
        self.requests_per_second = requests_per_second;
        self
    }

    /// Values of every query pair with the given key, in order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.query.iter().filter(move |(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// The full URL, including the encoded query string.
    pub fn to_url(&self) -> String {
        let mut url = format!("{}{}", self.base_url, self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}
impl Display for Request {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "GET {}", self.to_url())
    }
}
