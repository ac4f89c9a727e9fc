//! Inbound request view consumed by the router.

use thiserror::Error;
use url::Url;

use crate::Method;

/// Read-only view of an inbound request.
///
/// The router looks at four dimensions: method, scheme, host, and path.
/// [`Request::new`] covers the common case of an absolute URL string;
/// embedding applications that already hold the pieces adapt their own
/// request type via [`Request::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    scheme: String,
    host: String,
    path: String,
}

/// A request URL string that did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid request URL: {0}")]
pub struct ParseRequestError(#[from] url::ParseError);

impl Request {
    /// Build a request from a method and an absolute URL string.
    ///
    /// The host is stored without any port, so host matchers always see
    /// bare dot-separated labels.
    pub fn new(method: Method, url: &str) -> Result<Self, ParseRequestError> {
        let parsed = Url::parse(url)?;
        Ok(Self {
            method,
            scheme: parsed.scheme().to_string(),
            host: parsed.host_str().unwrap_or_default().to_string(),
            path: parsed.path().to_string(),
        })
    }

    /// Build a request from pre-split components.
    #[must_use]
    pub fn from_parts(
        method: Method,
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            method,
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
        }
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// The URL scheme, e.g. `"https"`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host name, without port.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The request path, with its leading slash.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}
