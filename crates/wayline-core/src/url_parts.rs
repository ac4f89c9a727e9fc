//! URL assembly for reverse routing.

use core::fmt;

use serde::Serialize;
use url::Url;

/// A URL being assembled during reverse routing.
///
/// Component matchers write into this one dimension at a time. The
/// canonical string form is `[scheme:][//host][path]`, so a route with no
/// scheme or host matcher generates a bare absolute path, and one with a
/// host but no scheme generates a protocol-relative URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    scheme: String,
    host: String,
    path: String,
}

impl UrlParts {
    /// Empty parts; every field starts blank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The scheme written so far, or `""`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host written so far, or `""`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The path written so far, or `""`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Set the scheme.
    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = scheme.into();
    }

    /// Set the host.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    /// Set the path.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    /// True when nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty() && self.host.is_empty() && self.path.is_empty()
    }

    /// Convert to a parsed [`url::Url`].
    ///
    /// Only absolute forms convert; a value without a scheme renders via
    /// `Display` but has no `Url` representation and errors here.
    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.to_string())
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if !self.host.is_empty() {
            write!(f, "//{}", self.host)?;
        }
        f.write_str(&self.path)
    }
}
