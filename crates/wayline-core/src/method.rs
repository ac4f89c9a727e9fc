//! HTTP method type.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP request method.
///
/// Method tokens parse case-insensitively, so `"post"` and `"POST"` name
/// the same variant; from there on comparisons are plain enum equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Trace,
}

impl Method {
    /// Parse a method token, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("get") {
            Some(Self::Get)
        } else if s.eq_ignore_ascii_case("head") {
            Some(Self::Head)
        } else if s.eq_ignore_ascii_case("post") {
            Some(Self::Post)
        } else if s.eq_ignore_ascii_case("put") {
            Some(Self::Put)
        } else if s.eq_ignore_ascii_case("delete") {
            Some(Self::Delete)
        } else if s.eq_ignore_ascii_case("patch") {
            Some(Self::Patch)
        } else if s.eq_ignore_ascii_case("options") {
            Some(Self::Options)
        } else if s.eq_ignore_ascii_case("trace") {
            Some(Self::Trace)
        } else {
            None
        }
    }

    /// The canonical upper-case token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A method token no [`Method`] variant recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized HTTP method `{0}`")]
pub struct InvalidMethod(pub String);

impl FromStr for Method {
    type Err = InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidMethod(s.to_string()))
    }
}
