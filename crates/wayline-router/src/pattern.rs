//! Pattern-string route definitions.
//!
//! Patterns are the compact spelling of a token matcher list:
//! `/users/{id:int}/posts/{slug}` names two literals, a base-10 integer
//! parameter, and a text parameter. See
//! [`RouteBuilder::path_pattern`](crate::RouteBuilder::path_pattern) for
//! the converter table.

use crate::error::BuildError;
use crate::token::{IntegerMatcher, TextMatcher, TokenMatcher};

/// Parse a path pattern into its segment matchers.
///
/// The pattern splits like a request path: at most one leading and one
/// trailing `/` are trimmed, the remainder splits on `/`. `"/"` therefore
/// parses to a single empty literal, which matches only the root path.
pub(crate) fn parse_path_pattern(pattern: &str) -> Result<Vec<TokenMatcher>, BuildError> {
    let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    trimmed.split('/').map(parse_segment).collect()
}

/// Parse a host pattern into its label matchers.
pub(crate) fn parse_host_pattern(pattern: &str) -> Result<Vec<TokenMatcher>, BuildError> {
    pattern.split('.').map(parse_segment).collect()
}

fn parse_segment(segment: &str) -> Result<TokenMatcher, BuildError> {
    let Some(inner) = segment.strip_prefix('{') else {
        if segment.contains('{') || segment.contains('}') {
            return Err(BuildError::UnbalancedBraces(segment.to_string()));
        }
        return Ok(TokenMatcher::from(segment));
    };
    let Some(param) = inner.strip_suffix('}') else {
        return Err(BuildError::UnbalancedBraces(segment.to_string()));
    };
    if param.contains('{') || param.contains('}') {
        return Err(BuildError::UnbalancedBraces(segment.to_string()));
    }
    let (name, converter) = param.split_once(':').unwrap_or((param, "str"));
    if name.is_empty() {
        return Err(BuildError::EmptyParamName(segment.to_string()));
    }
    match converter {
        "str" => Ok(TextMatcher::new().named(name).into()),
        "int" => Ok(IntegerMatcher::new().named(name).into()),
        "hex" => Ok(IntegerMatcher::with_radix(16)?.named(name).into()),
        other => Err(BuildError::UnknownConverter {
            name: name.to_string(),
            converter: other.to_string(),
        }),
    }
}
