//! Matchers over one structural dimension of a request.
//!
//! Each variant owns both directions for its dimension: examining the
//! inbound request and writing the generated URL. Path and host walk an
//! ordered token matcher list positionally; method and scheme hold a
//! single expected value.

use wayline_core::{Method, Request, UrlParts};

use crate::error::{BuildError, GenerateError};
use crate::pattern;
use crate::token::TokenMatcher;
use crate::vars::VarMap;

/// Matches the request path against an ordered segment list.
///
/// The request path is split on `/` after trimming at most one leading
/// and one trailing slash. Matching walks the shorter of the two lengths,
/// so by default a route matches any request that begins with its
/// segments (and a matcher longer than the request matches on the
/// overlap); [`PathMatcher::exact_length`] opts into requiring the
/// lengths to agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    segments: Vec<TokenMatcher>,
    exact_length: bool,
}

impl PathMatcher {
    /// Path matcher over the given segment matchers.
    #[must_use]
    pub fn new(segments: impl IntoIterator<Item = impl Into<TokenMatcher>>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            exact_length: false,
        }
    }

    /// Path matcher parsed from a pattern string.
    ///
    /// See [`RouteBuilder::path_pattern`](crate::RouteBuilder::path_pattern)
    /// for the pattern syntax.
    pub fn from_pattern(pattern: &str) -> Result<Self, BuildError> {
        Ok(Self::new(pattern::parse_path_pattern(pattern)?))
    }

    /// Require the request to have exactly as many segments as this
    /// matcher, instead of the default prefix matching.
    #[must_use]
    pub fn exact_length(mut self, exact: bool) -> Self {
        self.exact_length = exact;
        self
    }

    /// The segment matchers, in positional order.
    #[must_use]
    pub fn segments(&self) -> &[TokenMatcher] {
        &self.segments
    }

    /// Match a request path.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<VarMap> {
        let tokens: Vec<&str> = split_path(path).collect();
        walk(&self.segments, &tokens, self.exact_length)
    }

    /// Write the generated path, `/`-joined with a leading slash.
    pub fn generate(&self, url: &mut UrlParts, vars: &VarMap) -> Result<(), GenerateError> {
        let rendered = render(&self.segments, vars)?;
        url.set_path(format!("/{}", rendered.join("/")));
        Ok(())
    }
}

/// Matches the request host against an ordered label list.
///
/// Labels are the dot-separated pieces of the host name. Matching and
/// generation mirror [`PathMatcher`], with `.` as the separator and no
/// leading separator in the generated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMatcher {
    labels: Vec<TokenMatcher>,
    exact_length: bool,
}

impl HostMatcher {
    /// Host matcher over the given label matchers.
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = impl Into<TokenMatcher>>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            exact_length: false,
        }
    }

    /// Host matcher parsed from a pattern string, e.g.
    /// `"{tenant}.example.com"`.
    pub fn from_pattern(pattern: &str) -> Result<Self, BuildError> {
        Ok(Self::new(pattern::parse_host_pattern(pattern)?))
    }

    /// Require the host to have exactly as many labels as this matcher.
    #[must_use]
    pub fn exact_length(mut self, exact: bool) -> Self {
        self.exact_length = exact;
        self
    }

    /// The label matchers, in positional order.
    #[must_use]
    pub fn labels(&self) -> &[TokenMatcher] {
        &self.labels
    }

    /// Match a request host.
    #[must_use]
    pub fn matches(&self, host: &str) -> Option<VarMap> {
        let tokens: Vec<&str> = host.split('.').collect();
        walk(&self.labels, &tokens, self.exact_length)
    }

    /// Write the generated host, `.`-joined.
    pub fn generate(&self, url: &mut UrlParts, vars: &VarMap) -> Result<(), GenerateError> {
        let rendered = render(&self.labels, vars)?;
        url.set_host(rendered.join("."));
        Ok(())
    }
}

/// Matches the request method.
///
/// Method tokens parse into [`Method`] case-insensitively, so matching is
/// plain equality. Methods are not part of a URL; this matcher
/// contributes nothing to generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodMatcher {
    method: Method,
}

impl MethodMatcher {
    /// Matcher for one method.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self { method }
    }

    /// The expected method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Match a request method.
    #[must_use]
    pub fn matches(&self, method: Method) -> Option<VarMap> {
        (method == self.method).then(VarMap::new)
    }
}

/// Matches the request URL scheme exactly, and writes it back during
/// generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeMatcher {
    scheme: String,
}

impl SchemeMatcher {
    /// Matcher for one scheme, e.g. `"https"`.
    #[must_use]
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }

    /// The expected scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Match a request scheme.
    #[must_use]
    pub fn matches(&self, scheme: &str) -> Option<VarMap> {
        (scheme == self.scheme).then(VarMap::new)
    }

    /// Write the scheme into the URL under construction.
    pub fn generate(&self, url: &mut UrlParts) {
        url.set_scheme(self.scheme.clone());
    }
}

/// A matcher over one request dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMatcher {
    /// Path segments.
    Path(PathMatcher),
    /// Host labels.
    Host(HostMatcher),
    /// HTTP method.
    Method(MethodMatcher),
    /// URL scheme.
    Scheme(SchemeMatcher),
}

impl RequestMatcher {
    /// Match this matcher's dimension of the request.
    ///
    /// `None` is a normal match failure; `Some` carries whatever
    /// variables the dimension extracted (empty for method and scheme).
    #[must_use]
    pub fn matches(&self, request: &Request) -> Option<VarMap> {
        match self {
            Self::Path(matcher) => matcher.matches(request.path()),
            Self::Host(matcher) => matcher.matches(request.host()),
            Self::Method(matcher) => matcher.matches(request.method()),
            Self::Scheme(matcher) => matcher.matches(request.scheme()),
        }
    }

    /// Write this matcher's dimension into the URL under construction.
    pub fn generate(&self, url: &mut UrlParts, vars: &VarMap) -> Result<(), GenerateError> {
        match self {
            Self::Path(matcher) => matcher.generate(url, vars),
            Self::Host(matcher) => matcher.generate(url, vars),
            Self::Method(_) => Ok(()),
            Self::Scheme(matcher) => {
                matcher.generate(url);
                Ok(())
            }
        }
    }
}

impl From<PathMatcher> for RequestMatcher {
    fn from(matcher: PathMatcher) -> Self {
        Self::Path(matcher)
    }
}

impl From<HostMatcher> for RequestMatcher {
    fn from(matcher: HostMatcher) -> Self {
        Self::Host(matcher)
    }
}

impl From<MethodMatcher> for RequestMatcher {
    fn from(matcher: MethodMatcher) -> Self {
        Self::Method(matcher)
    }
}

impl From<SchemeMatcher> for RequestMatcher {
    fn from(matcher: SchemeMatcher) -> Self {
        Self::Scheme(matcher)
    }
}

/// Trim at most one leading and one trailing slash, then split on `/`.
fn split_path(path: &str) -> std::str::Split<'_, char> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    path.split('/')
}

/// Positional walk shared by path and host matching.
///
/// Walks the shorter of the two lists; a failure at any position fails
/// the whole walk. Values from named matchers land in the returned map.
fn walk(matchers: &[TokenMatcher], tokens: &[&str], exact_length: bool) -> Option<VarMap> {
    if exact_length && matchers.len() != tokens.len() {
        return None;
    }
    let mut vars = VarMap::new();
    for (matcher, token) in matchers.iter().zip(tokens) {
        let value = matcher.matches(token)?;
        if let Some(name) = matcher.name() {
            vars.insert(name, value);
        }
    }
    Some(vars)
}

/// Render every token matcher for generation, in positional order.
fn render(matchers: &[TokenMatcher], vars: &VarMap) -> Result<Vec<String>, GenerateError> {
    matchers.iter().map(|matcher| matcher.generate(vars)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{IntegerMatcher, TextMatcher};
    use crate::vars::Value;

    #[test]
    fn test_split_trims_at_most_one_slash_per_end() {
        assert_eq!(split_path("/abc/def").collect::<Vec<_>>(), ["abc", "def"]);
        assert_eq!(split_path("abc/def/").collect::<Vec<_>>(), ["abc", "def"]);
        assert_eq!(split_path("//abc/").collect::<Vec<_>>(), ["", "abc"]);
        assert_eq!(split_path("/").collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn test_path_matches_a_prefix_by_default() {
        let matcher = PathMatcher::new(["api", "v1"]);
        assert!(matcher.matches("/api/v1").is_some());
        assert!(matcher.matches("/api/v1/users/7").is_some());
        assert!(matcher.matches("/api/v2").is_none());

        // More matchers than segments still matches on the overlap.
        assert!(matcher.matches("/api").is_some());
    }

    #[test]
    fn test_path_exact_length_requires_equal_counts() {
        let matcher = PathMatcher::new(["api", "v1"]).exact_length(true);
        assert!(matcher.matches("/api/v1").is_some());
        assert!(matcher.matches("/api/v1/users").is_none());
        assert!(matcher.matches("/api").is_none());
    }

    #[test]
    fn test_path_extracts_named_values() {
        let matcher = PathMatcher::new([
            TokenMatcher::from("users"),
            IntegerMatcher::new().named("id").into(),
        ]);
        let vars = matcher.matches("/users/42").unwrap();
        assert_eq!(vars.get("id"), Some(&Value::Int(42)));
    }

    #[test]
    fn test_path_generation_joins_with_slashes() {
        let matcher = PathMatcher::new(["abc", "def"]);
        let mut url = UrlParts::new();
        matcher.generate(&mut url, &VarMap::new()).unwrap();
        assert_eq!(url.path(), "/abc/def");
    }

    #[test]
    fn test_host_walks_labels() {
        let matcher = HostMatcher::new([
            TokenMatcher::from(TextMatcher::new().named("tenant")),
            "example".into(),
            "com".into(),
        ]);
        let vars = matcher.matches("acme.example.com").unwrap();
        assert_eq!(vars.get("tenant"), Some(&Value::Str("acme".to_string())));
        assert!(matcher.matches("acme.example.org").is_none());
    }

    #[test]
    fn test_host_shorter_than_matcher_still_matches_the_overlap() {
        let matcher = HostMatcher::new(["example", "com"]);
        assert!(matcher.matches("example").is_some());
        assert!(matcher.matches("example.com").is_some());
        assert!(
            matcher
                .clone()
                .exact_length(true)
                .matches("example")
                .is_none()
        );
    }

    #[test]
    fn test_host_generation_joins_with_dots() {
        let matcher = HostMatcher::new(["api", "example", "com"]);
        let mut url = UrlParts::new();
        matcher.generate(&mut url, &VarMap::new()).unwrap();
        assert_eq!(url.host(), "api.example.com");
    }

    #[test]
    fn test_method_and_scheme_match_single_values() {
        let method = MethodMatcher::new(Method::Post);
        assert!(method.matches(Method::Post).is_some());
        assert!(method.matches(Method::Get).is_none());

        let scheme = SchemeMatcher::new("https");
        assert!(scheme.matches("https").is_some());
        assert!(scheme.matches("http").is_none());
    }

    #[test]
    fn test_scheme_generation_sets_the_scheme() {
        let mut url = UrlParts::new();
        SchemeMatcher::new("https").generate(&mut url);
        assert_eq!(url.scheme(), "https");
    }
}
