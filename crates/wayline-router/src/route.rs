//! Route definition, matching, and URL generation.

use wayline_core::{Method, Request, UrlParts};

use crate::component::{HostMatcher, MethodMatcher, PathMatcher, RequestMatcher, SchemeMatcher};
use crate::error::{BuildError, GenerateError};
use crate::pattern;
use crate::token::TokenMatcher;
use crate::vars::{Value, VarMap};

/// A named, ordered composition of request matchers plus an opaque handle.
///
/// Routes are immutable: build one through [`Route::builder`], then match
/// and generate freely, including from several threads at once.
///
/// `H` is whatever the embedding application attaches to the route — a
/// handler function, an index, an enum. It is never interpreted here,
/// only handed back by reference on a successful match.
#[derive(Debug, Clone)]
pub struct Route<H = ()> {
    matchers: Vec<RequestMatcher>,
    name: Option<String>,
    handle: Option<H>,
}

impl<H> Route<H> {
    /// Start a route definition.
    #[must_use]
    pub fn builder() -> RouteBuilder<H> {
        RouteBuilder::new()
    }

    /// The route's name, if one was set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The attached handle, if one was set.
    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// The component matchers, in registration order.
    #[must_use]
    pub fn matchers(&self) -> &[RequestMatcher] {
        &self.matchers
    }

    /// Match a request against every component matcher in order.
    ///
    /// The first failing matcher ends the attempt with `None`; no partial
    /// variables escape. On success the extracted variables of all
    /// matchers merge, last write winning on a shared name.
    #[must_use]
    pub fn match_request(&self, request: &Request) -> Option<MatchResult<'_, H>> {
        let mut vars = VarMap::new();
        for matcher in &self.matchers {
            vars.merge(matcher.matches(request)?);
        }
        Some(MatchResult {
            vars,
            handle: self.handle.as_ref(),
        })
    }

    /// Generate a URL by running every component matcher backwards, in
    /// the same order matching runs forwards.
    ///
    /// The first generation error aborts and is returned unchanged.
    pub fn url(&self, vars: &VarMap) -> Result<UrlParts, GenerateError> {
        let mut url = UrlParts::new();
        for matcher in &self.matchers {
            matcher.generate(&mut url, vars)?;
        }
        Ok(url)
    }
}

/// Result of a successful match: the extracted variables plus the matched
/// route's handle.
#[derive(Debug)]
pub struct MatchResult<'a, H> {
    vars: VarMap,
    handle: Option<&'a H>,
}

impl<'a, H> MatchResult<'a, H> {
    /// All extracted variables.
    #[must_use]
    pub fn vars(&self) -> &VarMap {
        &self.vars
    }

    /// One extracted variable, by matcher name.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// The matched route's handle.
    #[must_use]
    pub fn handle(&self) -> Option<&'a H> {
        self.handle
    }

    /// Consume the result, keeping the variables.
    #[must_use]
    pub fn into_vars(self) -> VarMap {
        self.vars
    }
}

/// Chained route definition.
///
/// Every matcher call appends: calling [`path`](Self::path) twice gives a
/// route with two path matchers, both of which must match. Construction
/// errors from pattern parsing are deferred and returned by
/// [`build`](Self::build), so the chain itself stays infallible.
#[derive(Debug)]
pub struct RouteBuilder<H = ()> {
    matchers: Vec<RequestMatcher>,
    name: Option<String>,
    handle: Option<H>,
    error: Option<BuildError>,
}

impl<H> Default for RouteBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteBuilder<H> {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
            name: None,
            handle: None,
            error: None,
        }
    }

    /// Append a path matcher over the given segments.
    ///
    /// Plain strings become literal segments; typed matchers pass
    /// through. Mixed lists are spelled as `Vec<TokenMatcher>`:
    ///
    /// ```
    /// use wayline_router::{IntegerMatcher, Route, TokenMatcher};
    ///
    /// let segments: Vec<TokenMatcher> = vec![
    ///     "users".into(),
    ///     IntegerMatcher::new().named("id").into(),
    /// ];
    /// let route: Route = Route::builder().path(segments).build()?;
    /// # Ok::<(), wayline_router::BuildError>(())
    /// ```
    #[must_use]
    pub fn path(mut self, segments: impl IntoIterator<Item = impl Into<TokenMatcher>>) -> Self {
        self.matchers
            .push(RequestMatcher::Path(PathMatcher::new(segments)));
        self
    }

    /// Append a path matcher parsed from a pattern string.
    ///
    /// A pattern is `/`-separated; each segment is a literal or a
    /// `{name}` / `{name:converter}` parameter:
    ///
    /// | converter | matches |
    /// |---|---|
    /// | none, or `str` | any segment, captured verbatim |
    /// | `int` | a base-10 `i32` |
    /// | `hex` | a base-16 `i32` |
    ///
    /// Bad patterns surface as a [`BuildError`] from
    /// [`build`](Self::build).
    #[must_use]
    pub fn path_pattern(mut self, pattern: &str) -> Self {
        match pattern::parse_path_pattern(pattern) {
            Ok(segments) => self
                .matchers
                .push(RequestMatcher::Path(PathMatcher::new(segments))),
            Err(error) => self.record(error),
        }
        self
    }

    /// Append a host matcher over the given labels.
    #[must_use]
    pub fn host(mut self, labels: impl IntoIterator<Item = impl Into<TokenMatcher>>) -> Self {
        self.matchers
            .push(RequestMatcher::Host(HostMatcher::new(labels)));
        self
    }

    /// Append a host matcher parsed from a pattern string, e.g.
    /// `"{tenant}.example.com"`. Same converter table as
    /// [`path_pattern`](Self::path_pattern).
    #[must_use]
    pub fn host_pattern(mut self, pattern: &str) -> Self {
        match pattern::parse_host_pattern(pattern) {
            Ok(labels) => self
                .matchers
                .push(RequestMatcher::Host(HostMatcher::new(labels))),
            Err(error) => self.record(error),
        }
        self
    }

    /// Append a method matcher.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.matchers
            .push(RequestMatcher::Method(MethodMatcher::new(method)));
        self
    }

    /// Append a scheme matcher.
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.matchers
            .push(RequestMatcher::Scheme(SchemeMatcher::new(scheme)));
        self
    }

    /// Append a pre-built component matcher.
    ///
    /// The escape hatch for configurations the shorthand methods don't
    /// reach, such as [`PathMatcher::exact_length`].
    #[must_use]
    pub fn matcher(mut self, matcher: impl Into<RequestMatcher>) -> Self {
        self.matchers.push(matcher.into());
        self
    }

    /// Set the route name used for reverse lookup.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the opaque application handle.
    #[must_use]
    pub fn handle(mut self, handle: H) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Finish the definition.
    ///
    /// Returns the first construction error recorded by any earlier
    /// call; otherwise the route is immutable from here on.
    pub fn build(self) -> Result<Route<H>, BuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(Route {
            matchers: self.matchers,
            name: self.name,
            handle: self.handle,
        })
    }

    fn record(&mut self, error: BuildError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
