//! Ordered route collections.

use std::sync::Arc;

use tracing::{debug, trace};
use wayline_core::{Request, UrlParts};

use crate::error::GenerateError;
use crate::route::{MatchResult, Route};
use crate::vars::VarMap;

/// An ordered collection of routes; the first match wins.
///
/// Routes are held behind [`Arc`], so one route can belong to several
/// sets, and cloning a set shares its routes rather than copying them.
/// Registration order is the only precedence there is.
#[derive(Debug)]
pub struct RouteSet<H = ()> {
    routes: Vec<Arc<Route<H>>>,
}

impl<H> Default for RouteSet<H> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<H> Clone for RouteSet<H> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<H> RouteSet<H> {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route.
    ///
    /// Accepts an owned [`Route`] or an [`Arc`] already shared with
    /// another set. Later routes only match when every earlier route
    /// declined.
    pub fn add(&mut self, route: impl Into<Arc<Route<H>>>) {
        self.routes.push(route.into());
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over the routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Route<H>>> {
        self.routes.iter()
    }

    /// Match a request against the routes in registration order and
    /// return the first success.
    #[must_use]
    pub fn match_request(&self, request: &Request) -> Option<MatchResult<'_, H>> {
        for route in &self.routes {
            let name = route.name().unwrap_or("<unnamed>");
            trace!(route = name, path = request.path(), "trying route");
            if let Some(result) = route.match_request(request) {
                debug!(route = name, "route matched");
                return Some(result);
            }
        }
        None
    }

    /// The first route registered under `name`.
    ///
    /// Name uniqueness is not enforced; duplicates after the first are
    /// unreachable by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Arc<Route<H>>> {
        self.routes.iter().find(|route| route.name() == Some(name))
    }

    /// Generate a URL from the named route and the supplied variables.
    pub fn url(&self, name: &str, vars: &VarMap) -> Result<UrlParts, GenerateError> {
        let route = self
            .find(name)
            .ok_or_else(|| GenerateError::RouteNotFound(name.to_string()))?;
        route.url(vars)
    }
}
