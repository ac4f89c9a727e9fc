//! Bidirectional URL routing.
//!
//! wayline matches inbound requests (method, scheme, host, path) against
//! registered routes, extracting typed variables, and runs the same route
//! definitions backwards to generate canonical URLs:
//!
//! - **Symmetric by construction** — every matcher owns both directions,
//!   so the route that matches `/articles/17` is also the one that spells
//!   it from `{"id": 17}`.
//! - **First match wins** — a [`RouteSet`] scans in registration order;
//!   precedence is the order you registered, nothing else.
//! - **Opaque handles** — routes carry a caller-chosen handle type,
//!   returned untouched on every match.
//!
//! # Quick Start
//!
//! ```
//! use wayline::prelude::*;
//!
//! let mut routes = RouteSet::new();
//! routes.add(
//!     Route::builder()
//!         .method(Method::Get)
//!         .path_pattern("/articles/{id:int}")
//!         .name("article")
//!         .handle("article-handler")
//!         .build()?,
//! );
//!
//! let request = Request::new(Method::Get, "http://example.com/articles/17")?;
//! let matched = routes.match_request(&request).expect("route matches");
//! assert_eq!(matched.var("id"), Some(&Value::Int(17)));
//! assert_eq!(matched.handle(), Some(&"article-handler"));
//!
//! let vars = VarMap::from_iter([("id", 17)]);
//! assert_eq!(routes.url("article", &vars)?.to_string(), "/articles/17");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`wayline_core`] — request surface types ([`Request`], [`Method`],
//!   [`UrlParts`])
//! - [`wayline_router`] — matchers, routes, and route sets

#![forbid(unsafe_code)]

// Re-export crates
pub use wayline_core as core;
pub use wayline_router as router;

// Re-export commonly used types
pub use wayline_core::{InvalidMethod, Method, ParseRequestError, Request, UrlParts};
pub use wayline_router::{
    BuildError, GenerateError, HostMatcher, IntegerMatcher, LiteralMatcher, MatchResult,
    MethodMatcher, PathMatcher, RequestMatcher, Route, RouteBuilder, RouteSet, SchemeMatcher,
    TextMatcher, TokenMatcher, Value, VarMap,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        IntegerMatcher, LiteralMatcher, Method, Request, Route, RouteSet, TextMatcher,
        TokenMatcher, UrlParts, Value, VarMap,
    };
}
