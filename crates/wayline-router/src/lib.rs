//! Bidirectional URL routing.
//!
//! This crate matches inbound requests against registered routes and runs
//! the same route definitions backwards to generate canonical URLs:
//!
//! - Token matchers ([`TokenMatcher`]) match one path segment or host
//!   label and extract a typed [`Value`].
//! - Component matchers ([`RequestMatcher`]) cover one request dimension:
//!   path, host, method, or scheme.
//! - A [`Route`] is an ordered list of component matchers plus an optional
//!   name and an opaque handle; a [`RouteSet`] scans its routes in
//!   registration order and the first match wins.
//!
//! Matching is a linear scan over immutable structures; there is no route
//! compilation and no interior mutability, so built routes are freely
//! shared across threads.
//!
//! # Example
//!
//! ```
//! use wayline_core::{Method, Request};
//! use wayline_router::{Route, RouteSet, Value, VarMap};
//!
//! let route = Route::builder()
//!     .path_pattern("/users/{id:int}")
//!     .name("user-detail")
//!     .handle(7u32)
//!     .build()?;
//!
//! let mut routes = RouteSet::new();
//! routes.add(route);
//!
//! let request = Request::new(Method::Get, "http://example.com/users/42")?;
//! let matched = routes.match_request(&request).expect("route matches");
//! assert_eq!(matched.var("id"), Some(&Value::Int(42)));
//! assert_eq!(matched.handle(), Some(&7));
//!
//! let vars = VarMap::from_iter([("id", 42)]);
//! assert_eq!(routes.url("user-detail", &vars)?.to_string(), "/users/42");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod component;
mod error;
mod pattern;
mod route;
mod set;
mod token;
mod vars;

pub use component::{HostMatcher, MethodMatcher, PathMatcher, RequestMatcher, SchemeMatcher};
pub use error::{BuildError, GenerateError};
pub use route::{MatchResult, Route, RouteBuilder};
pub use set::RouteSet;
pub use token::{IntegerMatcher, LiteralMatcher, TextMatcher, TokenMatcher};
pub use vars::{Value, VarMap};
