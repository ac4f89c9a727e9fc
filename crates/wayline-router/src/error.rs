//! Error types for route construction and URL generation.
//!
//! Failing to match is never an error here; matching reports `Option`.
//! Errors cover the two fallible operations: building a route definition
//! and generating a URL from one.

use thiserror::Error;

/// Errors surfaced while building a route definition.
///
/// These are recoverable configuration mistakes, reported from
/// [`RouteBuilder::build`](crate::RouteBuilder::build) or from the
/// fallible matcher constructors rather than aborting the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// Integer matcher radix outside the supported `2..=36` range.
    #[error("integer matcher radix {0} is outside the supported range 2..=36")]
    RadixOutOfRange(u32),
    /// A `{name:converter}` pattern parameter named an unknown converter.
    #[error("unknown converter `{converter}` for parameter `{name}`")]
    UnknownConverter {
        /// The parameter name as written in the pattern.
        name: String,
        /// The converter that was not recognized.
        converter: String,
    },
    /// A pattern parameter with an empty name, e.g. `{}` or `{:int}`.
    #[error("empty parameter name in pattern segment `{0}`")]
    EmptyParamName(String),
    /// A pattern segment with unbalanced or nested braces.
    #[error("unbalanced braces in pattern segment `{0}`")]
    UnbalancedBraces(String),
}

/// Errors surfaced while generating a URL.
///
/// Generation is deterministic; each of these is a caller-input problem
/// and is reported directly, never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// No route is registered under the requested name.
    #[error("no route named `{0}` is registered")]
    RouteNotFound(String),
    /// A non-literal token matcher has no name to look a value up by.
    #[error("unnamed matcher encountered during URL generation")]
    AnonymousMatcher,
    /// The supplied variables have no value under a matcher's name.
    #[error("no value supplied for variable `{0}`")]
    MissingVariable(String),
}
