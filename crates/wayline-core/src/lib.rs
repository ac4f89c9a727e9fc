//! Request-side surface types for the wayline routing engine.
//!
//! This crate provides the structures the router consumes and produces:
//!
//! - [`Method`] — HTTP method, parsed case-insensitively
//! - [`Request`] — the read-only view of an inbound request
//! - [`UrlParts`] — the URL assembled during reverse routing
//!
//! The routing engine itself lives in `wayline-router`; embedding
//! applications adapt their own request representation to [`Request`] via
//! [`Request::from_parts`].

#![forbid(unsafe_code)]

mod method;
mod request;
mod url_parts;

pub use method::{InvalidMethod, Method};
pub use request::{ParseRequestError, Request};
pub use url_parts::UrlParts;
