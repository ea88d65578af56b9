//! Endpoint descriptors
//!
//! An [`Endpoint`] binds an HTTP method and path to the three shapes of an
//! operation: query parameters `P`, JSON body `B` and response data `R`.
//! Descriptors are `const` values, so the result type of every call is
//! fixed at compile time.

use std::fmt;
use std::marker::PhantomData;

/// Path prefix for unauthenticated endpoints
pub const PUBLIC_PREFIX: &str = "/public";

/// Path prefix for authenticated endpoints
pub const PRIVATE_PREFIX: &str = "/private";

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Canonical upper-case form, as used in the signing message
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Query shape for endpoints without parameters
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct NoParams;

/// Body shape for endpoints without a request body
///
/// Serializes to `null`, which the request builder sends as an empty body.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct NoBody;

/// Static description of one API operation
///
/// # Example
///
/// ```
/// use gmo_rest::endpoint::{Endpoint, HttpMethod, NoBody, NoParams};
///
/// #[derive(serde::Deserialize)]
/// struct Latency { ms: u64 }
///
/// const LATENCY: Endpoint<NoParams, NoBody, Latency> =
///     Endpoint::new(HttpMethod::Get, "/v1/latency");
///
/// assert_eq!(LATENCY.path(), "/v1/latency");
/// ```
pub struct Endpoint<P, B, R> {
    method: HttpMethod,
    path: &'static str,
    _shapes: PhantomData<fn(P, B) -> R>,
}

impl<P, B, R> Endpoint<P, B, R> {
    /// Declare an endpoint
    pub const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            _shapes: PhantomData,
        }
    }

    /// HTTP method
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Path relative to the access prefix (e.g. `/v1/status`)
    pub const fn path(&self) -> &'static str {
        self.path
    }
}

impl<P, B, R> Clone for Endpoint<P, B, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, B, R> Copy for Endpoint<P, B, R> {}

impl<P, B, R> fmt::Debug for Endpoint<P, B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}
