//! Request construction
//!
//! Builds the in-memory [`HttpRequest`] for an endpoint. No network I/O
//! happens here.

use gmo_auth::{Credentials, RequestSigner, SignatureHeaders};
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::error::{RestError, RestResult};
use crate::transport::HttpRequest;

/// Build a request for `host + prefix + endpoint.path`
///
/// # Arguments
/// * `host` - Base URL (e.g. "https://api.coin.z.com")
/// * `prefix` - Access prefix, `/public` or `/private`
/// * `endpoint` - Endpoint descriptor
/// * `params` - Query parameters; `None` means no query string
/// * `body` - JSON body; `None`, or a body that serializes to `null` (such
///   as [`NoBody`](crate::endpoint::NoBody)), means no payload
pub fn build<P, B, R>(
    host: &str,
    prefix: &str,
    endpoint: &Endpoint<P, B, R>,
    params: Option<&P>,
    body: Option<&B>,
) -> RestResult<HttpRequest>
where
    P: Serialize,
    B: Serialize,
{
    let raw_url = format!("{}{}{}", host.trim_end_matches('/'), prefix, endpoint.path());
    let mut url = Url::parse(&raw_url)
        .map_err(|e| RestError::MalformedRequest(format!("invalid url {}: {}", raw_url, e)))?;

    if let Some(params) = params {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| RestError::MalformedRequest(format!("failed to encode query: {}", e)))?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
    }

    let mut request = HttpRequest::new(endpoint.method(), url);

    if let Some(body) = body {
        let json = serde_json::to_vec(body)
            .map_err(|e| RestError::MalformedRequest(format!("failed to encode body: {}", e)))?;
        if json != b"null" {
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            request.body = Some(json);
        }
    }

    Ok(request)
}

/// Sign a built request and attach the `API-*` headers
///
/// The signature covers the endpoint path (without prefix or query) and the
/// buffered body, stamped with the current time.
pub fn sign<P, B, R>(
    request: &mut HttpRequest,
    credentials: &Credentials,
    endpoint: &Endpoint<P, B, R>,
) -> RestResult<()> {
    let signer = RequestSigner::new(credentials, endpoint.method().as_str(), endpoint.path());
    let headers = signer.sign(request.body_bytes())?;
    attach_signature(request, &headers)
}

/// Copy signature header values onto a request
pub fn attach_signature(request: &mut HttpRequest, headers: &SignatureHeaders) -> RestResult<()> {
    for (name, value) in headers.pairs() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RestError::MalformedRequest(format!("invalid header {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            RestError::MalformedRequest(format!("invalid value for header {}: {}", name, e))
        })?;
        request.headers.insert(name, value);
    }
    Ok(())
}
