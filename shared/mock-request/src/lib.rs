//! Simulated inbound requests for exercising request-scoped code in tests.
//!
//! Builds a real `http::Request` carrying the given query parameters and
//! hands callers an explicit [`RequestContext`] instead of installing any
//! ambient request state: the code under test receives the context as an
//! argument and reads parameters from it directly.

use std::fmt::{Display, Formatter};

use tracing::debug;

// ============================================================================
// Errors
// ============================================================================

/// Error building a simulated request.
#[derive(Debug)]
pub enum RequestError {
    /// The path (plus encoded query) did not form a valid request URI.
    InvalidPath(String),
    /// A parameter was supplied with an empty name.
    EmptyParamName,
    /// The JSON body could not be serialized.
    BodyEncode(String),
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::InvalidPath(msg) => write!(f, "invalid request path: {}", msg),
            RequestError::EmptyParamName => write!(f, "parameter name must not be empty"),
            RequestError::BodyEncode(msg) => write!(f, "body encoding failed: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

// ============================================================================
// Request context
// ============================================================================

/// A simulated inbound request.
///
/// Parameters are read back out of the request's own query string, so the
/// context behaves like the real thing: what the code under test sees is
/// exactly what a framework would have parsed off the wire.
pub struct RequestContext {
    request: http::Request<String>,
}

impl RequestContext {
    /// The underlying request, for code that takes `http` types directly.
    pub fn request(&self) -> &http::Request<String> {
        &self.request
    }

    /// First value of the named query parameter, percent-decoded.
    pub fn param(&self, name: &str) -> Option<String> {
        parse_query_param(self.request.uri().query(), name)
    }

    /// The raw request body.
    pub fn body(&self) -> &str {
        self.request.body()
    }
}

/// Build a GET request for `path` carrying `params` as its query string,
/// then run `f` with the resulting context. The context lives only for the
/// duration of the call; its result is passed through.
pub fn with_request<T, F>(
    path: &str,
    params: &[(&str, &str)],
    f: F,
) -> Result<T, RequestError>
where
    F: FnOnce(&RequestContext) -> T,
{
    let ctx = build_context(http::Method::GET, path, params, None)?;
    Ok(f(&ctx))
}

/// Like [`with_request`] but POSTs `body` serialized as JSON, for simulating
/// create/update submissions.
pub fn with_json_request<B, T, F>(
    path: &str,
    params: &[(&str, &str)],
    body: &B,
    f: F,
) -> Result<T, RequestError>
where
    B: serde::Serialize,
    F: FnOnce(&RequestContext) -> T,
{
    let body =
        serde_json::to_string(body).map_err(|e| RequestError::BodyEncode(e.to_string()))?;
    let ctx = build_context(http::Method::POST, path, params, Some(body))?;
    Ok(f(&ctx))
}

fn build_context(
    method: http::Method,
    path: &str,
    params: &[(&str, &str)],
    json_body: Option<String>,
) -> Result<RequestContext, RequestError> {
    if params.iter().any(|(name, _)| name.is_empty()) {
        return Err(RequestError::EmptyParamName);
    }

    let uri = if params.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, encode_query(params))
    };

    let mut builder = http::Request::builder().method(method).uri(uri.as_str());
    if json_body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(json_body.unwrap_or_default())
        .map_err(|e| RequestError::InvalidPath(e.to_string()))?;

    debug!(uri = %uri, "simulated request");
    Ok(RequestContext { request })
}

// ============================================================================
// Query encoding/decoding
// ============================================================================

/// Parse a named query parameter from a query string.
///
/// Returns the first percent-decoded value for the parameter, or `None` if
/// the parameter is absent.
pub fn parse_query_param(query: Option<&str>, name: &str) -> Option<String> {
    let q = query?;
    for pair in q.split('&') {
        let mut it = pair.splitn(2, '=');
        let key = it.next()?;
        if percent_decode(key) == name {
            // A bare key with no `=` does not count as a value; keep
            // scanning in case a later pair supplies one.
            if let Some(val) = it.next() {
                return Some(percent_decode(val));
            }
        }
    }
    None
}

fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{}={}", percent_encode(name), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

// Unreserved characters pass through; everything else becomes %XX per byte.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

// Decodes %XX pairs; malformed sequences are kept literally. Works on raw
// bytes so a `%` followed by part of a multibyte character stays literal
// instead of tripping over a char boundary.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
