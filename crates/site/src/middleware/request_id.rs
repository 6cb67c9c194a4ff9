//! Request correlation IDs.
//!
//! Every response carries an `x-request-id` header. IDs arriving from an
//! upstream proxy are reused so log lines and Sentry events can be joined
//! across hops; requests that arrive without one get a fresh UUID v4.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

// Upstream values longer than this are assumed to be garbage and replaced.
const MAX_ID_LEN: usize = 128;

fn upstream_id(request: &Request) -> Option<String> {
    let value = request.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?;
    if value.is_empty() || value.len() > MAX_ID_LEN {
        return None;
    }
    Some(value.to_owned())
}

/// Tags the request with a correlation ID and echoes it on the response.
///
/// The ID is recorded on the current tracing span (declared `Empty` by the
/// router's `TraceLayer` span) and set as a Sentry tag, so a single value
/// links access logs to captured errors.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = upstream_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", &request_id);
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
