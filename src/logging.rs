//! Middleware for logging requests and responses.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header::COOKIE},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{internal_server_error::InternalServerError, session::COOKIE_SESSION};

/// The maximum number of bytes of a body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the response body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and logged at the `debug` level.
/// The session cookie is never logged.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_text) = match extract_request_parts_and_body_text(request).await {
        Ok(extracted) => extracted,
        Err(response) => return response,
    };

    let mut display_headers = parts.headers.clone();
    redact_session_cookie(&mut display_headers);
    log_request(&parts.method, &parts.uri, &display_headers, &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body_text) = match extract_response_parts_and_body_text(response).await {
        Ok(extracted) => extracted,
        Err(response) => return response,
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

fn redact_session_cookie(headers: &mut HeaderMap) {
    let redacted: Vec<HeaderValue> = headers
        .get_all(COOKIE)
        .iter()
        .map(|value| match value.to_str() {
            Ok(text) => {
                let cookies = text
                    .split(';')
                    .map(|cookie| {
                        let cookie = cookie.trim();
                        match cookie.split_once('=') {
                            Some((name, _)) if name == COOKIE_SESSION => {
                                format!("{name}=********")
                            }
                            _ => cookie.to_owned(),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("; ");

                HeaderValue::from_str(&cookies).unwrap_or(HeaderValue::from_static("********"))
            }
            Err(_) => HeaderValue::from_static("********"),
        })
        .collect();

    headers.remove(COOKIE);
    for value in redacted {
        headers.append(COOKIE, value);
    }
}

async fn extract_request_parts_and_body_text(
    request: Request,
) -> Result<(axum::http::request::Parts, String), Response> {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|error| {
            tracing::error!("Could not read request body: {error}");
            InternalServerError::default().into_response()
        })?;

    Ok((parts, String::from_utf8_lossy(&body_bytes).to_string()))
}

async fn extract_response_parts_and_body_text(
    response: Response,
) -> Result<(axum::http::response::Parts, String), Response> {
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|error| {
            tracing::error!("Could not read response body: {error}");
            InternalServerError::default().into_response()
        })?;

    Ok((parts, String::from_utf8_lossy(&body_bytes).to_string()))
}

/// The longest prefix of `text` that is at most [LOG_BODY_LENGTH_LIMIT] bytes
/// and ends on a character boundary.
fn truncate(text: &str) -> &str {
    let mut end = LOG_BODY_LENGTH_LIMIT.min(text.len());

    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

fn log_request(
    method: &axum::http::Method,
    uri: &axum::http::Uri,
    headers: &HeaderMap,
    body: &str,
) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {method} {uri} {headers:#?}\nbody: {:}...",
            truncate(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {method} {uri} {headers:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {parts:#?}\nbody: {:}...",
            truncate(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}
