//! Classification of failed HTTP requests into user-facing errors.

use reqwest::StatusCode;

/// HTTP failures reported by the remote endpoint.
#[derive(Debug, PartialEq)]
pub enum HttpError {
    /// The endpoint rejected the credentials embedded in the URL (HTTP 401)
    Unauthorized(String),
    /// Forbidden access (HTTP 403)
    Forbidden(String),
    /// Endpoint does not exist or was deleted (HTTP 404)
    NotFound(String),
    /// Too many requests (HTTP 429)
    RateLimited(String),
    /// Other client errors, usually a rejected payload
    ClientError(String),
    /// The endpoint failed to handle the request (HTTP 5xx)
    ServerError(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::Unauthorized(msg) => {
                write!(f, "Unauthorized: {}. Check the webhook token.", msg)
            }
            HttpError::Forbidden(msg) => {
                write!(f, "Access forbidden: {}", msg)
            }
            HttpError::NotFound(msg) => {
                write!(f, "Not found: {}. The webhook may have been deleted.", msg)
            }
            HttpError::RateLimited(msg) => {
                write!(f, "Rate limit exceeded: {}. Try again later.", msg)
            }
            HttpError::ClientError(msg) => {
                write!(f, "Request rejected: {}", msg)
            }
            HttpError::ServerError(msg) => {
                write!(f, "Server error: {}", msg)
            }
        }
    }
}

impl std::error::Error for HttpError {}

/// Maps an unsuccessful status code to an [`HttpError`].
/// Returns `None` for success and informational codes.
pub fn classify_error(status: StatusCode, detail: &str) -> Option<HttpError> {
    let detail = if detail.trim().is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("HTTP {}: {}", status.as_u16(), detail.trim())
    };

    match status {
        StatusCode::UNAUTHORIZED => Some(HttpError::Unauthorized(detail)),
        StatusCode::FORBIDDEN => Some(HttpError::Forbidden(detail)),
        StatusCode::NOT_FOUND => Some(HttpError::NotFound(detail)),
        StatusCode::TOO_MANY_REQUESTS => Some(HttpError::RateLimited(detail)),
        s if s.is_client_error() => Some(HttpError::ClientError(detail)),
        s if s.is_server_error() => Some(HttpError::ServerError(detail)),
        _ => None,
    }
}

/// Turns an unsuccessful response into an error carrying the response body.
pub async fn check_status(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    match classify_error(status, &body) {
        Some(error) => Err(anyhow::Error::from(error)),
        None => anyhow::bail!("Unexpected HTTP status {}", status.as_u16()),
    }
}
