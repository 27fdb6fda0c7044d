//! Client identification utilities
//!
//! Functions for reading caller metadata from HTTP headers.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Longest User-Agent kept for session records
pub const MAX_USER_AGENT_LENGTH: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationHeaderError {
    #[error("Authorization header is not valid UTF-8")]
    NotUtf8,
    #[error("Authorization header must use the Bearer scheme")]
    UnsupportedScheme,
    #[error("Bearer token is empty")]
    EmptyToken,
}

/// Extract the bearer token from the `Authorization` header
///
/// ## Returns
/// * `Ok(None)` - no `Authorization` header
/// * `Ok(Some(token))` - `Bearer <token>` (scheme is case-insensitive)
/// * `Err(_)` - header present but unusable
pub fn extract_bearer_token(
    headers: &HeaderMap,
) -> Result<Option<String>, AuthorizationHeaderError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value
        .to_str()
        .map_err(|_| AuthorizationHeaderError::NotUtf8)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(AuthorizationHeaderError::UnsupportedScheme)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthorizationHeaderError::UnsupportedScheme);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthorizationHeaderError::EmptyToken);
    }
    Ok(Some(token.to_string()))
}

/// Extract the User-Agent, truncated to [`MAX_USER_AGENT_LENGTH`] characters
pub fn extract_user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|ua| ua.chars().take(MAX_USER_AGENT_LENGTH).collect())
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), Ok(None));
        assert_eq!(
            extract_bearer_token(&with_authorization("Bearer abc.def")),
            Ok(Some("abc.def".to_string()))
        );
        assert_eq!(
            extract_bearer_token(&with_authorization("bearer abc")),
            Ok(Some("abc".to_string()))
        );
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        assert_eq!(
            extract_bearer_token(&with_authorization("Basic dXNlcjpwYXNz")),
            Err(AuthorizationHeaderError::UnsupportedScheme)
        );
        assert_eq!(
            extract_bearer_token(&with_authorization("Bearer")),
            Err(AuthorizationHeaderError::UnsupportedScheme)
        );
        assert_eq!(
            extract_bearer_token(&with_authorization("Bearer   ")),
            Err(AuthorizationHeaderError::EmptyToken)
        );
    }

    #[test]
    fn test_user_agent_truncated() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_user_agent(&headers), None);

        let long = "a".repeat(MAX_USER_AGENT_LENGTH + 10);
        headers.insert(header::USER_AGENT, HeaderValue::from_str(&long).unwrap());
        assert_eq!(
            extract_user_agent(&headers).map(|ua| ua.len()),
            Some(MAX_USER_AGENT_LENGTH)
        );
    }

    #[test]
    fn test_extract_client_ip_xff() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("192.168.1.1, 10.0.0.1"),
        );

        let ip = extract_client_ip(&headers, None);
        assert_eq!(ip, Some("192.168.1.1".parse().unwrap()));
    }

    #[test]
    fn test_extract_client_ip_direct() {
        let headers = HeaderMap::new();
        let direct: IpAddr = "127.0.0.1".parse().unwrap();

        let ip = extract_client_ip(&headers, Some(direct));
        assert_eq!(ip, Some(direct));
    }
}
