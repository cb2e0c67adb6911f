use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue},
};

pub const SESSION_COOKIE: &str = "dt_session";

/// Session token presented by the caller, if any.
///
/// Read from the `dt_session` cookie, falling back to `Authorization: Bearer`.
/// Holding a token says nothing about its validity; ask the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let from_cookie = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, value)| value.to_string());

        let token = from_cookie.or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer ").or_else(|| h.strip_prefix("bearer ")))
                .map(str::to_string)
        });

        Self(token.filter(|t| !t.is_empty()))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// `Set-Cookie` value for a fresh session. `secure` adds the `Secure` flag.
pub fn session_cookie(token: &str, max_age_secs: i64, secure: bool) -> HeaderValue {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
        SESSION_COOKIE,
        token,
        max_age_secs,
        if secure { "; Secure" } else { "" }
    );
    // JWTs are base64url segments joined by dots, always valid header bytes.
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| cleared_cookie(secure))
}

pub fn cleared_cookie(secure: bool) -> HeaderValue {
    if secure {
        HeaderValue::from_static("dt_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Secure")
    } else {
        HeaderValue::from_static("dt_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}
