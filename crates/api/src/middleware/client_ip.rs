use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::state::AppState;

/// Client address used as the rate-limiter key.
///
/// Prefers the first entry of `x-forwarded-for` (set by the reverse proxy in
/// front of this service), then the socket peer address, then a shared
/// `"unknown"` bucket so requests are never dropped for lack of an address.
///
/// ```ignore
/// async fn submit(ip: ClientIp, State(state): State<AppState>) -> AppResult<...> {
///     state.rate_limiter.try_acquire(&ip.0)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(forwarded) = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
        {
            if let Some(first) = forwarded.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return Ok(Self(first.to_string()));
                }
            }
        }

        if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            return Ok(Self(addr.ip().to_string()));
        }

        Ok(Self("unknown".to_string()))
    }
}
