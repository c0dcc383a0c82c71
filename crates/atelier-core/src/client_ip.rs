//! Client address extractor used as the rate-limit key.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRef, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;

/// Number of reverse proxies in front of the service that append to
/// `X-Forwarded-For`. Zero means the socket peer is the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrustedProxies(pub usize);

/// Best-effort client address.
///
/// With no trusted proxies the socket peer address is used (requires
/// `into_make_service_with_connect_info`) and forwarding headers are ignored.
/// Behind `n` trusted proxies the `n`-th `X-Forwarded-For` entry from the
/// right is used, since everything left of it is client-supplied. Falls back
/// to the peer address, then `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

fn forwarded_ip(headers: &HeaderMap, hops: usize) -> Option<String> {
    if hops == 0 {
        return None;
    }
    let entries: Vec<&str> = headers
        .get_all("x-forwarded-for")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .collect();
    let idx = entries.len().checked_sub(hops)?;
    Some(entries[idx])
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

impl<S> FromRequestParts<S> for ClientIp
where
    TrustedProxies: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let TrustedProxies(hops) = TrustedProxies::from_ref(state);
        let ip = forwarded_ip(&parts.headers, hops)
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            })
            .unwrap_or_else(|| "unknown".to_owned());
        async move { Ok(Self(ip)) }
    }
}
