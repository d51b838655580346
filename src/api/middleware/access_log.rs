//! Access log middleware: one line per request and one per response.

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

/// Resolve the client address.
/// Uses X-Forwarded-For or X-Real-IP if behind a proxy, otherwise the connection IP.
fn client_ip(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
    {
        // First entry is the original client
        if let Some(ip) = forwarded.split(',').map(str::trim).find(|ip| !ip.is_empty()) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("X-Real-IP")
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return real_ip.to_string();
    }

    if let Some(connect_info) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return connect_info.0.ip().to_string();
    }

    "unknown".to_string()
}

/// Log path and client before the handler runs, status after.
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    tracing::info!("Request path: {} - Client IP: {}", path, client_ip(&request));

    let response = next.run(request).await;

    tracing::info!(
        "Response status code: {} for path: {}",
        response.status().as_u16(),
        path
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request() -> axum::http::request::Builder {
        Request::builder().uri("/roles/get")
    }

    #[test]
    fn test_forwarded_for_takes_first_hop() {
        let req = request()
            .header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_ip(&req), "203.0.113.7");
    }

    #[test]
    fn test_real_ip_used_without_forwarded_for() {
        let req = request()
            .header("X-Real-IP", "198.51.100.2")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_ip(&req), "198.51.100.2");
    }

    #[test]
    fn test_connect_info_fallback() {
        let mut req = request().body(Body::empty()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 5000))));
        assert_eq!(client_ip(&req), "127.0.0.1");
    }

    #[test]
    fn test_unknown_without_any_source() {
        let req = request().body(Body::empty()).unwrap();
        assert_eq!(client_ip(&req), "unknown");
    }
}
