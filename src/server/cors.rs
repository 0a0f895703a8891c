//! CORS handling
//!
//! Every endpoint answers cross-origin requests from any origin. Preflight
//! requests are answered here and never reach a handler.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Value of `Access-Control-Allow-Origin`
pub const ALLOW_ORIGIN: &str = "*";
/// Value of `Access-Control-Allow-Methods`
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
/// Value of `Access-Control-Allow-Headers`
pub const ALLOW_HEADERS: &str = "Content-Type";

/// The three CORS headers attached to every endpoint response
pub fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
    ]
}

/// Layer that overwrites one CORS header on the way out
pub fn header_layer(name: HeaderName, value: HeaderValue) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, value)
}

/// Answer `OPTIONS` with a bare 200, pass everything else through
///
/// Must sit inside the header layers so the preflight response still
/// carries the CORS headers.
pub async fn short_circuit_preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        tracing::debug!("Answering CORS preflight for {}", request.uri().path());
        return StatusCode::OK.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http, routing::get};
    use tower::{ServiceBuilder, ServiceExt};

    fn test_router() -> Router {
        let [origin, methods, headers] = cors_headers();
        Router::new().route("/probe", get(|| async { "probe" })).route_layer(
            ServiceBuilder::new()
                .layer(header_layer(origin.0, origin.1))
                .layer(header_layer(methods.0, methods.1))
                .layer(header_layer(headers.0, headers.1))
                .layer(axum::middleware::from_fn(short_circuit_preflight)),
        )
    }

    #[test]
    fn test_cors_header_values() {
        let headers = cors_headers();
        assert_eq!(headers[0].1, "*");
        assert_eq!(headers[1].1, "GET, POST, OPTIONS");
        assert_eq!(headers[2].1, "Content-Type");
    }

    #[tokio::test]
    async fn test_preflight_is_short_circuited() {
        let response = test_router()
            .oneshot(
                http::Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/probe")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_other_methods_pass_through() {
        let response = test_router()
            .oneshot(http::Request::builder().uri("/probe").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"probe");
    }
}
