//! Server-side proxy for the Pujante API
//!
//! The browser only talks to its own origin: everything under `/api/*` is
//! forwarded to the configured upstream with the caller's method, query,
//! body, and auth header, and the upstream response is streamed back as is.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::{Path, RawQuery, State},
    http::{HeaderMap, HeaderName, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};

use super::config::Config;
use super::models::ApiMessage;

/// Request headers passed through to the upstream
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [
    header::AUTHORIZATION,
    header::CONTENT_TYPE,
    header::ACCEPT,
    header::ACCEPT_LANGUAGE,
];

/// Response headers passed back to the browser
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 3] = [
    header::CONTENT_TYPE,
    header::CACHE_CONTROL,
    header::ETAG,
];

/// Proxy error types
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Não foi possível conectar à API")]
    Unreachable(String),

    #[error("A API demorou demais para responder")]
    Timeout,

    #[error("Falha ao iniciar o cliente HTTP: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProxyError::Timeout
        } else {
            ProxyError::Unreachable(err.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ApiMessage {
            message: Some(self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

#[derive(Clone)]
struct ProxyState {
    client: reqwest::Client,
    api_base_url: String,
}

/// Create the `/api/*` proxy router
pub fn api_proxy_router(config: &Config) -> Result<Router, ProxyError> {
    let client = reqwest::Client::builder()
        .timeout(config.api_timeout)
        .build()
        .map_err(|e| ProxyError::Client(e.to_string()))?;

    let state = Arc::new(ProxyState {
        client,
        api_base_url: config.api_base_url.clone(),
    });

    Ok(Router::new()
        .route("/api/{*path}", any(proxy_handler))
        .with_state(state))
}

/// Join the upstream base with the request path and query
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{}/{}?{}", base, path, query),
        None => format!("{}/{}", base, path),
    }
}

/// Keep only the headers in `allowed`
pub fn filter_headers(headers: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut filtered = HeaderMap::new();
    for name in allowed {
        for value in headers.get_all(name) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

async fn proxy_handler(
    State(state): State<Arc<ProxyState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.api_base_url, &path, query.as_deref());

    tracing::debug!("Proxying {} /api/{} -> {}", method, path, url);

    let upstream = state
        .client
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Upstream request {} {} failed: {}", method, url, e);
            ProxyError::from(e)
        })?;

    let status = upstream.status();
    if status.is_server_error() {
        tracing::warn!("Upstream {} {} answered {}", method, url, status);
    } else {
        tracing::debug!("Upstream {} {} answered {}", method, url, status);
    }

    let response_headers = filter_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};
    use std::time::Duration;
    use tower::ServiceExt;

    #[test]
    fn test_upstream_url_joins_segments() {
        assert_eq!(
            upstream_url("http://localhost:8000/api/", "/trilhas/3", None),
            "http://localhost:8000/api/trilhas/3"
        );
        assert_eq!(
            upstream_url("http://localhost:8000/api", "trilhas", Some("q=agro&page=2")),
            "http://localhost:8000/api/trilhas?q=agro&page=2"
        );
        assert_eq!(
            upstream_url("http://localhost:8000/api", "trilhas", Some("")),
            "http://localhost:8000/api/trilhas"
        );
    }

    #[test]
    fn test_filter_headers_drops_unlisted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
        headers.insert(header::COOKIE, HeaderValue::from_static("session=1"));
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let filtered = filter_headers(&headers, &FORWARDED_REQUEST_HEADERS);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get(header::AUTHORIZATION).unwrap(), "Bearer t");
        assert!(filtered.get(header::COOKIE).is_none());
        assert!(filtered.get(header::HOST).is_none());
    }

    #[test]
    fn test_proxy_error_statuses() {
        assert_eq!(
            ProxyError::Timeout.into_response().status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ProxyError::Unreachable("refused".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_returns_bad_gateway() {
        let config = Config {
            api_base_url: "http://127.0.0.1:9".to_string(),
            api_timeout: Duration::from_secs(5),
        };
        let router = api_proxy_router(&config).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/trilhas")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiMessage = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body.message.as_deref(),
            Some("Não foi possível conectar à API")
        );
    }

    /// Upstream stand-in: echoes what it received, answers 201 with extra headers
    async fn echo_upstream(
        method: Method,
        uri: axum::http::Uri,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        let header_text = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let received = serde_json::json!({
            "method": method.as_str(),
            "uri": uri.to_string(),
            "authorization": header_text(header::AUTHORIZATION),
            "content_type": header_text(header::CONTENT_TYPE),
            "cookie": header_text(header::COOKIE),
            "host": header_text(header::HOST),
            "body": String::from_utf8_lossy(&body),
        });

        (
            StatusCode::CREATED,
            [(header::ETAG, "\"v1\""), (header::SET_COOKIE, "tracking=1")],
            Json(received),
        )
            .into_response()
    }

    async fn rejecting_login() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ApiMessage {
                message: Some("Email ou senha inválidos".to_string()),
            }),
        )
            .into_response()
    }

    /// Serve a fake Pujante API on a random local port; returns its `/api` base
    async fn spawn_upstream() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let upstream = Router::new()
            .route("/api/auth/login", any(rejecting_login))
            .route("/api/{*path}", any(echo_upstream));
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_forwards_request_and_relays_response() {
        let base = spawn_upstream().await;
        let upstream_host = base
            .trim_start_matches("http://")
            .trim_end_matches("/api")
            .to_string();
        let config = Config {
            api_base_url: base,
            api_timeout: Duration::from_secs(5),
        };
        let router = api_proxy_router(&config).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/trilhas/modulos?rascunho=1")
                    .header(header::AUTHORIZATION, "Bearer abc123")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::COOKIE, "session=1")
                    .header(header::HOST, "localhost:3000")
                    .body(Body::from(r#"{"titulo":"Módulo 1","ordem":1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers().get(header::ETAG).unwrap(), "\"v1\"");
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let received: serde_json::Value = body_json(response).await;
        assert_eq!(received["method"], "POST");
        assert_eq!(received["uri"], "/api/trilhas/modulos?rascunho=1");
        assert_eq!(received["authorization"], "Bearer abc123");
        assert_eq!(received["content_type"], "application/json");
        assert_eq!(received["cookie"], serde_json::Value::Null);
        assert_eq!(received["host"], upstream_host.as_str());
        assert_eq!(received["body"], r#"{"titulo":"Módulo 1","ordem":1}"#);
    }

    #[tokio::test]
    async fn test_relays_upstream_error_status_and_message() {
        let config = Config {
            api_base_url: spawn_upstream().await,
            api_timeout: Duration::from_secs(5),
        };
        let router = api_proxy_router(&config).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"email":"a@b.com","password":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: ApiMessage = body_json(response).await;
        assert_eq!(body.message.as_deref(), Some("Email ou senha inválidos"));
    }
}
