//! HTTP client for integration testing.
//!
//! Drives the router in-process with `oneshot`, without binding a socket.

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

/// HTTP client for sending requests to the application router in tests.
#[derive(Clone)]
pub struct HttpClient {
    router: Router,
}

/// Result of one request.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl HttpResponse {
    /// Header value as a string, panicking if it is missing.
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .unwrap_or_else(|| panic!("missing header {}", name))
            .to_str()
            .expect("header is not valid UTF-8")
    }

    /// `error` field of a bare error body.
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// Ids of the posts in a success envelope.
    pub fn post_ids(&self) -> Vec<i64> {
        self.body["data"]
            .as_array()
            .expect("data is not an array")
            .iter()
            .map(|post| post["id"].as_i64().expect("post id is not an integer"))
            .collect()
    }
}

impl HttpClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a prepared request.
    pub async fn send(&self, request: Request<Body>) -> HttpResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router service is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        // Non-JSON bodies (e.g. rate limiter rejections) are kept as a string
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        HttpResponse {
            status,
            headers,
            body,
        }
    }

    /// Send a request with an explicit `Authorization` header value.
    pub async fn request_with_auth(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
    ) -> HttpResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        self.send(builder.body(Body::empty()).expect("valid request"))
            .await
    }

    /// `GET` with an optional bearer token.
    pub async fn get(&self, uri: &str, token: Option<&str>) -> HttpResponse {
        let auth = token.map(|t| format!("Bearer {}", t));
        self.request_with_auth(Method::GET, uri, auth.as_deref())
            .await
    }

    /// `DELETE` with an optional bearer token.
    pub async fn delete(&self, uri: &str, token: Option<&str>) -> HttpResponse {
        let auth = token.map(|t| format!("Bearer {}", t));
        self.request_with_auth(Method::DELETE, uri, auth.as_deref())
            .await
    }

    /// `POST` a raw body with a JSON content type.
    pub async fn post_raw(&self, uri: &str, body: impl Into<Body>) -> HttpResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .expect("valid request");
        self.send(request).await
    }

    /// `POST` a JSON value.
    pub async fn post_json(&self, uri: &str, body: Value) -> HttpResponse {
        self.post_raw(uri, body.to_string()).await
    }

    /// Log in as `id`, returning the issued token.
    pub async fn login(&self, id: &str) -> String {
        let response = self
            .post_json("/auth/login", serde_json::json!({ "id": id }))
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("token missing from login response")
            .to_string()
    }
}
