//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::common::pagination::PAGINATION_HEADERS;
use crate::config::{Config, RateLimitSettings};
use crate::kernel::ServerDeps;
use crate::server::middleware::{
    extract_client_ip, governor_quota, jwt_auth_middleware, with_fault_boundary,
    SECURITY_HEADERS,
};
use crate::server::routes::{
    delete_post_handler, health_handler, list_posts_handler, login_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: ServerDeps,
}

/// Router options that vary between deployment and tests
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// CORS origins; empty allows any origin
    pub allowed_origins: Vec<String>,
    /// `None` disables rate limiting
    pub rate_limit: Option<RateLimitSettings>,
}

impl RouterOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
            rate_limit: Some(config.rate_limit()),
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };

    cors.allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers(PAGINATION_HEADERS)
}

/// Build the Axum application router
///
/// Public routes: `POST /auth/login`, `GET /health`.
/// Guarded routes: `GET /post`, `DELETE /post/:id`.
pub fn build_router(deps: ServerDeps, options: RouterOptions) -> Result<Router> {
    let state = AxumAppState { deps };

    // Post routes sit behind the JWT guard
    let post_routes = Router::new()
        .route("/post", get(list_posts_handler))
        .route("/post/:id", delete(delete_post_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ));

    let router = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/health", get(health_handler))
        .merge(post_routes)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(extract_client_ip));

    let mut router = with_fault_boundary(router);

    if let Some(settings) = options.rate_limit {
        let (per_millisecond, burst_size) = governor_quota(&settings);
        let rate_limit_config = Arc::new(
            GovernorConfigBuilder::default()
                // Keyed on X-Forwarded-For / X-Real-IP, falling back to the peer address
                .key_extractor(SmartIpKeyExtractor)
                .per_millisecond(per_millisecond)
                .burst_size(burst_size)
                .use_headers()
                .finish()
                .context("Rate limiter configuration is invalid")?,
        );
        router = router.layer(GovernorLayer {
            config: rate_limit_config,
        });
    }

    for (name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            name,
            HeaderValue::from_static(value),
        ));
    }

    Ok(router
        .layer(cors_layer(&options.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Build the production application from configuration
pub fn build_app(deps: ServerDeps, config: &Config) -> Result<Router> {
    build_router(deps, RouterOptions::from_config(config))
}
