use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::common::ApiError;
use crate::domains::auth::Role;
use crate::kernel::ServerDeps;
use crate::server::app::AxumAppState;
use crate::server::middleware::ClientIp;

/// Authenticated user information from JWT
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
}

/// JWT authorization middleware
///
/// Verifies the `Authorization: Bearer <token>` header and adds AuthUser to
/// request extensions. Any failure ends the request with the matching error.
pub async fn jwt_auth_middleware(
    State(state): State<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let client_ip = request.extensions().get::<ClientIp>().map(|ip| ip.0);

    match authorize(request.headers(), &state.deps).await {
        Ok(user) => {
            debug!("Authenticated user: {} (role: {})", user.id, user.role);
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        Err(e) => {
            warn!(client_ip = ?client_ip, "Request rejected: {}", e);
            Err(e)
        }
    }
}

/// Resolve the caller of a request.
///
/// Checks run in a fixed order: header shape, server secret, signature and
/// expiry, then role. The role is re-checked against the live user store,
/// but only for membership: any stored user holding that role is enough.
pub async fn authorize(headers: &HeaderMap, deps: &ServerDeps) -> Result<AuthUser, ApiError> {
    let token = bearer_token(headers).ok_or(ApiError::MissingOrMalformedToken)?;

    let claims = deps.jwt()?.verify_token(token)?;

    let role = match claims.role.parse::<Role>() {
        Ok(role) if deps.users.has_role(role).await? => role,
        _ => return Err(ApiError::InvalidRole(claims.id)),
    };

    Ok(AuthUser {
        id: claims.id,
        role,
    })
}

/// Extract the token from a `Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
