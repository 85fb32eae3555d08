use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::common::ApiError;
use crate::domains::auth::{login, LoginResult};
use crate::server::app::AxumAppState;

/// Body of `POST /auth/login`
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub id: Option<String>,
}

/// Login endpoint
///
/// A missing or unreadable body is treated as an unknown identifier.
pub async fn login_handler(
    State(state): State<AxumAppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResult>, ApiError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let result = login(request.id.as_deref(), &state.deps).await?;
    Ok(Json(result))
}
