use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::server::app::AxumAppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint
///
/// Checks that both stores answer. Returns 200 OK if they do,
/// 503 Service Unavailable otherwise.
pub async fn health_handler(
    State(state): State<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let counts = async {
        let users = state.deps.users.user_count().await?;
        let posts = state.deps.posts.post_count().await?;
        anyhow::Ok((users, posts))
    }
    .await;

    match counts {
        Ok((users, posts)) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                users: Some(users),
                posts: Some(posts),
                error: None,
            }),
        ),
        Err(e) => {
            error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    users: None,
                    posts: None,
                    error: Some("store unavailable".to_string()),
                }),
            )
        }
    }
}
