use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::HeaderMap,
    Extension, Json,
};

use crate::common::{ApiError, ApiSuccess, PageRequest};
use crate::domains::posts::{delete_post, list_posts, Post};
use crate::server::app::AxumAppState;
use crate::server::middleware::AuthUser;

/// `GET /post?page=&limit=`
///
/// Pagination metadata is returned in `X-*` headers; the body carries only the page.
pub async fn list_posts_handler(
    State(state): State<AxumAppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<(HeaderMap, Json<ApiSuccess<Vec<Post>>>), ApiError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let listing = list_posts(PageRequest::from_query(&pairs), &state.deps).await?;

    Ok((
        listing.meta.to_headers(),
        Json(ApiSuccess::new(listing.items, "Success!")),
    ))
}

/// `DELETE /post/:id` (admin only)
pub async fn delete_post_handler(
    State(state): State<AxumAppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiSuccess<usize>>, ApiError> {
    let index = delete_post(&id, user.role, &state.deps).await?;
    Ok(Json(ApiSuccess::new(index, "Post Deleted Successfully!")))
}
