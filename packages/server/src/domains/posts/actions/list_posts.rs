//! List posts action

use tracing::debug;

use crate::common::{ApiError, PageMeta, PageRequest};
use crate::domains::posts::models::Post;
use crate::kernel::ServerDeps;

/// One page of posts and its pagination metadata
#[derive(Debug, Clone)]
pub struct PostListing {
    pub items: Vec<Post>,
    pub meta: PageMeta,
}

/// Return the `request` window of the post collection.
///
/// Pages past the end yield no items with correctly computed metadata.
pub async fn list_posts(request: PageRequest, deps: &ServerDeps) -> Result<PostListing, ApiError> {
    let slice = deps.posts.list(request.bounds()).await?;
    let meta = PageMeta::new(&request, slice.total);

    debug!(
        current_page = meta.current_page,
        total_pages = meta.total_pages,
        total_posts = meta.total_count,
        has_next_page = meta.has_next_page,
        has_prev_page = meta.has_prev_page,
        "Pagination info"
    );

    Ok(PostListing {
        items: slice.items,
        meta,
    })
}
