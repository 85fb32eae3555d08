//! Delete post action

use tracing::{info, warn};

use crate::common::{parse_int_prefix, ApiError};
use crate::domains::auth::Role;
use crate::kernel::ServerDeps;

/// Remove the post identified by `raw_id`, returning the index it occupied.
///
/// Only admins may delete. The id is parsed leniently; an unparseable id
/// behaves like an absent post. Removal is immediate and permanent.
pub async fn delete_post(
    raw_id: &str,
    requester_role: Role,
    deps: &ServerDeps,
) -> Result<usize, ApiError> {
    if requester_role != Role::Admin {
        warn!("Delete of post {} refused for role {}", raw_id, requester_role);
        return Err(ApiError::Forbidden("Only admins can delete posts".to_string()));
    }

    let removed = match parse_int_prefix(raw_id) {
        Some(id) => deps.posts.remove_by_id(id).await?,
        None => None,
    };

    let Some(index) = removed else {
        return Err(ApiError::NotFound(format!("No Post Found for id {}", raw_id)));
    };

    info!("Deleted post {} (was at index {})", raw_id, index);
    Ok(index)
}
