// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (login, listing, deletion) lives in domain actions that use these traits,
// so a real persistence layer can replace the in-memory stores without touching handlers.
//
// Naming convention: Base* for trait names (e.g., BaseUserStore, BasePostStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::SliceBounds;
use crate::domains::auth::{Role, User};
use crate::domains::posts::Post;

// =============================================================================
// User Store Trait (Infrastructure - identity lookup)
// =============================================================================

#[async_trait]
pub trait BaseUserStore: Send + Sync {
    /// Find a user by exact identifier match
    async fn find_user(&self, id: &str) -> Result<Option<User>>;

    /// Whether any stored user currently holds `role`
    async fn has_role(&self, role: Role) -> Result<bool>;

    /// Number of stored users
    async fn user_count(&self) -> Result<usize>;
}

// =============================================================================
// Post Store Trait (Infrastructure - ordered post collection)
// =============================================================================

/// One window of the post collection plus the collection size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSlice {
    pub items: Vec<Post>,
    pub total: usize,
}

#[async_trait]
pub trait BasePostStore: Send + Sync {
    /// Posts in store order within `bounds`, resolved against the collection size
    async fn list(&self, bounds: SliceBounds) -> Result<PostSlice>;

    /// Find a post by id
    async fn find_post(&self, id: i64) -> Result<Option<Post>>;

    /// Remove the post with `id`, returning the index it occupied
    ///
    /// Lookup and removal are one atomic step.
    async fn remove_by_id(&self, id: i64) -> Result<Option<usize>>;

    /// Number of stored posts
    async fn post_count(&self) -> Result<usize>;
}
