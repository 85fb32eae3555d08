//! In-memory stores
//!
//! Process-lifetime collections standing in for a database. Contents reset on
//! restart.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::RwLock;
use tracing::debug;

use super::seed::{seed_posts, seed_users};
use super::traits::{BasePostStore, BaseUserStore, PostSlice};
use crate::common::SliceBounds;
use crate::domains::auth::{Role, User};
use crate::domains::posts::Post;

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow!("in-memory store lock poisoned")
}

// =============================================================================
// Users
// =============================================================================

/// Fixed user list; never mutated at runtime
pub struct MemoryUserStore {
    users: Vec<User>,
}

impl MemoryUserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Store holding the two built-in accounts
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }
}

#[async_trait]
impl BaseUserStore for MemoryUserStore {
    async fn find_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn has_role(&self, role: Role) -> Result<bool> {
        Ok(self.users.iter().any(|u| u.role == role))
    }

    async fn user_count(&self) -> Result<usize> {
        Ok(self.users.len())
    }
}

// =============================================================================
// Posts
// =============================================================================

/// Ordered post list; insertion order is listing order
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Store holding the built-in mock feed
    pub fn seeded() -> Self {
        Self::new(seed_posts())
    }
}

#[async_trait]
impl BasePostStore for MemoryPostStore {
    async fn list(&self, bounds: SliceBounds) -> Result<PostSlice> {
        let posts = self.posts.read().map_err(poisoned)?;
        let items = posts[bounds.resolve(posts.len())].to_vec();
        Ok(PostSlice {
            items,
            total: posts.len(),
        })
    }

    async fn find_post(&self, id: i64) -> Result<Option<Post>> {
        let posts = self.posts.read().map_err(poisoned)?;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn remove_by_id(&self, id: i64) -> Result<Option<usize>> {
        let mut posts = self.posts.write().map_err(poisoned)?;
        let Some(index) = posts.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        posts.remove(index);
        debug!(post_id = id, index, remaining = posts.len(), "Removed post");
        Ok(Some(index))
    }

    async fn post_count(&self) -> Result<usize> {
        Ok(self.posts.read().map_err(poisoned)?.len())
    }
}
