// TestDependencies - fixture implementations for testing
//
// Provides stores that can be injected into ServerDeps for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

use super::{
    BasePostStore, BaseUserStore, MemoryPostStore, MemoryUserStore, PostSlice, ServerDeps,
};
use crate::common::SliceBounds;
use crate::domains::auth::{JwtService, Role, User};
use crate::domains::posts::Post;

pub const TEST_JWT_SECRET: &str = "test_secret_key";

// =============================================================================
// Failing Post Store
// =============================================================================

/// Post store whose every call fails, for exercising the unhandled-fault path
pub struct FailingPostStore;

#[async_trait]
impl BasePostStore for FailingPostStore {
    async fn list(&self, _bounds: SliceBounds) -> Result<PostSlice> {
        Err(anyhow!("post store unavailable"))
    }

    async fn find_post(&self, _id: i64) -> Result<Option<Post>> {
        Err(anyhow!("post store unavailable"))
    }

    async fn remove_by_id(&self, _id: i64) -> Result<Option<usize>> {
        Err(anyhow!("post store unavailable"))
    }

    async fn post_count(&self) -> Result<usize> {
        Err(anyhow!("post store unavailable"))
    }
}

/// `count` posts with ids `1..=count`, titled "Post <id>"
pub fn numbered_posts(count: i64) -> Vec<Post> {
    let created_at = Utc
        .with_ymd_and_hms(2025, 7, 19, 12, 0, 0)
        .single()
        .expect("fixture timestamp is a valid UTC instant");
    (1..=count)
        .map(|id| {
            Post::new(
                id,
                format!("Post {}", id),
                format!("Content {}", id),
                "Test Author",
                &["test"],
                created_at,
            )
        })
        .collect()
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for ServerDeps with fixture stores
pub struct TestDependencies {
    users: Vec<User>,
    posts: Arc<dyn BasePostStore>,
    jwt_secret: Option<String>,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    /// Seeded users, three numbered posts, test secret
    pub fn new() -> Self {
        Self {
            users: vec![User::new("u1", Role::User), User::new("u2", Role::Admin)],
            posts: Arc::new(MemoryPostStore::new(numbered_posts(3))),
            jwt_secret: Some(TEST_JWT_SECRET.to_string()),
        }
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = Arc::new(MemoryPostStore::new(posts));
        self
    }

    pub fn with_post_store(mut self, store: Arc<dyn BasePostStore>) -> Self {
        self.posts = store;
        self
    }

    pub fn without_secret(mut self) -> Self {
        self.jwt_secret = None;
        self
    }

    pub fn into_server_deps(self) -> ServerDeps {
        let users: Arc<dyn BaseUserStore> = Arc::new(MemoryUserStore::new(self.users));
        ServerDeps::new(
            users,
            self.posts,
            self.jwt_secret
                .map(|secret| Arc::new(JwtService::new(&secret))),
        )
    }
}
