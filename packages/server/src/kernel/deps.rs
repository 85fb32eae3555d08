//! Server dependencies for actions (using traits for testability)
//!
//! This module provides the central dependency container used by all domain actions.
//! Stores sit behind trait abstractions so tests and future persistence layers can swap them.

use std::sync::Arc;

use crate::common::ApiError;
use crate::domains::auth::JwtService;
use crate::kernel::{BasePostStore, BaseUserStore, MemoryPostStore, MemoryUserStore};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub users: Arc<dyn BaseUserStore>,
    pub posts: Arc<dyn BasePostStore>,
    /// JWT service for token creation and verification; `None` when no secret is configured
    pub jwt_service: Option<Arc<JwtService>>,
}

impl ServerDeps {
    pub fn new(
        users: Arc<dyn BaseUserStore>,
        posts: Arc<dyn BasePostStore>,
        jwt_service: Option<Arc<JwtService>>,
    ) -> Self {
        Self {
            users,
            posts,
            jwt_service,
        }
    }

    /// Dependencies over the built-in mock data
    pub fn seeded(jwt_secret: Option<&str>) -> Self {
        Self::new(
            Arc::new(MemoryUserStore::seeded()),
            Arc::new(MemoryPostStore::seeded()),
            jwt_secret.map(|secret| Arc::new(JwtService::new(secret))),
        )
    }

    /// The signing service, or `MisconfiguredServer` when no secret was provided
    pub fn jwt(&self) -> Result<&JwtService, ApiError> {
        self.jwt_service
            .as_deref()
            .ok_or(ApiError::MisconfiguredServer)
    }
}
