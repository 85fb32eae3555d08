//! Test fixtures for creating tokens.
//!
//! Tokens are signed directly with the fixture secret so tests can craft
//! identities the login endpoint would never issue.

use chrono::{DateTime, Utc};
use feed_core::domains::auth::{JwtService, Role, User};
use feed_core::kernel::TEST_JWT_SECRET;

/// Fresh token for an arbitrary identity.
pub fn token_for(id: &str, role: Role) -> String {
    JwtService::new(TEST_JWT_SECRET)
        .create_token(&User::new(id, role))
        .expect("Failed to sign test token")
}

/// Token issued at `issued_at`, for expiry tests.
pub fn token_issued_at(id: &str, role: Role, issued_at: DateTime<Utc>) -> String {
    JwtService::new(TEST_JWT_SECRET)
        .create_token_issued_at(&User::new(id, role), issued_at)
        .expect("Failed to sign test token")
}

pub fn admin_token() -> String {
    token_for("u2", Role::Admin)
}

pub fn user_token() -> String {
    token_for("u1", Role::User)
}
