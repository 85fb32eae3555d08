//! Auth domain - handles login and session tokens
//!
//! Responsibilities:
//! - Looking up users by identifier
//! - Issuing and verifying signed, one-hour session tokens
//! - Role vocabulary shared with the authorization guard

pub mod actions;
pub mod jwt;
pub mod models;

pub use actions::{login, LoginResult};
pub use jwt::{Claims, JwtService, TokenError, TOKEN_TTL_SECONDS};
pub use models::{Role, User};
