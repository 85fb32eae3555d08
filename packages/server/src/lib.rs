// Social Feed - API Core
//
// This crate provides the backend API for the social feed: token-based login,
// paginated post listing and admin-only post deletion over an injected store.
//
// Business logic lives per-domain in domains/*/actions; HTTP wiring in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
