// HTTP routes
pub mod auth;
pub mod health;
pub mod posts;

pub use auth::*;
pub use health::*;
pub use posts::*;
