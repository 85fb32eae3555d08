//! Posts domain - paginated listing and admin-only deletion

pub mod actions;
pub mod models;

pub use actions::{delete_post, list_posts, PostListing};
pub use models::Post;
