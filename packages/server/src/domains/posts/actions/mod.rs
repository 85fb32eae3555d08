//! Posts domain actions - entry-point business logic
//!
//! Called directly from HTTP routes.
//! Actions are self-contained: they take raw input, handle ID parsing,
//! role checks, and return final models/results.

mod delete_post;
mod list_posts;

pub use delete_post::delete_post;
pub use list_posts::{list_posts, PostListing};
