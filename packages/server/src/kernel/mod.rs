//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod memory_store;
pub mod seed;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use memory_store::{MemoryPostStore, MemoryUserStore};
pub use seed::{seed_posts, seed_users};
pub use test_dependencies::{FailingPostStore, TestDependencies, TEST_JWT_SECRET};
pub use traits::*;
