//! Test harness for integration testing.
//!
//! Each test gets a fresh router over its own fixture stores, so deletions in
//! one test never leak into another.

use feed_core::kernel::{ServerDeps, TestDependencies};
use feed_core::server::{build_router, RouterOptions};
use test_context::AsyncTestContext;

use super::HttpClient;

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     let response = ctx.client.get("/health", None).await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Dependencies behind the router - use these to inspect store state.
    pub deps: ServerDeps,
    /// Client bound to the router.
    pub client: HttpClient,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }

    async fn teardown(self) {
        // Stores are dropped with the harness
    }
}

impl TestHarness {
    /// Harness over the default fixtures: users u1 (user) and u2 (admin),
    /// posts 1..=3, test signing secret, no rate limiting.
    pub fn new() -> Self {
        Self::with_deps(TestDependencies::new())
    }

    pub fn with_deps(deps: TestDependencies) -> Self {
        Self::with_options(deps, RouterOptions::default())
    }

    pub fn with_options(deps: TestDependencies, options: RouterOptions) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = deps.into_server_deps();
        let router = build_router(deps.clone(), options).expect("Failed to build router");

        Self {
            deps,
            client: HttpClient::new(router),
        }
    }

    /// Number of posts currently in the store.
    pub async fn post_count(&self) -> usize {
        self.deps
            .posts
            .post_count()
            .await
            .expect("post store failed")
    }
}
