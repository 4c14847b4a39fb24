// Test support utilities for integration tests

use crate::trending::TrendingStore;

/// Open a throwaway in-memory trending store.
pub async fn in_memory_trending_store() -> TrendingStore {
    TrendingStore::connect_url("sqlite::memory:")
        .await
        .expect("Failed to open in-memory trending store")
}

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
