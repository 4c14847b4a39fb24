// Library exports for integration tests and reusable components

// Internal modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod ui;

pub mod api_keys;
pub mod debounce;
pub mod models;
pub mod search_context;
pub mod tmdb;
pub mod trending;
pub mod trending_context;

// Test support (only available with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod test_support;
