// ============================================================================
// Utilities Module
// Helper functions shared by binaries, benches and tests
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, init_test_logging};
