//! Port for probing external dependencies during readiness checks.

use async_trait::async_trait;

/// A dependency the service needs in order to handle traffic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DependencyHealthCheck: Send + Sync {
    /// Name reported in the readiness report.
    fn name(&self) -> &'static str;

    /// Probe the dependency, returning a human-readable reason on failure.
    async fn check(&self) -> Result<(), String>;
}
