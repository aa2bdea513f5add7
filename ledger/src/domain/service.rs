use async_trait::async_trait;

/// Admission check for inbound calls. The backing limiter is an external
/// collaborator; the only contract is "is this call allowed under this
/// key". An error from the guard is an error, not an allow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateGuard: Send + Sync {
    async fn allow(&self, key: &str) -> anyhow::Result<bool>;
}
