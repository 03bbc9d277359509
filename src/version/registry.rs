//! Source trait for fetching a repository's release listing

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::ReleaseRecord;

/// Trait for fetching release records from a remote source
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches every release record the source publishes
    ///
    /// # Returns
    /// * `Ok(Vec<ReleaseRecord>)` - Records in the order the source lists them
    /// * `Err(RegistryError)` - If the request fails or returns a non-success status
    async fn fetch_releases(&self) -> Result<Vec<ReleaseRecord>, RegistryError>;
}
