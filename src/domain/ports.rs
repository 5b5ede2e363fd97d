use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn manifest_path(&self) -> &str;
    fn registry_url(&self) -> &str;
    fn page_size(&self) -> usize;
    fn floating_alias(&self) -> &str;
    fn update_message(&self) -> &str;
    fn release_message_prefix(&self) -> &str;
    fn dry_run(&self) -> bool;

    fn release_message(&self, version: &str) -> String {
        format!("{} {}", self.release_message_prefix(), version)
    }
}

/// Registry lookup for a single image. `Ok(None)` means the registry listed no tags.
#[async_trait]
pub trait TagRegistry: Send + Sync {
    async fn latest_tag(&self, image: &str) -> Result<Option<String>>;
}

/// Blocking version-control collaborator. Every call runs exactly once and
/// failures are surfaced to the caller unchanged.
pub trait VersionControl {
    fn list_tags(&self) -> Result<Vec<String>>;
    fn commit_path(&self, path: &str, message: &str) -> Result<()>;
    fn create_tag(&self, name: &str) -> Result<()>;
}
