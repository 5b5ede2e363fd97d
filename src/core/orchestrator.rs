use crate::core::allocator::VersionAllocator;
use crate::core::manifest::ManifestStore;
use crate::core::scanner::UpdateScanner;
use crate::core::{ConfigProvider, Storage, TagRegistry, VersionControl};
use crate::domain::model::ReleaseOutcome;
use crate::utils::error::Result;

/// Runs one release transaction: load, scan, save, commit, allocate, save,
/// commit, tag.
///
/// Any failure after the first commit leaves earlier commits in place; the
/// caller is expected to inspect the repository before retrying.
pub struct ReleaseEngine<S, R, V, C>
where
    S: Storage,
    R: TagRegistry,
    V: VersionControl,
    C: ConfigProvider,
{
    store: ManifestStore<S>,
    registry: R,
    vcs: V,
    config: C,
    allocator: VersionAllocator,
}

impl<S, R, V, C> ReleaseEngine<S, R, V, C>
where
    S: Storage,
    R: TagRegistry,
    V: VersionControl,
    C: ConfigProvider,
{
    pub fn new(storage: S, registry: R, vcs: V, config: C) -> Self {
        Self {
            store: ManifestStore::new(storage),
            registry,
            vcs,
            config,
            allocator: VersionAllocator::current(),
        }
    }

    /// Pins the week bucket instead of using today's date.
    pub fn with_allocator(mut self, allocator: VersionAllocator) -> Self {
        self.allocator = allocator;
        self
    }

    pub async fn run(&self) -> Result<ReleaseOutcome> {
        let path = self.config.manifest_path();
        tracing::info!("🚀 Starting release scan for {}", path);

        let mut manifest = self.store.load(path).await?;
        let report = UpdateScanner::new(&self.registry).scan(&mut manifest).await;

        if !report.skipped.is_empty() {
            tracing::warn!(
                "Skipped {} service(s): {}",
                report.skipped.len(),
                report.skipped.join(", ")
            );
        }

        if !report.is_dirty() {
            tracing::info!("No updates found.");
            return Ok(ReleaseOutcome::NoUpdates {
                skipped: report.skipped,
            });
        }

        tracing::info!(
            "{} service(s) updated, highest change: {}",
            report.updates.len(),
            report.max_severity
        );

        if self.config.dry_run() {
            let tags = self.vcs.list_tags()?;
            let version = self.allocator.next_version(report.max_severity, &tags);
            tracing::info!("Dry run: would release {}", version);
            return Ok(ReleaseOutcome::Planned { version, report });
        }

        self.store.save(path, &manifest).await?;
        self.vcs.commit_path(path, self.config.update_message())?;

        let tags = self.vcs.list_tags()?;
        let version = self.allocator.next_version(report.max_severity, &tags);
        tracing::info!("🏷️ Creating new tag: {}", version);

        manifest.release_version = version.clone();
        self.store.save(path, &manifest).await?;
        self.vcs.commit_path(path, &self.config.release_message(&version))?;
        self.vcs.create_tag(&version)?;

        tracing::info!("✅ Release {} created locally", version);
        Ok(ReleaseOutcome::Released { version, report })
    }
}
