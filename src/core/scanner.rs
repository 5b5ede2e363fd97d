use crate::core::version::compare_severity;
use crate::core::{Manifest, TagRegistry};
use crate::domain::model::{ScanReport, ServiceUpdate};

/// Walks the manifest's services in order and moves each one to its
/// registry's latest tag.
pub struct UpdateScanner<'a, R: TagRegistry + ?Sized> {
    registry: &'a R,
}

impl<'a, R: TagRegistry + ?Sized> UpdateScanner<'a, R> {
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Updates `manifest` in place. Registry failures skip that service only.
    pub async fn scan(&self, manifest: &mut Manifest) -> ScanReport {
        let mut report = ScanReport::default();

        for service in manifest.services.iter_mut() {
            tracing::info!(
                "🔍 Checking service: {} (current: {})",
                service.name,
                service.version
            );

            let latest = match self.registry.latest_tag(&service.image).await {
                Ok(latest) => latest,
                Err(e) => {
                    tracing::warn!("⚠️ Error checking registry for {}: {}", service.name, e);
                    report.skipped.push(service.name.clone());
                    continue;
                }
            };

            match latest {
                Some(tag) if !tag.is_empty() && tag != service.version => {
                    tracing::info!(
                        "⬆️ Found update for {}: {} -> {}",
                        service.name,
                        service.version,
                        tag
                    );

                    let severity = compare_severity(&service.version, &tag);
                    report.max_severity = report.max_severity.max(severity);
                    report.updates.push(ServiceUpdate {
                        name: service.name.clone(),
                        from: std::mem::replace(&mut service.version, tag.clone()),
                        to: tag,
                        severity,
                    });
                }
                _ => tracing::info!("No update for {}", service.name),
            }
        }

        report
    }
}
