use crate::core::{Manifest, Storage};
use crate::utils::error::{ReleaseError, Result};

/// Loads and saves the release manifest through a `Storage` backend.
///
/// Both operations work on the whole file; there is no partial update and no
/// locking.
pub struct ManifestStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ManifestStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn load(&self, path: &str) -> Result<Manifest> {
        let data = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| ReleaseError::ManifestUnreadable {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let manifest: Manifest =
            serde_json::from_slice(&data).map_err(|e| ReleaseError::ManifestUnreadable {
                path: path.to_string(),
                message: format!("invalid manifest JSON: {}", e),
            })?;

        tracing::debug!(
            "Loaded manifest {} (release {}, {} services)",
            path,
            manifest.release_version,
            manifest.services.len()
        );
        Ok(manifest)
    }

    pub async fn save(&self, path: &str, manifest: &Manifest) -> Result<()> {
        let json = serde_json::to_string_pretty(manifest).map_err(|e| {
            ReleaseError::ManifestUnwritable {
                path: path.to_string(),
                message: e.to_string(),
            }
        })?;

        self.storage
            .write_file(path, json.as_bytes())
            .await
            .map_err(|e| ReleaseError::ManifestUnwritable {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("Wrote manifest {} ({} bytes)", path, json.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Service;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        read_only: bool,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ReleaseError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.read_only {
                return Err(ReleaseError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only storage",
                )));
            }
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn sample_manifest() -> Manifest {
        Manifest {
            release_version: "v202452.0.1".to_string(),
            services: vec![
                Service {
                    name: "web".to_string(),
                    image: "nginx".to_string(),
                    version: "1.27.3".to_string(),
                },
                Service {
                    name: "api".to_string(),
                    image: "acme/api".to_string(),
                    version: "v2.4.0".to_string(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip_preserves_order() {
        let store = ManifestStore::new(MockStorage::default());
        let manifest = sample_manifest();

        store.save("release_manifest.json", &manifest).await.unwrap();
        let loaded = store.load("release_manifest.json").await.unwrap();

        assert_eq!(loaded, manifest);
        assert_eq!(loaded.services[0].name, "web");
        assert_eq!(loaded.services[1].name, "api");
    }

    #[tokio::test]
    async fn test_save_writes_two_space_indented_json() {
        let storage = MockStorage::default();
        let store = ManifestStore::new(storage.clone());

        store.save("m.json", &sample_manifest()).await.unwrap();

        let raw = storage.read_file("m.json").await.unwrap();
        let text = String::from_utf8(raw).unwrap();
        assert!(text.starts_with("{\n  \"release_version\": \"v202452.0.1\",\n  \"services\": ["));
        assert!(text.contains("\n    {\n      \"name\": \"web\","));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_unreadable() {
        let store = ManifestStore::new(MockStorage::default());

        let err = store.load("missing.json").await.unwrap_err();

        assert!(matches!(err, ReleaseError::ManifestUnreadable { ref path, .. } if path == "missing.json"));
    }

    #[tokio::test]
    async fn test_load_malformed_json_is_unreadable() {
        let storage = MockStorage::default();
        storage
            .write_file("m.json", br#"{"release_version": "v1", "services": "nope"}"#)
            .await
            .unwrap();
        let store = ManifestStore::new(storage);

        let err = store.load("m.json").await.unwrap_err();

        assert!(matches!(err, ReleaseError::ManifestUnreadable { .. }));
    }

    #[tokio::test]
    async fn test_save_failure_is_unwritable() {
        let storage = MockStorage {
            read_only: true,
            ..MockStorage::default()
        };
        let store = ManifestStore::new(storage);

        let err = store.save("m.json", &sample_manifest()).await.unwrap_err();

        assert!(matches!(err, ReleaseError::ManifestUnwritable { .. }));
    }
}
