use crate::core::{ConfigProvider, TagRegistry};
use crate::utils::error::{ReleaseError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_REGISTRY_URL: &str = "https://hub.docker.com";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const FLOATING_ALIAS: &str = "latest";
const OFFICIAL_NAMESPACE: &str = "library";

#[derive(Debug, Deserialize)]
struct TagPage {
    #[serde(default)]
    results: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// Docker Hub style tag listing client.
#[derive(Debug, Clone)]
pub struct DockerHubRegistry {
    client: Client,
    base_url: String,
    page_size: usize,
    floating_alias: String,
}

impl DockerHubRegistry {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            floating_alias: FLOATING_ALIAS.to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.registry_url())
            .with_page_size(config.page_size())
            .with_floating_alias(config.floating_alias())
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_floating_alias(mut self, alias: impl Into<String>) -> Self {
        self.floating_alias = alias.into();
        self
    }

    pub fn tags_url(&self, image: &str) -> String {
        let (namespace, repository) = split_image(image);
        format!(
            "{}/v2/repositories/{}/{}/tags",
            self.base_url, namespace, repository
        )
    }

    async fn fetch_tag_names(&self, image: &str) -> Result<Vec<String>> {
        let url = self.tags_url(image);
        let unavailable = |message: String| ReleaseError::RegistryUnavailable {
            image: image.to_string(),
            message,
        };

        tracing::debug!("Making registry request to: {}", url);
        let response = self
            .client
            .get(&url)
            .query(&[("page_size", self.page_size)])
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        tracing::debug!("Registry response status: {}", response.status());
        if !response.status().is_success() {
            return Err(unavailable(format!(
                "registry API returned {}",
                response.status()
            )));
        }

        let page: TagPage = response
            .json()
            .await
            .map_err(|e| unavailable(format!("invalid tag listing: {}", e)))?;

        Ok(page.results.into_iter().map(|entry| entry.name).collect())
    }
}

#[async_trait]
impl TagRegistry for DockerHubRegistry {
    async fn latest_tag(&self, image: &str) -> Result<Option<String>> {
        let names = self.fetch_tag_names(image).await?;
        Ok(select_tag(&names, &self.floating_alias))
    }
}

/// Splits `namespace/repository`; bare names are official images.
pub fn split_image(image: &str) -> (&str, &str) {
    image
        .split_once('/')
        .unwrap_or((OFFICIAL_NAMESPACE, image))
}

/// First concrete tag in registry order. The floating alias is only returned
/// when it is all the registry listed.
pub fn select_tag(names: &[String], floating_alias: &str) -> Option<String> {
    names
        .iter()
        .find(|name| name.as_str() != floating_alias)
        .or_else(|| names.first())
        .cloned()
}
