use crate::utils::error::{ReleaseError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `releaser.toml`. Every section and key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub registry: RegistrySection,
    #[serde(default)]
    pub manifest: ManifestSection,
    #[serde(default)]
    pub git: GitSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySection {
    pub base_url: Option<String>,
    pub page_size: Option<usize>,
    pub floating_alias: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitSection {
    pub repo: Option<String>,
    pub update_message: Option<String>,
    pub release_message_prefix: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ReleaseError::ConfigError {
            message: format!(
                "cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReleaseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReleaseError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.registry.base_url {
            validation::validate_url("registry.base_url", url)?;
        }
        if let Some(page_size) = self.registry.page_size {
            validation::validate_positive_number("registry.page_size", page_size, 1)?;
        }
        if let Some(alias) = &self.registry.floating_alias {
            validation::validate_non_empty_string("registry.floating_alias", alias)?;
        }
        if let Some(path) = &self.manifest.path {
            validation::validate_path("manifest.path", path)?;
        }
        if let Some(repo) = &self.git.repo {
            validation::validate_path("git.repo", repo)?;
        }
        Ok(())
    }
}
