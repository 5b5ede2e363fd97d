pub mod cli;
pub mod toml_config;

use crate::adapters::registry::{DEFAULT_PAGE_SIZE, DEFAULT_REGISTRY_URL, FLOATING_ALIAS};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_MANIFEST_PATH: &str = "release_manifest.json";
pub const DEFAULT_UPDATE_MESSAGE: &str = "chore: update services to latest versions";
pub const DEFAULT_RELEASE_MESSAGE_PREFIX: &str = "chore: release";

/// Fully resolved settings for one release run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    pub manifest_path: String,
    pub repo: String,
    pub registry_url: String,
    pub page_size: usize,
    pub floating_alias: String,
    pub update_message: String,
    pub release_message_prefix: String,
    pub dry_run: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            repo: ".".to_string(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            floating_alias: FLOATING_ALIAS.to_string(),
            update_message: DEFAULT_UPDATE_MESSAGE.to_string(),
            release_message_prefix: DEFAULT_RELEASE_MESSAGE_PREFIX.to_string(),
            dry_run: false,
        }
    }
}

impl ReleaseConfig {
    /// Layers a TOML file over the built-in defaults.
    pub fn with_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(v) = &file.manifest.path {
            self.manifest_path = v.clone();
        }
        if let Some(v) = &file.git.repo {
            self.repo = v.clone();
        }
        if let Some(v) = &file.git.update_message {
            self.update_message = v.clone();
        }
        if let Some(v) = &file.git.release_message_prefix {
            self.release_message_prefix = v.clone();
        }
        if let Some(v) = &file.registry.base_url {
            self.registry_url = v.clone();
        }
        if let Some(v) = file.registry.page_size {
            self.page_size = v;
        }
        if let Some(v) = &file.registry.floating_alias {
            self.floating_alias = v.clone();
        }
        self
    }
}

impl ConfigProvider for ReleaseConfig {
    fn manifest_path(&self) -> &str {
        &self.manifest_path
    }

    fn registry_url(&self) -> &str {
        &self.registry_url
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn floating_alias(&self) -> &str {
        &self.floating_alias
    }

    fn update_message(&self) -> &str {
        &self.update_message
    }

    fn release_message_prefix(&self) -> &str {
        &self.release_message_prefix
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for ReleaseConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("manifest", &self.manifest_path)?;
        validation::validate_path("repo", &self.repo)?;
        validation::validate_url("registry_url", &self.registry_url)?;
        validation::validate_positive_number("page_size", self.page_size, 1)?;
        validation::validate_non_empty_string("floating_alias", &self.floating_alias)?;
        validation::validate_non_empty_string("update_message", &self.update_message)?;
        validation::validate_non_empty_string(
            "release_message_prefix",
            &self.release_message_prefix,
        )?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::TomlConfig;
    use super::ReleaseConfig;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "releaser")]
    #[command(about = "Track service images and cut week-bucketed release tags")]
    pub struct CliConfig {
        /// Release manifest JSON file, relative to the repository
        #[arg(long)]
        pub manifest: Option<String>,

        /// Git working directory
        #[arg(long)]
        pub repo: Option<String>,

        /// Registry base URL
        #[arg(long)]
        pub registry_url: Option<String>,

        /// Number of most recent tags requested per image
        #[arg(long)]
        pub page_size: Option<usize>,

        /// Tag name treated as a floating alias
        #[arg(long)]
        pub floating_alias: Option<String>,

        /// Optional TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Scan and compute the next version without writing, committing or tagging
        #[arg(long)]
        pub dry_run: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// Defaults, then the TOML file, then explicit flags.
        pub fn resolve(&self) -> Result<ReleaseConfig> {
            let mut config = ReleaseConfig::default();

            if let Some(path) = &self.config {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                config = config.with_toml(&file);
            }

            if let Some(v) = &self.manifest {
                config.manifest_path = v.clone();
            }
            if let Some(v) = &self.repo {
                config.repo = v.clone();
            }
            if let Some(v) = &self.registry_url {
                config.registry_url = v.clone();
            }
            if let Some(v) = self.page_size {
                config.page_size = v;
            }
            if let Some(v) = &self.floating_alias {
                config.floating_alias = v.clone();
            }
            config.dry_run = self.dry_run;

            config.validate()?;
            Ok(config)
        }
    }
}
