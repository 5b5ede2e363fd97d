pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{git::SystemGit, registry::DockerHubRegistry};
pub use crate::config::{cli::LocalStorage, ReleaseConfig};
pub use crate::core::{
    allocator::VersionAllocator, manifest::ManifestStore, orchestrator::ReleaseEngine,
};
pub use crate::domain::model::{IncrementSeverity, Manifest, ReleaseOutcome, Service};
pub use crate::utils::error::{ReleaseError, Result};
