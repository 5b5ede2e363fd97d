pub mod allocator;
pub mod manifest;
pub mod orchestrator;
pub mod scanner;
pub mod version;

pub use crate::domain::model::{IncrementSeverity, Manifest, Service};
pub use crate::domain::ports::{ConfigProvider, Storage, TagRegistry, VersionControl};
pub use crate::utils::error::Result;
