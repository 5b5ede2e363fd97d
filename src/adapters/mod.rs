// Adapters layer: concrete implementations for the registry and version control.

pub mod git;
pub mod registry;
