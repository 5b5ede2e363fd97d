use serde::{Deserialize, Serialize};
use std::fmt;

/// A tracked deployable image. Identity is `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub image: String,
    pub version: String,
}

/// The persisted aggregate: release version plus the ordered service list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub release_version: String,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Magnitude of a detected change. Variant order is the severity order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IncrementSeverity {
    #[default]
    Patch,
    Minor,
    Major,
}

impl fmt::Display for IncrementSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IncrementSeverity::Patch => "patch",
            IncrementSeverity::Minor => "minor",
            IncrementSeverity::Major => "major",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUpdate {
    pub name: String,
    pub from: String,
    pub to: String,
    pub severity: IncrementSeverity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub updates: Vec<ServiceUpdate>,
    pub skipped: Vec<String>,
    pub max_severity: IncrementSeverity,
}

impl ScanReport {
    pub fn is_dirty(&self) -> bool {
        !self.updates.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Every service is already at its latest tag; nothing was written.
    NoUpdates { skipped: Vec<String> },
    /// Dry run: what a real run would have done.
    Planned {
        version: String,
        report: ScanReport,
    },
    Released {
        version: String,
        report: ScanReport,
    },
}
