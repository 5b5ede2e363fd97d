//! Aggregate release numbering: `v<isoyear><isoweek>.<minor>.<patch>`.
//!
//! The ISO week bucket keeps identifiers distinct across weeks; inside a
//! bucket the `(minor, patch)` pair only ever grows. The existing tag list is
//! the only state, so no counter is persisted anywhere else.

use crate::domain::model::IncrementSeverity;
use chrono::{Datelike, Local, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionAllocator {
    prefix: String,
}

impl VersionAllocator {
    /// Allocator for the bucket containing `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        let week = date.iso_week();
        Self {
            prefix: format!("v{}{:02}", week.year(), week.week()),
        }
    }

    /// Allocator for the current local week.
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Highest `(minor, patch)` among tags in this bucket.
    pub fn latest_in_bucket<S: AsRef<str>>(&self, tags: &[S]) -> Option<(u64, u64)> {
        tags.iter()
            .filter_map(|tag| self.parse_bucket_tag(tag.as_ref().trim()))
            .max()
    }

    /// Components that cannot be incremented are treated like unparseable tags.
    fn parse_bucket_tag(&self, tag: &str) -> Option<(u64, u64)> {
        let rest = tag.strip_prefix(self.prefix.as_str())?.strip_prefix('.')?;
        let mut parts = rest.split('.');
        let minor = parts.next()?.parse::<u64>().ok()?;
        let patch = parts.next()?.parse::<u64>().ok()?;
        minor.checked_add(1)?;
        patch.checked_add(1)?;
        Some((minor, patch))
    }

    pub fn next_version<S: AsRef<str>>(&self, severity: IncrementSeverity, tags: &[S]) -> String {
        let (minor, patch) = match (self.latest_in_bucket(tags), severity) {
            (None, IncrementSeverity::Patch) => (0, 0),
            (None, _) => (1, 0),
            (Some((minor, _)), IncrementSeverity::Minor | IncrementSeverity::Major) => {
                (minor + 1, 0)
            }
            (Some((minor, patch)), IncrementSeverity::Patch) => (minor, patch + 1),
        };

        format!("{}.{}.{}", self.prefix, minor, patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_52_of_2024() -> VersionAllocator {
        VersionAllocator::for_date(NaiveDate::from_ymd_opt(2024, 12, 23).unwrap())
    }

    #[test]
    fn test_prefix_uses_iso_week_year() {
        assert_eq!(week_52_of_2024().prefix(), "v202452");
        // 2024-12-30 belongs to ISO week 1 of 2025
        let allocator = VersionAllocator::for_date(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
        assert_eq!(allocator.prefix(), "v202501");
        let allocator = VersionAllocator::for_date(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(allocator.prefix(), "v202610");
    }

    #[test]
    fn test_patch_increments_within_bucket() {
        let tags = ["v202452.0.0", "v202452.0.1"];
        assert_eq!(
            week_52_of_2024().next_version(IncrementSeverity::Patch, &tags),
            "v202452.0.2"
        );
    }

    #[test]
    fn test_minor_and_major_bump_minor_and_reset_patch() {
        let tags = ["v202452.0.0", "v202452.0.1"];
        let allocator = week_52_of_2024();
        assert_eq!(allocator.next_version(IncrementSeverity::Minor, &tags), "v202452.1.0");
        assert_eq!(allocator.next_version(IncrementSeverity::Major, &tags), "v202452.1.0");
    }

    #[test]
    fn test_empty_bucket_starts_at_zero() {
        let tags: [&str; 0] = [];
        assert_eq!(
            week_52_of_2024().next_version(IncrementSeverity::Patch, &tags),
            "v202452.0.0"
        );
        assert_eq!(
            week_52_of_2024().next_version(IncrementSeverity::Minor, &tags),
            "v202452.1.0"
        );
    }

    #[test]
    fn test_other_buckets_and_malformed_tags_are_ignored() {
        let tags = [
            "v202451.4.9",
            "v202501.0.0",
            "v202452.x.1",
            "v202452.3",
            "v2024520.9.9",
            "release-1",
            "v202452.1.2",
            "",
        ];
        let allocator = week_52_of_2024();
        assert_eq!(allocator.latest_in_bucket(&tags), Some((1, 2)));
        assert_eq!(allocator.next_version(IncrementSeverity::Patch, &tags), "v202452.1.3");
    }

    #[test]
    fn test_tags_at_counter_limit_are_ignored() {
        let tags = [
            "v202452.0.18446744073709551615",
            "v202452.18446744073709551615.0",
            "v202452.0.4",
        ];
        let allocator = week_52_of_2024();
        assert_eq!(allocator.latest_in_bucket(&tags), Some((0, 4)));
        assert_eq!(allocator.next_version(IncrementSeverity::Patch, &tags), "v202452.0.5");
        assert_eq!(allocator.next_version(IncrementSeverity::Minor, &tags), "v202452.1.0");
    }

    #[test]
    fn test_ordering_is_numeric_minor_then_patch() {
        let tags = ["v202452.2.0", "v202452.10.0", "v202452.9.15", "v202452.10.1"];
        assert_eq!(week_52_of_2024().latest_in_bucket(&tags), Some((10, 1)));
    }
}
