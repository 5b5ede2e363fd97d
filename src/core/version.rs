//! `major.minor.patch` parsing and change-severity classification.
//!
//! Parsing is tolerant: an optional leading `v` is stripped and segments after
//! the third are ignored, so `v1.2.3-alpine.1` style suffixes on a fourth
//! segment still parse. Anything that cannot be read as three non-negative
//! integers is a `MalformedVersion`.

use crate::domain::model::{IncrementSeverity, SemanticVersion};
use crate::utils::error::{ReleaseError, Result};

pub fn parse(input: &str) -> Result<SemanticVersion> {
    let trimmed = input.strip_prefix('v').unwrap_or(input);
    let parts: Vec<&str> = trimmed.split('.').collect();

    if parts.len() < 3 {
        return Err(ReleaseError::MalformedVersion {
            input: input.to_string(),
            reason: format!("expected at least 3 segments, found {}", parts.len()),
        });
    }

    Ok(SemanticVersion {
        major: parse_component(input, parts[0])?,
        minor: parse_component(input, parts[1])?,
        patch: parse_component(input, parts[2])?,
    })
}

fn parse_component(input: &str, segment: &str) -> Result<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseError::MalformedVersion {
            input: input.to_string(),
            reason: format!("segment '{}' is not a non-negative integer", segment),
        });
    }

    segment
        .parse::<u64>()
        .map_err(|e| ReleaseError::MalformedVersion {
            input: input.to_string(),
            reason: format!("segment '{}': {}", segment, e),
        })
}

/// Classifies the change from `old` to `new`.
///
/// Unparseable inputs (for example a floating `latest` tag) fall back to
/// `Patch`. Patch-level differences and downgrades are also `Patch`.
pub fn compare_severity(old: &str, new: &str) -> IncrementSeverity {
    let (old, new) = match parse(old).and_then(|o| parse(new).map(|n| (o, n))) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::debug!("Falling back to patch severity: {}", e);
            return IncrementSeverity::Patch;
        }
    };

    if new.major > old.major {
        IncrementSeverity::Major
    } else if new.minor > old.minor {
        IncrementSeverity::Minor
    } else {
        IncrementSeverity::Patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_optional_v_prefix() {
        let cases = [("v1.2.3", (1, 2, 3)), ("1.2.3", (1, 2, 3)), ("v0.0.1", (0, 0, 1))];

        for (input, (major, minor, patch)) in cases {
            let parsed = parse(input).unwrap();
            assert_eq!(
                (parsed.major, parsed.minor, parsed.patch),
                (major, minor, patch),
                "parse({:?})",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_versions() {
        for input in ["latest", "v1.2", "", "v1.x.3", "1.-2.3", "1..3"] {
            assert!(
                matches!(parse(input), Err(ReleaseError::MalformedVersion { .. })),
                "expected {:?} to be malformed",
                input
            );
        }
    }

    #[test]
    fn test_parse_ignores_extra_segments() {
        let parsed = parse("v1.25.3.4").unwrap();
        assert_eq!(parsed.to_string(), "1.25.3");
    }

    #[test]
    fn test_compare_severity_table() {
        let cases = [
            ("v1.0.0", "v1.0.1", IncrementSeverity::Patch),
            ("v1.0.0", "v1.1.0", IncrementSeverity::Minor),
            ("v1.0.0", "v2.0.0", IncrementSeverity::Major),
            ("v1.0.0", "v1.0.0", IncrementSeverity::Patch),
            ("latest", "v1.0.0", IncrementSeverity::Patch),
            ("v1.0.0", "latest", IncrementSeverity::Patch),
        ];

        for (old, new, expected) in cases {
            assert_eq!(compare_severity(old, new), expected, "{} -> {}", old, new);
        }
    }

    #[test]
    fn test_compare_severity_on_major_downgrade() {
        assert_eq!(compare_severity("2.3.4", "1.2.9"), IncrementSeverity::Patch);
        // major drops while minor rises: minor still counts
        assert_eq!(compare_severity("2.3.0", "1.9.0"), IncrementSeverity::Minor);
        assert_eq!(compare_severity("2.1.0", "1.5.0"), IncrementSeverity::Minor);
    }
}
