use crate::utils::error::{ReleaseError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> ReleaseError {
    ReleaseError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Registry endpoints must be absolute http(s) URLs.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("registry_url", "https://hub.docker.com").is_ok());
        assert!(validate_url("registry_url", "http://localhost:5000").is_ok());
        assert!(validate_url("registry_url", "").is_err());
        assert!(validate_url("registry_url", "invalid-url").is_err());
        assert!(validate_url("registry_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("page_size", 5, 1).is_ok());
        assert!(validate_positive_number("page_size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_path_and_strings() {
        assert!(validate_path("manifest", "release_manifest.json").is_ok());
        assert!(validate_path("manifest", "").is_err());
        assert!(validate_path("manifest", "bad\0path").is_err());
        assert!(validate_non_empty_string("floating_alias", "latest").is_ok());
        assert!(validate_non_empty_string("floating_alias", "   ").is_err());
    }
}
