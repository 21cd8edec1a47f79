/// Validation and normalization of user-entered sites
use crate::config::DEFAULT_SCHEME;
use crate::error::ValidationError;
use crate::site_data::Site;
use regex::Regex;
use std::sync::LazyLock;

/// Loose "looks like a domain" check.
///
/// Optional http(s) scheme, an optional lowercase subdomain label, one
/// alphanumeric/hyphen label, a dot and a lowercase final label. Only the
/// start is anchored, so `reddit.com/r/rust` passes, and so does
/// `reddit.comFOO`. This is not an RFC validator.
static HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([a-z]+\.)?([a-zA-Z0-9\-])+\.[a-z]+").expect("host pattern is valid")
});

/// Validate a name/URL pair and normalize the URL.
///
/// Both fields are always checked; every problem found is returned so each
/// field can be flagged at once. The name is compared as typed, without
/// trimming.
pub fn validate(name: &str, raw_url: &str) -> Result<Site, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    if !is_valid_url(raw_url) {
        errors.push(ValidationError::InvalidUrl);
    }

    if errors.is_empty() {
        Ok(Site::new(name, normalize_url(raw_url)))
    } else {
        Err(errors)
    }
}

/// Check a raw URL against the host pattern
pub fn is_valid_url(raw_url: &str) -> bool {
    !raw_url.is_empty() && HOST_PATTERN.is_match(raw_url)
}

/// Prefix the default scheme when the URL contains no `//`.
///
/// Any `//`, even one that is not a scheme separator, leaves the input
/// untouched.
pub fn normalize_url(raw_url: &str) -> String {
    if raw_url.contains("//") {
        raw_url.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, raw_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_adds_scheme() {
        let site = validate("Reddit", "reddit.com").unwrap();

        assert_eq!(site.name, "Reddit");
        assert_eq!(site.url, "http://reddit.com");
    }

    #[test]
    fn test_validate_keeps_existing_scheme() {
        assert_eq!(validate("Rust", "https://www.rust-lang.org").unwrap().url, "https://www.rust-lang.org");
        assert_eq!(validate("Rust", "http://rust-lang.org").unwrap().url, "http://rust-lang.org");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in ["reddit.com", "https://news.ycombinator.com", "sub.example.org/path"] {
            let once = validate("Site", raw).unwrap().url;
            let twice = validate("Site", &once).unwrap().url;

            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_validate_empty_name() {
        assert_eq!(validate("", "reddit.com"), Err(vec![ValidationError::EmptyName]));
    }

    #[test]
    fn test_validate_name_is_not_trimmed() {
        assert!(validate(" ", "reddit.com").is_ok());
    }

    #[test]
    fn test_validate_invalid_url() {
        assert_eq!(validate("Reddit", "not a url"), Err(vec![ValidationError::InvalidUrl]));
        assert_eq!(validate("Reddit", ""), Err(vec![ValidationError::InvalidUrl]));
        assert_eq!(validate("Reddit", "localhost"), Err(vec![ValidationError::InvalidUrl]));
    }

    #[test]
    fn test_validate_reports_both_fields() {
        assert_eq!(
            validate("", "nope"),
            Err(vec![ValidationError::EmptyName, ValidationError::InvalidUrl])
        );
    }

    #[test]
    fn test_url_pattern_is_loose() {
        assert!(is_valid_url("reddit.com/r/rust"));
        assert!(is_valid_url("my-site9.io"));
        assert!(is_valid_url("https://mail.google.com"));
        // final label must start lowercase
        assert!(!is_valid_url("example.COM"));
        assert!(!is_valid_url("ftp://example.com"));
    }

    #[test]
    fn test_normalize_any_double_slash() {
        assert_eq!(normalize_url("example.com//x"), "example.com//x");
        assert_eq!(normalize_url("example.com/x"), "http://example.com/x");
    }
}
