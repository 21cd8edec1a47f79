/// Data structures for Site Launcher
use serde::{Deserialize, Serialize};

/// A saved website: a friendly name and a normalized URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub url: String,
}

impl Site {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Site {
        Site {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Key used to wire this site's remove action, see [`derive_key`]
    pub fn key(&self) -> &str {
        derive_key(&self.url)
    }
}

/// Second dot-delimited segment of a URL.
///
/// `http://sub.example.com` and `http://sub.example.org` both give
/// `"example"`, and `http://a.com` gives `"com"`. Stored lists from earlier
/// releases were keyed this way so the scheme is kept as is. Returns an empty
/// string for a URL without a dot.
pub fn derive_key(url: &str) -> &str {
    url.split('.').nth(1).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_creation() {
        let site = Site::new("Reddit", "http://reddit.com");

        assert_eq!(site.name, "Reddit");
        assert_eq!(site.url, "http://reddit.com");
    }

    #[test]
    fn test_derive_key() {
        assert_eq!(derive_key("http://sub.example.com"), "example");
        assert_eq!(derive_key("https://www.google.com/search"), "google");
        assert_eq!(derive_key("http://a.com"), "com");
        assert_eq!(derive_key("http://localhost"), "");
    }

    #[test]
    fn test_derive_key_collides_across_hosts() {
        let com = Site::new("Example", "http://sub.example.com");
        let org = Site::new("Example Org", "http://sub.example.org");

        assert_eq!(com.key(), org.key());
    }

    #[test]
    fn test_serialized_shape() {
        let site = Site::new("Reddit", "http://reddit.com");

        let json = serde_json::to_value(&site).unwrap();

        assert_eq!(json, serde_json::json!({"name": "Reddit", "url": "http://reddit.com"}));
    }
}
