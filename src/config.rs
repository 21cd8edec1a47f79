/// Compile-time settings for the popup
use std::time::Duration;

/// Key under `chrome.storage.sync` holding the whole site list.
///
/// Matches the key earlier releases of the extension wrote, so existing
/// users keep their saved sites.
pub const STORAGE_KEY: &str = "websites";

/// How long a field notice stays on screen
pub const NOTICE_TIMEOUT: Duration = Duration::from_millis(3500);

/// Scheme prepended to URLs typed without one
pub const DEFAULT_SCHEME: &str = "http://";
