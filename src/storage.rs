/// Site list persistence: the in-memory list and the store it is saved to
use crate::error::{DuplicateError, StoreError};
use crate::site_data::Site;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Ordered list of saved sites, most recently added first.
///
/// Serializes as a bare JSON array of `{name, url}` objects, the format kept
/// under the storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteList {
    sites: Vec<Site>,
}

impl SiteList {
    pub fn new() -> Self {
        SiteList { sites: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Site> {
        self.sites.iter()
    }

    /// Every way `site` collides with a saved one, name first
    pub fn conflicts(&self, site: &Site) -> Vec<DuplicateError> {
        let mut conflicts = Vec::new();
        if self.sites.iter().any(|s| s.name == site.name) {
            conflicts.push(DuplicateError::DuplicateName);
        }
        if self.sites.iter().any(|s| s.url == site.url) {
            conflicts.push(DuplicateError::DuplicateUrl);
        }
        conflicts
    }

    /// Insert at the front unless the name or url is already taken
    pub fn insert(&mut self, site: Site) -> Result<(), Vec<DuplicateError>> {
        let conflicts = self.conflicts(&site);
        if !conflicts.is_empty() {
            return Err(conflicts);
        }
        self.sites.insert(0, site);
        Ok(())
    }

    /// Drop every site whose derived key is `key`, returning how many went
    pub fn remove_by_key(&mut self, key: &str) -> usize {
        let original_len = self.sites.len();
        self.sites.retain(|s| s.key() != key);
        original_len - self.sites.len()
    }
}

impl From<Vec<Site>> for SiteList {
    fn from(sites: Vec<Site>) -> Self {
        SiteList { sites }
    }
}

impl<'a> IntoIterator for &'a SiteList {
    type Item = &'a Site;
    type IntoIter = std::slice::Iter<'a, Site>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}

/// Whole-list key-value persistence.
///
/// There is no item-level update: every mutation writes the full list.
/// `load` returns `None` when nothing has been stored yet.
#[allow(async_fn_in_trait)]
pub trait SiteStore {
    async fn load(&self) -> Result<Option<SiteList>, StoreError>;

    async fn save(&self, sites: &SiteList) -> Result<(), StoreError>;
}

/// Store kept in memory, shared between clones.
///
/// Used by tests and anywhere the browser storage API is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    sites: Option<SiteList>,
    #[cfg(test)]
    fail_reads: bool,
    #[cfg(test)]
    fail_writes: bool,
    #[cfg(test)]
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sites(sites: SiteList) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().sites = Some(sites);
        store
    }

    /// What is currently persisted
    pub fn snapshot(&self) -> Option<SiteList> {
        self.inner.borrow().sites.clone()
    }

}

#[cfg(test)]
impl MemoryStore {
    /// Number of successful `save` calls
    pub(crate) fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }
}

impl SiteStore for MemoryStore {
    async fn load(&self) -> Result<Option<SiteList>, StoreError> {
        let state = self.inner.borrow();
        #[cfg(test)]
        if state.fail_reads {
            return Err(StoreError::Read("storage unavailable".to_string()));
        }
        Ok(state.sites.clone())
    }

    async fn save(&self, sites: &SiteList) -> Result<(), StoreError> {
        let mut state = self.inner.borrow_mut();
        #[cfg(test)]
        if state.fail_writes {
            return Err(StoreError::Write("storage unavailable".to_string()));
        }
        state.sites = Some(sites.clone());
        #[cfg(test)]
        {
            state.writes += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_list() -> SiteList {
        let mut list = SiteList::new();
        list.insert(Site::new("Example", "http://sub.example.com")).unwrap();
        list.insert(Site::new("Reddit", "http://reddit.com")).unwrap();
        list
    }

    #[test]
    fn test_site_list_new() {
        let list = SiteList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_insert_puts_newest_first() {
        let list = create_test_list();

        let names: Vec<&str> = list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Reddit", "Example"]);
    }

    #[test]
    fn test_insert_duplicate_name() {
        let mut list = create_test_list();

        let result = list.insert(Site::new("Reddit", "http://old.reddit.com"));

        assert_eq!(result, Err(vec![DuplicateError::DuplicateName]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_insert_duplicate_url() {
        let mut list = create_test_list();

        let result = list.insert(Site::new("Front page", "http://reddit.com"));

        assert_eq!(result, Err(vec![DuplicateError::DuplicateUrl]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_insert_reports_both_collisions() {
        let mut list = create_test_list();

        let result = list.insert(Site::new("Reddit", "http://sub.example.com"));

        assert_eq!(
            result,
            Err(vec![DuplicateError::DuplicateName, DuplicateError::DuplicateUrl])
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut list = create_test_list();

        assert!(list.insert(Site::new("reddit", "http://lobste.rs")).is_ok());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_by_key() {
        let mut list = create_test_list();

        let removed = list.remove_by_key("example");

        assert_eq!(removed, 1);
        assert_eq!(list.len(), 1);
        assert!(list.iter().all(|s| s.name != "Example"));
    }

    #[test]
    fn test_remove_by_key_drops_every_match() {
        let mut list = SiteList::from(vec![
            Site::new("Example", "http://sub.example.com"),
            Site::new("Example Org", "http://sub.example.org"),
            Site::new("Reddit", "http://reddit.com"),
        ]);

        assert_eq!(list.remove_by_key("example"), 2);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_unknown_key() {
        let mut list = create_test_list();

        let removed = list.remove_by_key("nonexistent");

        assert_eq!(removed, 0);
        assert_eq!(list, create_test_list());
    }

    #[test]
    fn test_serializes_as_array() {
        let list = create_test_list();

        let json = serde_json::to_string(&list).unwrap();

        assert_eq!(
            json,
            r#"[{"name":"Reddit","url":"http://reddit.com"},{"name":"Example","url":"http://sub.example.com"}]"#
        );
    }

    #[test]
    fn test_reads_stored_array() {
        let json = r#"[{"name":"Reddit","url":"http://reddit.com"}]"#;

        let list: SiteList = serde_json::from_str(json).unwrap();

        assert_eq!(list, SiteList::from(vec![Site::new("Reddit", "http://reddit.com")]));
    }

    #[tokio::test]
    async fn test_memory_store_starts_empty() {
        let store = MemoryStore::new();

        assert_eq!(store.load().await, Ok(None));
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.save(&create_test_list()).await.unwrap();

        assert_eq!(handle.snapshot(), Some(create_test_list()));
        assert_eq!(handle.writes(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_injected_failures() {
        let store = MemoryStore::new();
        store.fail_writes(true);

        assert!(matches!(store.save(&SiteList::new()).await, Err(StoreError::Write(_))));

        store.fail_reads(true);
        assert!(matches!(store.load().await, Err(StoreError::Read(_))));
    }
}
