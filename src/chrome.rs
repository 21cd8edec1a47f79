/// Bridge to the Chrome extension APIs exposed by `popup.js`
use crate::config::STORAGE_KEY;
use crate::error::{LaunchError, StoreError};
use crate::registry::{SiteRegistry, TabOpener};
use crate::storage::{SiteList, SiteStore};
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn openTab(url: &str) -> Result<(), JsValue>;
}

/// Registry wired to `chrome.storage.sync` and `chrome.tabs`
pub fn chrome_registry() -> SiteRegistry<ChromeSyncStore, ChromeTabs> {
    SiteRegistry::new(ChromeSyncStore::default(), ChromeTabs)
}

/// Site list kept under one key in `chrome.storage.sync`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeSyncStore {
    key: &'static str,
}

impl ChromeSyncStore {
    pub fn new(key: &'static str) -> Self {
        ChromeSyncStore { key }
    }
}

impl Default for ChromeSyncStore {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl SiteStore for ChromeSyncStore {
    async fn load(&self) -> Result<Option<SiteList>, StoreError> {
        let sites_js = getStorage(self.key)
            .await
            .map_err(|e| StoreError::Read(describe(&e)))?;

        if sites_js.is_null() || sites_js.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(sites_js)
            .map(Some)
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn save(&self, sites: &SiteList) -> Result<(), StoreError> {
        let sites_js = serde_wasm_bindgen::to_value(sites)
            .map_err(|e| StoreError::Encode(e.to_string()))?;

        setStorage(self.key, sites_js)
            .await
            .map_err(|e| StoreError::Write(describe(&e)))
    }
}

/// Opens sites with `chrome.tabs.create`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChromeTabs;

impl TabOpener for ChromeTabs {
    async fn open_tab(&self, url: &str) -> Result<(), LaunchError> {
        // Stored lists may have been written by another device or release
        url::Url::parse(url).map_err(|e| LaunchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        openTab(url).await.map_err(|e| LaunchError::Open {
            url: url.to_string(),
            reason: describe(&e),
        })
    }
}

/// Readable text for a value thrown across the JS bridge
fn describe(err: &JsValue) -> String {
    if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(js_err.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
