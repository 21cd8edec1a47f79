/// Site registry: add, remove, list and launch saved sites
use crate::error::{AddSiteError, LaunchError, StoreError};
use crate::site_data::Site;
use crate::storage::{SiteList, SiteStore};
use crate::validator::validate;
use log::{error, info};

/// Opens a URL in a new browser tab
#[allow(async_fn_in_trait)]
pub trait TabOpener {
    async fn open_tab(&self, url: &str) -> Result<(), LaunchError>;
}

/// Outcome of launching every saved site
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchSummary {
    pub opened: usize,
    pub failures: Vec<LaunchError>,
}

/// Owns the rules for the saved site list.
///
/// Every mutation loads the whole list, changes it, and writes it back before
/// returning, so a caller that awaits an operation and then calls
/// [`SiteRegistry::list_sites`] sees the write.
#[derive(Debug, Clone, Default)]
pub struct SiteRegistry<S, T> {
    store: S,
    tabs: T,
}

impl<S: SiteStore, T: TabOpener> SiteRegistry<S, T> {
    pub fn new(store: S, tabs: T) -> Self {
        SiteRegistry { store, tabs }
    }

    /// The persisted list, empty when nothing was ever stored
    pub async fn list_sites(&self) -> Result<SiteList, StoreError> {
        Ok(self.store.load().await?.unwrap_or_default())
    }

    /// Validate, check uniqueness, insert at the front and persist
    pub async fn add_site(&self, name: &str, raw_url: &str) -> Result<Site, AddSiteError> {
        let site = validate(name, raw_url).map_err(AddSiteError::Invalid)?;

        let mut sites = self.list_sites().await?;
        sites
            .insert(site.clone())
            .map_err(AddSiteError::Duplicate)?;

        self.store.save(&sites).await?;
        info!("Saved {} ({}), {} sites total", site.name, site.url, sites.len());

        Ok(site)
    }

    /// Remove every site whose derived key is `key`.
    ///
    /// An unknown key removes nothing and still succeeds. The list is written
    /// back either way.
    pub async fn remove_site(&self, key: &str) -> Result<usize, StoreError> {
        let mut sites = self.list_sites().await?;
        let removed = sites.remove_by_key(key);

        self.store.save(&sites).await?;
        info!("Removed {} site(s) with key {:?}", removed, key);

        Ok(removed)
    }

    /// Open every saved site in a new tab, in list order.
    ///
    /// A site that fails to open is logged and skipped.
    pub async fn launch_all(&self) -> Result<LaunchSummary, StoreError> {
        let sites = self.list_sites().await?;
        let mut summary = LaunchSummary::default();

        for site in &sites {
            match self.tabs.open_tab(&site.url).await {
                Ok(()) => summary.opened += 1,
                Err(e) => {
                    error!("{}", e);
                    summary.failures.push(e);
                }
            }
        }

        info!("Launched {} of {} sites", summary.opened, sites.len());
        Ok(summary)
    }
}
