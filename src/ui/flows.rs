/// Popup flows: each user action as registry calls followed by state updates
use crate::notifier::{Notice, NoticeHandle};
use crate::registry::{SiteRegistry, TabOpener};
use crate::storage::SiteStore;
use crate::ui::state::{add_error_notices, storage_notice, PopupAction};
use log::{error, warn};
use std::future::Future;

/// Receives the state changes a flow produces
pub trait PopupSink {
    fn send(&self, action: PopupAction);

    /// Show a notice; the implementation arranges its dismissal
    fn notify(&self, notice: Notice) -> NoticeHandle;
}

/// Wait for `timer`, then remove the notice with `handle` and no other
pub async fn expire_notice<P: PopupSink>(sink: &P, handle: NoticeHandle, timer: impl Future<Output = ()>) {
    timer.await;
    sink.send(PopupAction::Dismiss(handle));
}

/// Read the stored list back and render it
pub async fn refresh_sites<S: SiteStore, T: TabOpener, P: PopupSink>(registry: &SiteRegistry<S, T>, sink: &P) {
    match registry.list_sites().await {
        Ok(sites) => sink.send(PopupAction::Render(sites)),
        Err(e) => {
            error!("Failed to load sites: {}", e);
            sink.notify(storage_notice(&e));
        }
    }
}

pub async fn launch_sites<S: SiteStore, T: TabOpener, P: PopupSink>(registry: &SiteRegistry<S, T>, sink: &P) {
    match registry.launch_all().await {
        Ok(summary) => {
            if !summary.failures.is_empty() {
                warn!("{} site(s) could not be opened", summary.failures.len());
            }
        }
        Err(e) => {
            error!("Launch failed: {}", e);
            sink.notify(storage_notice(&e));
        }
    }
}

/// Add a site: write, clear the inputs, read back, render.
///
/// The popup is marked busy as soon as this is called, before the returned
/// future first runs, so a second submit cannot start a competing write.
pub fn submit_site<S, T, P>(
    registry: SiteRegistry<S, T>,
    sink: P,
    name: String,
    url: String,
) -> impl Future<Output = ()>
where
    S: SiteStore,
    T: TabOpener,
    P: PopupSink,
{
    sink.send(PopupAction::BeginWrite);

    async move {
        match registry.add_site(&name, &url).await {
            Ok(_) => {
                sink.send(PopupAction::SiteAdded);
                refresh_sites(&registry, &sink).await;
            }
            Err(e) => {
                warn!("Website not added: {}", e);
                for notice in add_error_notices(&e) {
                    sink.notify(notice);
                }
            }
        }
        sink.send(PopupAction::EndWrite);
    }
}

/// Remove every site with derived key `key`, then render what is left
pub fn remove_site<S, T, P>(registry: SiteRegistry<S, T>, sink: P, key: String) -> impl Future<Output = ()>
where
    S: SiteStore,
    T: TabOpener,
    P: PopupSink,
{
    sink.send(PopupAction::BeginWrite);

    async move {
        match registry.remove_site(&key).await {
            Ok(_) => refresh_sites(&registry, &sink).await,
            Err(e) => {
                error!("Failed to remove {:?}: {}", key, e);
                sink.notify(storage_notice(&e));
            }
        }
        sink.send(PopupAction::EndWrite);
    }
}
