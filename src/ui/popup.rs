/// Popup UI for Site Launcher

use crate::chrome::chrome_registry;
use crate::config::NOTICE_TIMEOUT;
use crate::notifier::{Anchor, Notice, NoticeHandle};
use crate::ui::components::{NoticeList, SiteRow};
use crate::ui::flows::{self, expire_notice, PopupSink};
use crate::ui::state::{PopupAction, PopupState};
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::functional::UseReducerDispatcher;
use yew::platform::time::sleep;
use yew::prelude::*;

impl PopupSink for UseReducerDispatcher<PopupState> {
    fn send(&self, action: PopupAction) {
        self.dispatch(action);
    }

    fn notify(&self, notice: Notice) -> NoticeHandle {
        let handle = notice.handle;
        self.dispatch(PopupAction::Notify(notice));

        let dispatcher = self.clone();
        spawn_local(async move {
            expire_notice(&dispatcher, handle, sleep(NOTICE_TIMEOUT)).await;
        });
        handle
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(PopupState::default);

    // Launch handler
    let on_launch = {
        let dispatcher = state.dispatcher();

        Callback::from(move |_| {
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                flows::launch_sites(&chrome_registry(), &dispatcher).await;
            });
        })
    };

    // Show/hide editor handler
    let on_show_editor = {
        let state = state.clone();

        Callback::from(move |_| {
            let now_visible = !state.editor_visible;
            state.dispatch(PopupAction::ToggleEditor);

            if now_visible {
                let dispatcher = state.dispatcher();
                spawn_local(async move {
                    flows::refresh_sites(&chrome_registry(), &dispatcher).await;
                });
            }
        })
    };

    let on_name_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                dispatcher.dispatch(PopupAction::NameInput(input.value()));
            }
        })
    };

    let on_url_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                dispatcher.dispatch(PopupAction::UrlInput(input.value()));
            }
        })
    };

    // Add website handler
    let on_submit = {
        let state = state.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.busy {
                return;
            }

            spawn_local(flows::submit_site(
                chrome_registry(),
                state.dispatcher(),
                state.name_input.clone(),
                state.url_input.clone(),
            ));
        })
    };

    // Remove website handler
    let on_remove = {
        let state = state.clone();

        Callback::from(move |key: String| {
            if state.busy {
                return;
            }

            spawn_local(flows::remove_site(chrome_registry(), state.dispatcher(), key));
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Site Launcher"}</h1>

            <NoticeList notices={state.notices.clone()} anchor={Anchor::Popup} />

            <div class="flex-column-gap">
                <Button onclick={on_launch} variant={ButtonVariant::Primary} block={true}>
                    {"🚀 Launch"}
                </Button>
                <Button onclick={on_show_editor} variant={ButtonVariant::Secondary} block={true}>
                    {if state.editor_visible { "✖ Close Editor" } else { "✏️ Edit Sites" }}
                </Button>
            </div>

            if state.editor_visible {
                <form class="site-form" onsubmit={on_submit}>
                    <NoticeList notices={state.notices.clone()} anchor={Anchor::Name} />
                    <input
                        type="text"
                        placeholder="Website name"
                        value={state.name_input.clone()}
                        oninput={on_name_input}
                        class="site-input"
                    />
                    <NoticeList notices={state.notices.clone()} anchor={Anchor::Url} />
                    <input
                        type="text"
                        placeholder="reddit.com"
                        value={state.url_input.clone()}
                        oninput={on_url_input}
                        class="site-input"
                    />
                    <button type="submit" disabled={state.busy} class="pf-v5-c-button pf-m-primary pf-m-block">
                        {"Add Website"}
                    </button>
                </form>

                <div class="sites-list">
                    {for state.sites.iter().map(|site| html! {
                        <SiteRow key={site.url.clone()} site={site.clone()} disabled={state.busy} on_remove={on_remove.clone()} />
                    })}
                </div>
            }

            <p class="footer-popup">
                {format!("Site Launcher v{}", env!("CARGO_PKG_VERSION"))}
            </p>
        </div>
    }
}
