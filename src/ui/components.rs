/// Reusable UI components

use crate::notifier::{Anchor, Notices, Severity};
use crate::site_data::Site;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SiteRowProps {
    pub site: Site,
    #[prop_or(false)]
    pub disabled: bool,
    /// Receives the site's derived key
    pub on_remove: Callback<String>,
}

#[function_component(SiteRow)]
pub fn site_row(props: &SiteRowProps) -> Html {
    let site = &props.site;
    let key = site.key().to_string();

    html! {
        <div class="site-row">
            <h3 class="site-name">{&site.name}</h3>
            <div class="site-actions">
                <a class="visit-link" target="_blank" href={site.url.clone()}>{"VISIT"}</a>
                <Button
                    onclick={props.on_remove.reform(move |_| key.clone())}
                    disabled={props.disabled}
                    variant={ButtonVariant::Danger}
                    size={ButtonSize::Small}
                >
                    {"🗑️"}
                </Button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeListProps {
    pub notices: Notices,
    pub anchor: Anchor,
}

/// Notices shown right before the field they are anchored to
#[function_component(NoticeList)]
pub fn notice_list(props: &NoticeListProps) -> Html {
    if props.notices.is_empty() {
        return html! {};
    }

    html! {
        <div class="notice-list">
            {for props.notices.at(props.anchor).map(|notice| {
                let alert_type = match notice.severity {
                    Severity::Danger => AlertType::Danger,
                    Severity::Warning => AlertType::Warning,
                };

                html! {
                    <Alert key={notice.handle.to_string()} r#type={alert_type} title={notice.message.clone()} inline={true}>
                    </Alert>
                }
            })}
        </div>
    }
}
