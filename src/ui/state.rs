/// Popup state and the transitions user actions cause
use crate::error::{AddSiteError, DuplicateError, StoreError, ValidationError};
use crate::notifier::{Anchor, Notice, NoticeHandle, Notices, Severity};
use crate::storage::SiteList;
use std::rc::Rc;
use yew::prelude::*;

pub const EMPTY_NAME_MESSAGE: &str = "Please enter the website's name.";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid url.";
pub const DUPLICATE_NAME_MESSAGE: &str = "Website name already exists.";
pub const DUPLICATE_URL_MESSAGE: &str = "Url already exists.";
pub const STORAGE_MESSAGE: &str = "Could not access saved websites. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupState {
    /// Whether the add form and site list are shown
    pub editor_visible: bool,
    /// Sites currently rendered; empty while the editor is hidden
    pub sites: SiteList,
    pub name_input: String,
    pub url_input: String,
    pub notices: Notices,
    /// An add or remove is writing the list; further writes are refused
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    BeginWrite,
    EndWrite,
    ToggleEditor,
    Render(SiteList),
    NameInput(String),
    UrlInput(String),
    SiteAdded,
    Notify(Notice),
    Dismiss(NoticeHandle),
}

impl Reducible for PopupState {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            PopupAction::BeginWrite => next.busy = true,
            PopupAction::EndWrite => next.busy = false,
            PopupAction::ToggleEditor => {
                next.editor_visible = !next.editor_visible;
                next.sites = SiteList::new();
            }
            PopupAction::Render(sites) => {
                // A list loaded before the editor was hidden must not reappear
                if !next.editor_visible {
                    return self;
                }
                next.sites = sites;
            }
            PopupAction::NameInput(value) => next.name_input = value,
            PopupAction::UrlInput(value) => next.url_input = value,
            PopupAction::SiteAdded => {
                next.name_input.clear();
                next.url_input.clear();
            }
            PopupAction::Notify(notice) => {
                next.notices.push(notice);
            }
            PopupAction::Dismiss(handle) => {
                if !next.notices.dismiss(handle) {
                    return self;
                }
            }
        }

        Rc::new(next)
    }
}

/// One notice per problem, anchored to the field it concerns
pub fn add_error_notices(err: &AddSiteError) -> Vec<Notice> {
    match err {
        AddSiteError::Invalid(errors) => errors
            .iter()
            .map(|e| match e {
                ValidationError::EmptyName => Notice::new(EMPTY_NAME_MESSAGE, Severity::Danger, Anchor::Name),
                ValidationError::InvalidUrl => Notice::new(INVALID_URL_MESSAGE, Severity::Danger, Anchor::Url),
            })
            .collect(),
        AddSiteError::Duplicate(errors) => errors
            .iter()
            .map(|e| match e {
                DuplicateError::DuplicateName => {
                    Notice::new(DUPLICATE_NAME_MESSAGE, Severity::Warning, Anchor::Name)
                }
                DuplicateError::DuplicateUrl => {
                    Notice::new(DUPLICATE_URL_MESSAGE, Severity::Warning, Anchor::Url)
                }
            })
            .collect(),
        AddSiteError::Storage(e) => vec![storage_notice(e)],
    }
}

pub fn storage_notice(_err: &StoreError) -> Notice {
    Notice::new(STORAGE_MESSAGE, Severity::Danger, Anchor::Popup)
}
