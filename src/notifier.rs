/// Transient notices anchored to a popup field
use std::fmt;
use uuid::Uuid;

/// Identifies one notice so its timer removes only that notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeHandle(Uuid);

impl NoticeHandle {
    fn new() -> Self {
        NoticeHandle(Uuid::new_v4())
    }
}

impl fmt::Display for NoticeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Warning,
}

/// Where a notice is shown: right before the named field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Top of the popup, for failures not tied to a field
    Popup,
    Name,
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub handle: NoticeHandle,
    pub message: String,
    pub severity: Severity,
    pub anchor: Anchor,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity, anchor: Anchor) -> Notice {
        Notice {
            handle: NoticeHandle::new(),
            message: message.into(),
            severity,
            anchor,
        }
    }
}

/// Notices currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, notice: Notice) -> NoticeHandle {
        let handle = notice.handle;
        self.items.push(notice);
        handle
    }

    /// Remove the notice with `handle`; a handle already gone is ignored
    pub fn dismiss(&mut self, handle: NoticeHandle) -> bool {
        let original_len = self.items.len();
        self.items.retain(|n| n.handle != handle);
        self.items.len() < original_len
    }

    pub fn at(&self, anchor: Anchor) -> impl Iterator<Item = &Notice> + '_ {
        self.items.iter().filter(move |n| n.anchor == anchor)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
