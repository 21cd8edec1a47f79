/// Error types for Site Launcher
use thiserror::Error;

/// A name/URL pair that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("website name is empty")]
    EmptyName,
    #[error("url is empty or does not look like a host name")]
    InvalidUrl,
}

/// A new site that collides with one already saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DuplicateError {
    #[error("a website with this name is already saved")]
    DuplicateName,
    #[error("a website with this url is already saved")]
    DuplicateUrl,
}

/// Failure talking to the host's extension storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("failed to read storage: {0}")]
    Read(String),
    #[error("failed to write storage: {0}")]
    Write(String),
    #[error("failed to parse stored sites: {0}")]
    Decode(String),
    #[error("failed to serialize sites: {0}")]
    Encode(String),
}

/// Failure opening a single site in a new tab
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("cannot open {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("failed to open {url}: {reason}")]
    Open { url: String, reason: String },
}

/// Why a site could not be added.
///
/// Validation and duplicate failures carry every problem found, not just
/// the first, so the popup can flag each offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddSiteError {
    #[error("invalid website: {}", join(.0))]
    Invalid(Vec<ValidationError>),
    #[error("duplicate website: {}", join(.0))]
    Duplicate(Vec<DuplicateError>),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

fn join<E: std::fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
