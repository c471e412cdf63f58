use std::path::PathBuf;
use thiserror::Error;

/// Failures folded into pane state.
///
/// Everything except [`PaneError::StaleResponse`] is meant to be shown to the
/// user; stale responses are an internal bookkeeping signal.
#[derive(Error, Debug)]
pub enum PaneError {
    /// The location could not be listed (missing, permission denied, ...)
    #[error("cannot list {}: {source}", .path.display())]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Creating a new file or folder failed
    #[error("cannot create {name}: {source}")]
    CreateFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
    /// Renaming an entry failed
    #[error("cannot rename {from} to {to}: {source}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
    /// Moving an entry to the trash failed
    #[error("cannot delete {}: {source}", .path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: trash::Error,
    },
    /// A listing arrived for a location the pane has already left
    #[error("discarded listing for {} (now at {})", .requested.display(), .current.display())]
    StaleResponse { requested: PathBuf, current: PathBuf },
    /// An operation was called in a mode that does not allow it
    #[error("invalid pane transition: {0}")]
    InvalidTransition(&'static str),
}

impl PaneError {
    /// Whether this error should reach the user as a notification.
    pub fn is_surfaced(&self) -> bool {
        !matches!(self, PaneError::StaleResponse { .. })
    }
}

/// Errors from reading or writing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
