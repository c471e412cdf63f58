//! Navigation and selection core of a file-manager pane.
//!
//! [`state::PaneState`] is the state machine: it never touches the disk
//! itself but hands out [`state::PaneRequest`]s, which the [`io`] worker
//! executes and feeds back through the `apply_*` methods.

pub mod config;
pub mod entry;
pub mod error;
pub mod io;
pub mod state;

pub use entry::{Entry, EntryKind, Listing};
pub use error::{ConfigError, PaneError};
