use crate::entry::{Entry, EntryKind, Listing};
use crate::error::PaneError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage operations a pane depends on.
pub trait FileSystem {
    /// List the entries of a directory, in display order.
    fn list_directory(&self, path: &Path) -> Result<Listing, PaneError>;
    fn create_item(&self, name: &str, at: &Path, kind: EntryKind) -> Result<(), PaneError>;
    fn rename_item(&self, old_name: &str, new_name: &str, at: &Path) -> Result<(), PaneError>;
    /// Move an entry to the trash.
    fn delete_item(&self, path: &Path) -> Result<(), PaneError>;
}

/// [`FileSystem`] backed by `std::fs` and the platform trash.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn list_directory(&self, path: &Path) -> Result<Listing, PaneError> {
        let read_dir = fs::read_dir(path).map_err(|source| PaneError::ListingFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries: Listing = read_dir
            .flatten()
            .filter_map(|entry| Entry::from_path(entry.path()))
            .collect();

        // Folders first, then names case-insensitively
        entries.sort_by(|a, b| {
            if a.kind != b.kind {
                return b.is_dir().cmp(&a.is_dir());
            }
            a.name.to_lowercase().cmp(&b.name.to_lowercase())
        });
        Ok(entries)
    }

    fn create_item(&self, name: &str, at: &Path, kind: EntryKind) -> Result<(), PaneError> {
        let target = at.join(name);
        let result = match kind {
            EntryKind::Folder => fs::create_dir(&target),
            EntryKind::File => fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&target)
                .map(drop),
        };
        result.map_err(|source| PaneError::CreateFailed {
            name: name.to_string(),
            source,
        })
    }

    fn rename_item(&self, old_name: &str, new_name: &str, at: &Path) -> Result<(), PaneError> {
        let from = at.join(old_name);
        let to = at.join(new_name);
        let rename_failed = |source| PaneError::RenameFailed {
            from: old_name.to_string(),
            to: new_name.to_string(),
            source,
        };

        // fs::rename silently replaces an existing target on Unix
        if to.symlink_metadata().is_ok() {
            return Err(rename_failed(std::io::Error::from(
                std::io::ErrorKind::AlreadyExists,
            )));
        }
        fs::rename(&from, &to).map_err(rename_failed)
    }

    fn delete_item(&self, path: &Path) -> Result<(), PaneError> {
        trash::delete(path).map_err(|source| PaneError::DeleteFailed {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Parent location, or `None` at the filesystem root.
pub fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent().map(Path::to_path_buf)
}

/// The user's home directory, falling back to the working directory.
pub fn home_directory() -> PathBuf {
    directories::UserDirs::new()
        .map(|ud| ud.home_dir().to_path_buf())
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of() {
        assert_eq!(
            parent_of(Path::new("/home/u/docs")),
            Some(PathBuf::from("/home/u"))
        );
        assert_eq!(parent_of(Path::new("/")), None);
    }
}
