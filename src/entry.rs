use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// What kind of filesystem object an [`Entry`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

/// One filesystem object inside a [`Listing`].
#[derive(Clone, Debug)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub is_hidden: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: SystemTime,
}

/// Entries of one location, in the order the filesystem query produced them.
pub type Listing = Vec<Entry>;

impl Entry {
    /// Build an entry from bare parts, with hidden-ness derived from the name.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        let name = name.into();
        Self {
            is_hidden: is_hidden_name(&name),
            name,
            path: path.into(),
            kind,
            is_symlink: false,
            size: 0,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    pub fn from_path(path: PathBuf) -> Option<Self> {
        let symlink_meta = fs::symlink_metadata(&path).ok()?;
        let is_symlink = symlink_meta.is_symlink();

        let name = path.file_name()?.to_string_lossy().to_string();

        // Broken symlinks still show up, as files.
        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .or_else(|| symlink_meta.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        Some(Self {
            is_hidden: is_hidden_name(&name),
            name,
            path,
            kind: if is_dir { EntryKind::Folder } else { EntryKind::File },
            is_symlink,
            size,
            modified,
        })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    pub fn get_icon(&self) -> &str {
        if self.is_dir() {
            return "\u{f07b}";
        }
        let extension = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "rs" => "\u{e7a8}",
            "toml" | "yaml" | "yml" => "\u{e615}",
            "md" => "\u{e73e}",
            "txt" => "\u{f15c}",
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => "\u{f1c5}",
            "mp4" | "mkv" | "mov" | "avi" | "webm" => "\u{f03d}",
            "mp3" | "wav" | "flac" | "ogg" | "m4a" => "\u{f001}",
            "zip" | "tar" | "gz" | "7z" | "rar" | "xz" | "bz2" => "\u{f410}",
            "json" => "\u{e60b}",
            "pdf" => "\u{f1c1}",
            "sh" | "bash" | "zsh" => "\u{f489}",
            "lock" => "\u{f023}",
            "log" => "\u{f18d}",
            _ => "\u{f15b}",
        }
    }

    pub fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{} \u{2192}", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Dot-files are hidden, following the Unix naming convention.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_derived_from_name() {
        assert!(Entry::new(".git", "/repo/.git", EntryKind::Folder).is_hidden);
        assert!(!Entry::new("src", "/repo/src", EntryKind::Folder).is_hidden);
    }

    #[test]
    fn test_display_name_marks_symlinks() {
        let mut entry = Entry::new("link", "/tmp/link", EntryKind::File);
        assert_eq!(entry.display_name(), "link");
        entry.is_symlink = true;
        assert_eq!(entry.display_name(), "link \u{2192}");
    }
}
