mod fs;
mod watcher;
mod worker;

pub use fs::{home_directory, parent_of, FileSystem, StdFileSystem};
pub use watcher::DirectoryWatcher;
pub use worker::{spawn_worker, IoCommand, IoResult};
