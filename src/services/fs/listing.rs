use crate::core::errors::{Error, Result};
use crate::models::file_entry::{FileEntry, FileKind};
use std::fs;
use std::path::Path;

/// Source of directory listings.
///
/// Returns the immediate children of `path` in no particular order. Failing to
/// open or read the directory must surface as [`Error::Access`].
pub trait DirectoryLister {
    fn list(&self, path: &Path) -> Result<Vec<FileEntry>>;
}

impl<L: DirectoryLister + ?Sized> DirectoryLister for &L {
    fn list(&self, path: &Path) -> Result<Vec<FileEntry>> {
        (**self).list(path)
    }
}

/// Lists directories on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<FileEntry>> {
        list_dir_impl(path).map_err(|source| Error::access(path, source))
    }
}

fn list_dir_impl(dir: &Path) -> std::io::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    // The handle is dropped when the iterator goes out of scope, early returns included.
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // Symlinks are reported as links, never followed.
        let md = fs::symlink_metadata(entry.path())?;
        let file_type = md.file_type();
        let (kind, size) = if file_type.is_dir() {
            (FileKind::Dir, 0)
        } else if file_type.is_symlink() {
            (FileKind::Link, md.len())
        } else {
            (FileKind::File, md.len())
        };

        entries.push(FileEntry {
            name: entry.file_name(),
            kind,
            size,
        });
    }

    tracing::debug!(path = %dir.display(), count = entries.len(), "listed directory");
    Ok(entries)
}
