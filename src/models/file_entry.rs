use std::ffi::OsString;
use std::path::MAIN_SEPARATOR;

const EMPTY_SIZE_LABEL: &str = "empty";

/// One child of a listed directory. Built fresh per listing and never cached.
///
/// `name` is the raw name as the OS returned it; it is used to build the
/// child's path and to sort siblings. Only [`FileEntry::display_name`] decodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: OsString,
    pub kind: FileKind,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    Link,
}

impl FileEntry {
    pub fn new(name: impl Into<OsString>, kind: FileKind, size: u64) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
        }
    }

    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        Self::new(name, FileKind::File, size)
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self::new(name, FileKind::Dir, 0)
    }

    /// Links are never followed, so only real directories count.
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Dir
    }

    /// Last path segment of `name`, in case a provider hands back more than a leaf.
    /// Non-UTF-8 bytes show up as U+FFFD.
    pub fn display_name(&self) -> String {
        self.name
            .to_string_lossy()
            .rsplit(|c: char| c == '/' || c == MAIN_SEPARATOR)
            .next()
            .unwrap_or_default()
            .to_owned()
    }

    pub fn size_label(&self) -> String {
        if self.size == 0 {
            EMPTY_SIZE_LABEL.to_string()
        } else {
            format!("{}b", self.size)
        }
    }
}
