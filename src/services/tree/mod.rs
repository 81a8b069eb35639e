//! `tree`-style rendering of a directory subtree.
//!
//! ```text
//! testdata
//! ├───project
//! │	├───file.txt (19b)
//! │	└───gopher.png (70372b)
//! └───zline
//! 	└───empty.txt (empty)
//! ```
//!
//! Children are sorted by name at every level and walked depth-first, each
//! directory's subtree written in full before its next sibling.

use crate::core::errors::Result;
use crate::models::file_entry::FileEntry;
use crate::services::fs::listing::{DirectoryLister, FsLister};
use std::io::Write;
use std::path::Path;

pub const REGULAR_PREFIX: &str = "├───";
pub const LAST_PREFIX: &str = "└───";
pub const COMMON_INDENT: &str = "│\t";
pub const EMPTY_INDENT: &str = "\t";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include non-directory entries. Directories are always shown.
    pub show_files: bool,
}

impl RenderOptions {
    pub fn new(show_files: bool) -> Self {
        Self { show_files }
    }

    fn is_visible(&self, entry: &FileEntry) -> bool {
        self.show_files || entry.is_dir()
    }
}

/// Counts of emitted body lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub directories: usize,
    pub files: usize,
}

impl RenderStats {
    pub fn lines(&self) -> usize {
        self.directories + self.files
    }
}

pub struct TreeRenderer<L = FsLister> {
    lister: L,
    options: RenderOptions,
}

impl TreeRenderer<FsLister> {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_lister(FsLister, options)
    }
}

impl<L: DirectoryLister> TreeRenderer<L> {
    pub fn with_lister(lister: L, options: RenderOptions) -> Self {
        Self { lister, options }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Renders the whole tree, root line included, into a string.
    pub fn render(&self, path: &Path) -> Result<String> {
        let mut out = Vec::new();
        self.write_tree(&mut out, path)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Writes the root path line followed by the body.
    ///
    /// Output is streamed, so on failure everything emitted before the failing
    /// directory has already reached `out`.
    pub fn write_tree<W: Write>(&self, out: &mut W, path: &Path) -> Result<RenderStats> {
        writeln!(out, "{}", path.display())?;
        self.write_body(out, path)
    }

    /// Writes every line below the root path line.
    pub fn write_body<W: Write>(&self, out: &mut W, path: &Path) -> Result<RenderStats> {
        let mut stats = RenderStats::default();
        self.write_level(out, path, "", &mut stats)?;
        tracing::debug!(
            path = %path.display(),
            directories = stats.directories,
            files = stats.files,
            "rendered tree"
        );
        Ok(stats)
    }

    fn write_level<W: Write>(
        &self,
        out: &mut W,
        path: &Path,
        indent: &str,
        stats: &mut RenderStats,
    ) -> Result<()> {
        let mut entries = self.lister.list(path)?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let last_visible = entries.iter().rposition(|e| self.options.is_visible(e));

        for (index, entry) in entries.iter().enumerate() {
            if !self.options.is_visible(entry) {
                continue;
            }

            let is_last = Some(index) == last_visible;
            let (glyph, continuation) = if is_last {
                (LAST_PREFIX, EMPTY_INDENT)
            } else {
                (REGULAR_PREFIX, COMMON_INDENT)
            };

            if !entry.is_dir() {
                writeln!(
                    out,
                    "{indent}{glyph}{} ({})",
                    entry.display_name(),
                    entry.size_label()
                )?;
                stats.files += 1;
                continue;
            }

            writeln!(out, "{indent}{glyph}{}", entry.display_name())?;
            stats.directories += 1;

            let child_indent = format!("{indent}{continuation}");
            self.write_level(out, &path.join(&entry.name), &child_indent, stats)?;
        }

        Ok(())
    }
}

/// Renders `path` from the local filesystem.
pub fn render(path: impl AsRef<Path>, show_files: bool) -> Result<String> {
    TreeRenderer::new(RenderOptions::new(show_files)).render(path.as_ref())
}
