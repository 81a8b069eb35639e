pub mod cli;
pub mod core;
pub mod models;
pub mod services;

pub use crate::core::errors::{Error, Result};
pub use crate::models::file_entry::{FileEntry, FileKind};
pub use crate::services::fs::listing::{DirectoryLister, FsLister};
pub use crate::services::tree::{render, RenderOptions, RenderStats, TreeRenderer};
