//! Command-line surface: `dirtree <path> [-f]`.

use crate::core::errors::Result;
use crate::services::tree::{RenderOptions, RenderStats, TreeRenderer};
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory subtree as an indented tree"
)]
pub struct Cli {
    /// Root directory to render
    pub path: PathBuf,

    /// Include files (with their sizes) in the output
    #[arg(short = 'f', long = "files")]
    pub files: bool,
}

impl Cli {
    /// Parses arguments, the program name included. Failures come back as
    /// [`Error::Usage`](crate::core::errors::Error::Usage) before any traversal.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.files)
    }
}

/// Renders into `out` (stdout from `main`). The root line is written and
/// flushed on its own before the body is streamed.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<RenderStats> {
    let renderer = TreeRenderer::new(cli.render_options());
    tracing::debug!(path = %cli.path.display(), show_files = renderer.options().show_files, "rendering");

    writeln!(out, "{}", cli.path.display())?;
    out.flush()?;

    let stats = renderer.write_body(out, &cli.path)?;
    out.flush()?;
    Ok(stats)
}
