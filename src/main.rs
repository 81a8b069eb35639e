use anyhow::Context;
use dirtree::cli::{self, Cli};
use dirtree::core::telemetry::logging::init_logging;
use dirtree::Error;

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = match Cli::parse_from_args(std::env::args_os()) {
        Ok(args) => args,
        // clap prints usage (or help/version) and picks the exit code.
        Err(Error::Usage(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };

    let mut stdout = std::io::stdout().lock();
    cli::run(&args, &mut stdout)
        .with_context(|| format!("failed to render '{}'", args.path.display()))?;
    Ok(())
}
