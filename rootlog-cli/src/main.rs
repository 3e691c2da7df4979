//! The rootlog command line tool.

#![forbid(unsafe_code)]

use clap::Parser;
use rootlog_cli::Arguments;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    // Diagnostics go to stderr so they never interleave with the logged line on stdout.
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into())
                    .with_env_var("ROOTLOG_LOG")
                    .from_env()?,
            )
            .with_writer(std::io::stderr)
            .compact()
            .finish(),
    )?;

    arguments.run()?;

    Ok(())
}
