use clap::Parser;
use pagepub::errors::PagepubResult;
use pagepub_cli::Cli;
use pagepub_cli::command::Commands;
use tracing_subscriber::EnvFilter;

fn main() -> PagepubResult<()> {
    let cli = Cli::parse();

    // Diagnostics are controlled by `RUST_LOG` (e.g., `RUST_LOG=pagepub=debug`)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli.commands {
        Commands::Convert(convert) => convert.convert()?,
    }

    Ok(())
}
