use clap::Subcommand;

mod convert;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a directory of chapter directories into an EPUB file.
    Convert(convert::ConvertCommand),
}
