use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;

/// The CLI interface for the Nibble application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: NibbleCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by Nibble.
#[derive(Debug, Subcommand)]
pub enum NibbleCommand {
    Dump(dump::Dump),
    Inspect(inspect::Inspect),
    Read(read::Read),
    Write(write::Write),
}

impl Command for NibbleCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Dump(dump) => dump.handle(),
            Self::Inspect(inspect) => inspect.handle(),
            Self::Read(read) => read.handle(),
            Self::Write(write) => write.handle(),
        }
    }
}
