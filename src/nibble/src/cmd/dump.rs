use std::path::PathBuf;

use clap::Args;
use eyre::Context;
use nibble_bit_buf::BitStreamReader;
use nibble_bits::{to_string, to_string_lsb};

use super::Command;

/// Subcommand for printing the bits of every byte in a file.
#[derive(Debug, Args)]
pub struct Dump {
    /// Path to the file to dump.
    file: PathBuf,

    /// Renders every byte LSB first instead of MSB first.
    #[clap(long)]
    lsb: bool,
}

impl Command for Dump {
    fn handle(self) -> eyre::Result<()> {
        let mut reader =
            BitStreamReader::from_file(&self.file).context("failed to load file for dumping")?;

        let render = if self.lsb { to_string_lsb::<u8> } else { to_string::<u8> };
        while reader.remaining_bits() > 0 {
            let offset = reader.byte_index();
            let byte = reader.get(u8::BITS) as u8;

            println!("{offset:08x}  {}  {byte:02x}", render(byte));
        }

        Ok(())
    }
}
