use std::path::PathBuf;

use clap::Args;
use eyre::Context;
use nibble_bit_buf::BitStreamReader;
use serde::Serialize;

use super::Command;
use crate::utils;

/// Subcommand for decoding a sequence of bit fields from a file.
#[derive(Debug, Args)]
pub struct Read {
    /// Path to the file to decode.
    file: PathBuf,

    /// Comma-separated bit widths of the fields to read, in order.
    #[clap(
        short,
        long,
        required = true,
        value_delimiter = ',',
        value_parser = clap::value_parser!(u32).range(1..=64),
    )]
    widths: Vec<u32>,

    /// Sign-extends every field from its width.
    #[clap(short, long)]
    signed: bool,

    /// Optional path to an output file for the decoded fields.
    ///
    /// Defaults to stdout.
    #[clap(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct Decoded {
    size_bits: usize,
    fields: Vec<Field>,
}

#[derive(Serialize)]
struct Field {
    offset: usize,
    width: u32,
    value: Value,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Value {
    Unsigned(u64),
    Signed(i64),
}

impl Command for Read {
    fn handle(self) -> eyre::Result<()> {
        let mut reader =
            BitStreamReader::from_file(&self.file).context("failed to load file for decoding")?;

        let fields = self
            .widths
            .iter()
            .map(|&width| {
                let offset = reader.position();
                if reader.remaining_bits() < width as usize {
                    log::warn!("field at bit {offset} extends past the end of the file");
                }

                let value = if self.signed {
                    Value::Signed(reader.get_signed(width))
                } else {
                    Value::Unsigned(reader.get(width))
                };

                Field {
                    offset,
                    width,
                    value,
                }
            })
            .collect();

        let decoded = Decoded {
            size_bits: reader.size_bits(),
            fields,
        };
        utils::serialize_to_output_source(self.output, &decoded)
    }
}
