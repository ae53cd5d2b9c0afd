use std::path::PathBuf;

use clap::Args;
use eyre::Context;
use nibble_bit_buf::BitStreamWriter;
use nibble_bits::bits_needed;

use super::Command;
use crate::utils;

pub const NIBBLE_CAPACITY: &str = "NIBBLE_CAPACITY";

/// Subcommand for packing bit fields into a file.
#[derive(Debug, Args)]
pub struct Write {
    /// Path to the output file.
    output: PathBuf,

    /// The fields to write in order, each given as `WIDTH:VALUE`.
    ///
    /// Values may use `0x`, `0o` and `0b` prefixes. Negative values are
    /// stored in two's complement.
    #[clap(required = true, value_parser = parse_field)]
    fields: Vec<PackedField>,

    /// Initial capacity of the write buffer in bytes.
    ///
    /// The buffer grows on demand, so this only affects how often it
    /// is reallocated.
    #[clap(short, long, env = NIBBLE_CAPACITY, default_value_t = 16)]
    capacity: usize,

    /// Leaves the last partial byte unpadded instead of flushing it.
    #[clap(long)]
    no_flush: bool,
}

/// A single field to be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackedField {
    pub width: u32,
    pub value: i64,
}

fn parse_field(input: &str) -> Result<PackedField, String> {
    let (width, value) = input
        .split_once(':')
        .ok_or_else(|| format!("expected WIDTH:VALUE, got '{input}'"))?;

    let width: u32 = width
        .parse()
        .map_err(|_| format!("'{width}' is not a valid bit width"))?;
    if !(1..=u64::BITS).contains(&width) {
        return Err(format!("bit width {width} is not in 1..=64"));
    }

    let raw = utils::parse_int(value)?;
    let fits = if raw < 0 {
        i64::try_from(raw).is_ok_and(|v| bits_needed(v) <= width)
    } else {
        u64::try_from(raw).is_ok_and(|v| width == u64::BITS || v >> width == 0)
    };
    if !fits {
        return Err(format!("value {value} does not fit in {width} bits"));
    }

    Ok(PackedField {
        width,
        // Non-negative values above `i64::MAX` keep their bit pattern.
        value: raw as i64,
    })
}

impl Command for Write {
    fn handle(self) -> eyre::Result<()> {
        let mut writer = BitStreamWriter::with_size(self.capacity);
        for field in &self.fields {
            writer.put_signed(field.width, field.value);
        }

        if !self.no_flush {
            writer.flush();
        }

        log::info!(
            "packed {} fields into {} bits",
            self.fields.len(),
            writer.position()
        );
        writer
            .write_to_file(&self.output)
            .context("failed to store packed fields")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fields() {
        assert_eq!(parse_field("4:5"), Ok(PackedField { width: 4, value: 5 }));
        assert_eq!(parse_field("3:-4"), Ok(PackedField { width: 3, value: -4 }));
        assert_eq!(
            parse_field("64:0xFFFFFFFFFFFFFFFF"),
            Ok(PackedField { width: 64, value: -1 })
        );
        assert_eq!(parse_field("12:0xABC"), Ok(PackedField { width: 12, value: 0xABC }));
    }

    #[test]
    fn reject_bad_fields() {
        assert!(parse_field("5").is_err());
        assert!(parse_field("0:0").is_err());
        assert!(parse_field("65:1").is_err());
        assert!(parse_field("4:16").is_err());
        assert!(parse_field("3:-5").is_err());
        assert!(parse_field("8:zz").is_err());
    }
}
