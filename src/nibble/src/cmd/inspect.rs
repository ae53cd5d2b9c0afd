use clap::{Args, ValueEnum};
use nibble_bits::*;

use super::Command;
use crate::utils::{self, human_bool};

/// Subcommand for examining the bits of an integer value.
#[derive(Debug, Args)]
pub struct Inspect {
    /// The value to inspect.
    ///
    /// Accepts `0x`, `0o` and `0b` prefixes.
    #[clap(allow_hyphen_values = true, value_parser = utils::parse_int)]
    value: i128,

    /// The integer type to interpret the value as.
    #[clap(short = 't', long = "type", value_enum, default_value_t = IntType::U32)]
    ty: IntType,
}

/// The integer type to interpret a value as.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum IntType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
}

impl Command for Inspect {
    fn handle(self) -> eyre::Result<()> {
        match self.ty {
            IntType::U8 => report::<u8>(self.value),
            IntType::I8 => report::<i8>(self.value),
            IntType::U16 => report::<u16>(self.value),
            IntType::I16 => report::<i16>(self.value),
            IntType::U32 => report::<u32>(self.value),
            IntType::I32 => report::<i32>(self.value),
            IntType::U64 => report::<u64>(self.value),
            IntType::I64 => report::<i64>(self.value),
        }
    }
}

fn report<T: BitInt + TryFrom<i128>>(raw: i128) -> eyre::Result<()> {
    let Ok(value) = T::try_from(raw) else {
        eyre::bail!("{raw} is out of range for a {} bit {} integer", T::BITS, signedness::<T>());
    };

    println!("value:       {value:?}");
    println!("binary:      {}", to_string(value));
    println!("lsb first:   {}", to_string_lsb(value));
    println!("popcount:    {}", popcount(value));
    println!("ffs:         {}", ffs(value));
    println!("msb:         {}", msb(value));
    println!("bits needed: {}", bits_needed(value));
    println!("parity:      {}", if is_odd(value) { "odd" } else { "even" });
    println!("power of 2:  {}", human_bool(is_power_of_2(value)));

    Ok(())
}

fn signedness<T: BitInt>() -> &'static str {
    if T::SIGNED { "signed" } else { "unsigned" }
}
