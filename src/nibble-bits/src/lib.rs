//! Portable primitives for manipulating bits inside fixed-width integers.
//!
//! Everything in this crate is generic over [`BitInt`], which covers the
//! signed and unsigned integers of 8, 16, 32 and 64 bits. The functions
//! are pure and do not allocate, with the exception of the string
//! renderers.
//!
//! # Bit positions
//!
//! Functions which take a bit position count **from 1 at the LSB**. A
//! position of 0, or one beyond the width of the type, addresses no bit
//! at all: masks come out as zero and setters leave the value alone.
//! Counts of bits (`n`) saturate at the width of the type instead.
//!
//! ```
//! use nibble_bits::{mask_one, select_one, set_one};
//!
//! assert_eq!(mask_one::<u8>(8), 0x80);
//! assert_eq!(mask_one::<u8>(9), 0);
//!
//! let mut v = 0u8;
//! assert_eq!(set_one(&mut v, 1, 3), 0b100);
//! assert_eq!(select_one(v, 3), 1);
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod int;
pub use int::BitInt;

mod mask;
pub use mask::*;

mod ops;
pub use ops::*;

mod sign;
pub use sign::*;

mod render;
pub use render::*;
