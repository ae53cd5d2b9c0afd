//! Provides sequential bit level reading and writing of byte buffers.
//!
//! Bits are packed **MSB first**: the first bit written into a fresh
//! byte lands in its most significant position, and subsequent bits
//! fill downwards. Multi-bit fields are likewise stored with their
//! most significant bit first, so fields may freely span byte
//! boundaries.
//!
//! ```
//! use nibble_bit_buf::{BitStreamReader, BitStreamWriter};
//!
//! let mut writer = BitStreamWriter::with_size(1);
//! writer.put(4, 0b0101);
//! writer.flush();
//! assert_eq!(writer.view(), &[0x50]);
//!
//! let mut reader = BitStreamReader::new(writer.view());
//! assert_eq!(reader.get(4), 0b0101);
//! ```
//!
//! # Memory
//!
//! Streams operate on a [`BitBuffer`], which either borrows memory
//! from the caller or owns a heap allocation. Only owned buffers are
//! ever resized; writers grow them on demand. Writing past the end of
//! a borrowed buffer panics, while reading past the end of any buffer
//! yields zero bits.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use nibble_utils::fs::FileError;

mod buffer;
pub use buffer::BitBuffer;

#[macro_use]
mod cursor;
pub use cursor::BitCursor;

mod reader;
pub use reader::BitStreamReader;

mod writer;
pub use writer::BitStreamWriter;
