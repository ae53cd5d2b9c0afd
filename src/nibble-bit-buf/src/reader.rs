use std::path::Path;

use nibble_bits::{select_one, shift_signed};
use nibble_utils::{fs, hints};

use crate::{BitBuffer, BitCursor, FileError};

/// Sequentially reads bits out of a byte buffer, MSB first.
///
/// Reads past the end of the buffer never fail; they produce zero
/// bits and leave the position untouched.
#[derive(Debug)]
pub struct BitStreamReader<'a> {
    cursor: BitCursor<&'a [u8]>,
}

impl<'a> BitStreamReader<'a> {
    /// Creates a reader over borrowed `data`.
    ///
    /// No copy is made; the reader may outlive neither the data nor
    /// any mutation of it.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self::from_buffer(BitBuffer::Borrowed(data))
    }

    /// Creates a reader over an existing [`BitBuffer`].
    #[inline]
    pub fn from_buffer(buffer: BitBuffer<&'a [u8]>) -> Self {
        Self {
            cursor: BitCursor::new(buffer),
        }
    }

    /// Reads the bit at the current position and advances by one.
    ///
    /// Returns 0 without advancing when the position is past the end
    /// of the buffer.
    pub fn get_bit(&mut self) -> u8 {
        let offset = self.cursor.bit_offset();
        let Some(&byte) = self.cursor.buffer().as_slice().get(self.cursor.byte_index()) else {
            hints::cold_path();
            return 0;
        };

        self.cursor.advance(1);
        select_one(byte, u8::BITS - offset)
    }

    /// Reads `length` bits, most significant first, into the low bits
    /// of the result.
    ///
    /// Bits past the end of the buffer read as zero. `length` should
    /// not exceed 64; excess leading bits are shifted out.
    pub fn get(&mut self, length: u32) -> u64 {
        debug_assert!(length <= u64::BITS, "cannot read {length} bits at once");
        (0..length).fold(0, |value, _| {
            (value << 1) | u64::from(self.get_bit())
        })
    }

    /// Reads `length` bits as a two's complement quantity and
    /// sign-extends the result.
    #[inline]
    pub fn get_signed(&mut self, length: u32) -> i64 {
        shift_signed(self.get(length), length)
    }

    /// Reads a single bit as a boolean.
    #[inline]
    pub fn get_bool(&mut self) -> bool {
        self.get_bit() != 0
    }

    /// Skips the remainder of a partially consumed byte.
    ///
    /// Does nothing when the reader is byte-aligned.
    #[inline]
    pub fn flush(&mut self) {
        self.cursor.align();
    }
}

impl BitStreamReader<'static> {
    /// Creates a reader that owns `data`.
    #[inline]
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self::from_buffer(BitBuffer::from(data))
    }

    /// Creates a reader over an owned copy of `data`.
    #[inline]
    pub fn copy_from<T: AsRef<[u8]>>(data: T) -> Self {
        Self::from_buffer(BitBuffer::copy_from(data))
    }

    /// Reads the file at `path` into memory and creates a reader over
    /// its contents.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FileError> {
        let data = fs::read_bytes(path)?;
        log::debug!("loaded {} bytes for bit reading", data.len());

        Ok(Self::from_vec(data))
    }
}

impl FromIterator<u8> for BitStreamReader<'static> {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from_buffer(iter.into_iter().collect())
    }
}

impl_cursor_accessors!(BitStreamReader);
