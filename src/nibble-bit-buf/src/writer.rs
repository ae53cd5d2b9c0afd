use std::{borrow::Cow, path::Path};

use nibble_bits::{mask_msb, select_one, set_one};
use nibble_utils::{fs, hints};

use crate::{BitBuffer, BitCursor, FileError};

/// Sequentially writes bits into a byte buffer, MSB first.
///
/// Writers over owned memory grow their buffer on demand. Writers
/// over borrowed memory cannot grow and panic when a write would
/// overrun the end.
#[derive(Debug)]
pub struct BitStreamWriter<'a> {
    cursor: BitCursor<&'a mut [u8]>,
}

impl<'a> BitStreamWriter<'a> {
    /// Creates a writer over borrowed `data`.
    ///
    /// Bits are written into the existing bytes in place.
    #[inline]
    pub fn new(data: &'a mut [u8]) -> Self {
        Self::from_buffer(BitBuffer::Borrowed(data))
    }

    /// Creates a writer over an existing [`BitBuffer`].
    #[inline]
    pub fn from_buffer(buffer: BitBuffer<&'a mut [u8]>) -> Self {
        Self {
            cursor: BitCursor::new(buffer),
        }
    }

    // Ensures the byte holding the bit at the current position exists.
    fn reserve_bit(&mut self) {
        let byte = self.cursor.byte_index();
        if !hints::unlikely(byte >= self.cursor.size()) {
            return;
        }

        let size = self.cursor.size();
        if !self.cursor.buffer().is_owned() {
            panic!(
                "bit write at offset {} overruns borrowed buffer of {size} bytes",
                self.cursor.position()
            );
        }

        // Growing by half stalls for buffers of 0 or 1 bytes and may
        // still fall short after a jump via `set_position`.
        if self.cursor.resize(0) <= byte {
            self.cursor.resize(byte + 1);
        }
    }

    /// Writes the LSB of `bit` at the current position and advances
    /// by one.
    pub fn put_bit(&mut self, bit: u8) {
        self.reserve_bit();

        let pos = u8::BITS - self.cursor.bit_offset();
        let idx = self.cursor.byte_index();
        set_one(&mut self.cursor.buffer_mut().as_mut_slice()[idx], bit, pos);

        self.cursor.advance(1);
    }

    /// Writes the low `length` bits of `value`, most significant
    /// first.
    ///
    /// `length` should not exceed 64; positions above bit 64 are
    /// written as zero.
    pub fn put(&mut self, length: u32, value: u64) {
        debug_assert!(length <= u64::BITS, "cannot write {length} bits at once");
        for pos in (1..=length).rev() {
            self.put_bit(select_one(value, pos) as u8);
        }
    }

    /// Writes the low `length` bits of the two's complement
    /// representation of `value`.
    #[inline]
    pub fn put_signed(&mut self, length: u32, value: i64) {
        self.put(length, value as u64);
    }

    /// Writes a single bit holding `value`.
    #[inline]
    pub fn put_bool(&mut self, value: bool) {
        self.put_bit(value as u8);
    }

    /// Pads the current byte with zero bits and moves to the next
    /// byte boundary.
    ///
    /// Does nothing when the writer is byte-aligned.
    pub fn flush(&mut self) {
        let taken = self.cursor.bit_offset();
        if taken != 0 {
            let idx = self.cursor.byte_index();
            if let Some(byte) = self.cursor.buffer_mut().as_mut_slice().get_mut(idx) {
                *byte &= mask_msb::<u8>(taken);
            }
        }

        self.cursor.align();
    }

    /// Resizes an owned buffer, see [`BitBuffer::resize`].
    #[inline]
    pub fn resize(&mut self, new_size: usize) -> usize {
        self.cursor.resize(new_size)
    }

    /// Gets the bytes written so far, including a partially written
    /// trailing byte.
    ///
    /// The view ends at the buffer's end even when the position was
    /// moved past it.
    ///
    /// Call [`BitStreamWriter::flush`] first to have the trailing
    /// byte zero-padded.
    #[inline]
    pub fn view(&self) -> &[u8] {
        let end = self.cursor.last_byte_position().min(self.cursor.size());
        &self.cursor.buffer().as_slice()[..end]
    }

    /// Writes the [`BitStreamWriter::last_byte_position`] bytes spanned
    /// so far to the file at `path`, creating or truncating it.
    ///
    /// Bytes past the end of the buffer, which are only spanned after
    /// moving the position without writing, are stored as zero.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FileError> {
        let end = self.cursor.last_byte_position();
        let mut data = Cow::Borrowed(self.view());
        if data.len() < end {
            data.to_mut().resize(end, 0);
        }

        log::debug!("storing {} bytes of bit data", data.len());

        fs::write_bytes(path, &data)
    }
}

impl BitStreamWriter<'static> {
    /// Creates a writer over a zeroed, owned buffer of `size` bytes.
    #[inline]
    pub fn with_size(size: usize) -> Self {
        Self::from_buffer(BitBuffer::with_size(size))
    }

    /// Creates a writer that owns `data` and overwrites it from the
    /// start.
    #[inline]
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self::from_buffer(BitBuffer::from(data))
    }
}

impl_cursor_accessors!(BitStreamWriter);
