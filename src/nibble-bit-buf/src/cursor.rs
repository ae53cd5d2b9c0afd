use nibble_bits::round_to_byte;

use crate::BitBuffer;

/// A [`BitBuffer`] paired with a bit position.
///
/// The position counts bits from the start of the buffer and may
/// point past its end; bounds are the concern of the stream built
/// on top of the cursor.
#[derive(Debug)]
pub struct BitCursor<B> {
    buffer: BitBuffer<B>,
    position: usize,
}

impl<B> BitCursor<B> {
    /// Creates a cursor at the start of `buffer`.
    #[inline]
    pub fn new(buffer: BitBuffer<B>) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Gets a reference to the underlying buffer.
    #[inline]
    pub fn buffer(&self) -> &BitBuffer<B> {
        &self.buffer
    }

    /// Gets a mutable reference to the underlying buffer.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut BitBuffer<B> {
        &mut self.buffer
    }

    /// Consumes the cursor and returns the underlying buffer.
    #[inline]
    pub fn into_buffer(self) -> BitBuffer<B> {
        self.buffer
    }

    /// Gets the current bit position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to an absolute bit position.
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Moves the cursor back to the start of the buffer.
    #[inline]
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor forward by `bits`.
    #[inline]
    pub fn advance(&mut self, bits: usize) {
        self.position += bits;
    }

    /// Gets the offset of the cursor into the current byte, in `0..8`.
    #[inline]
    pub fn bit_offset(&self) -> u32 {
        (self.position % u8::BITS as usize) as u32
    }

    /// Gets the index of the byte the cursor currently points into.
    #[inline]
    pub fn byte_index(&self) -> usize {
        self.position / u8::BITS as usize
    }

    /// Indicates whether the cursor sits on a byte boundary.
    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.bit_offset() == 0
    }

    /// Gets the number of bytes touched so far, counting a partially
    /// consumed byte as a whole one.
    #[inline]
    pub fn last_byte_position(&self) -> usize {
        round_to_byte(self.position)
    }

    /// Moves the cursor forward to the next byte boundary.
    ///
    /// Does nothing when the cursor is already aligned.
    #[inline]
    pub fn align(&mut self) {
        self.position = self.last_byte_position() * u8::BITS as usize;
    }
}

impl<B: AsRef<[u8]>> BitCursor<B> {
    /// Gets the size of the underlying buffer in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.buffer.size()
    }

    /// Gets the size of the underlying buffer in bits.
    #[inline]
    pub fn size_bits(&self) -> usize {
        self.buffer.size_bits()
    }

    /// Gets the number of bits between the cursor and the end of the
    /// buffer, or 0 when the cursor is past the end.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        self.size_bits().saturating_sub(self.position)
    }

    /// Resizes the underlying buffer, see [`BitBuffer::resize`].
    #[inline]
    pub fn resize(&mut self, new_size: usize) -> usize {
        self.buffer.resize(new_size)
    }
}

// Forwards the position accessors shared by every stream type to the
// `cursor` field of the implementing struct.
macro_rules! impl_cursor_accessors {
    ($ty:ident) => {
        impl $ty<'_> {
            /// Gets the current position in bits.
            #[inline]
            pub fn position(&self) -> usize {
                self.cursor.position()
            }

            /// Moves the stream to an absolute bit position.
            #[inline]
            pub fn set_position(&mut self, position: usize) {
                self.cursor.set_position(position);
            }

            /// Moves the stream back to the first bit.
            #[inline]
            pub fn reset(&mut self) {
                self.cursor.reset();
            }

            /// Gets the offset of the stream into the current byte.
            #[inline]
            pub fn bit_offset(&self) -> u32 {
                self.cursor.bit_offset()
            }

            /// Gets the index of the byte the stream currently points into.
            #[inline]
            pub fn byte_index(&self) -> usize {
                self.cursor.byte_index()
            }

            /// Gets the number of bytes touched so far, counting a
            /// partial byte as a whole one.
            #[inline]
            pub fn last_byte_position(&self) -> usize {
                self.cursor.last_byte_position()
            }

            /// Gets the size of the underlying buffer in bytes.
            #[inline]
            pub fn size(&self) -> usize {
                self.cursor.size()
            }

            /// Gets the size of the underlying buffer in bits.
            #[inline]
            pub fn size_bits(&self) -> usize {
                self.cursor.size_bits()
            }

            /// Gets the number of bits left until the end of the buffer.
            #[inline]
            pub fn remaining_bits(&self) -> usize {
                self.cursor.remaining_bits()
            }

            /// Gets the underlying buffer.
            #[inline]
            pub fn buffer(&self) -> &[u8] {
                self.cursor.buffer().as_slice()
            }

            /// Consumes the stream and returns the underlying bytes.
            ///
            /// Borrowed memory is copied out.
            #[inline]
            pub fn into_vec(self) -> Vec<u8> {
                self.cursor.into_buffer().into_vec()
            }
        }

        impl std::ops::Index<usize> for $ty<'_> {
            type Output = u8;

            #[inline]
            fn index(&self, idx: usize) -> &u8 {
                &self.cursor.buffer()[idx]
            }
        }
    };
}
