use std::ops::Index;

/// The memory region a bit stream operates on.
///
/// `B` is the borrowed representation: `&[u8]` for readers and
/// `&mut [u8]` for writers.
#[derive(Debug)]
pub enum BitBuffer<B> {
    /// A heap allocation owned by the buffer.
    ///
    /// This is the only variant that is ever resized. The memory is
    /// freed when the buffer is dropped.
    Owned(Vec<u8>),

    /// Memory owned by the caller, which is never reallocated.
    Borrowed(B),
}

impl<B> BitBuffer<B> {
    /// Allocates a zeroed, owned buffer of `size` bytes.
    #[inline]
    pub fn with_size(size: usize) -> Self {
        Self::Owned(vec![0; size])
    }

    /// Creates an owned buffer holding a copy of `bytes`.
    ///
    /// The copy is made even if `bytes` owns its storage.
    #[inline]
    pub fn copy_from<T: AsRef<[u8]>>(bytes: T) -> Self {
        Self::Owned(bytes.as_ref().to_vec())
    }

    /// Indicates whether the buffer owns its memory.
    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(..))
    }
}

impl<B: AsRef<[u8]>> BitBuffer<B> {
    /// Gets a view of the buffer's storage as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Owned(data) => data,
            Self::Borrowed(data) => data.as_ref(),
        }
    }

    /// Gets the size of the buffer in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// Gets the size of the buffer in bits.
    #[inline]
    pub fn size_bits(&self) -> usize {
        self.size() * u8::BITS as usize
    }

    /// Grows an owned buffer and returns the size after the call.
    ///
    /// A `new_size` of 0 grows the buffer by 50%, rounding down. An
    /// explicit size no larger than the current one does nothing.
    /// Newly added bytes are zeroed and existing bytes are kept.
    ///
    /// Borrowed buffers are never resized.
    pub fn resize(&mut self, new_size: usize) -> usize {
        match self {
            Self::Owned(data) => {
                let size = data.len();
                let new_size = if new_size == 0 {
                    size + size / 2
                } else {
                    new_size
                };

                if new_size > size {
                    log::trace!("growing bit buffer from {size} to {new_size} bytes");
                    data.resize(new_size, 0);
                }

                data.len()
            }

            Self::Borrowed(data) => {
                log::debug!("ignoring resize of borrowed bit buffer to {new_size} bytes");
                data.as_ref().len()
            }
        }
    }

    /// Consumes the buffer and returns its bytes.
    ///
    /// Owned memory is handed out as-is, borrowed memory is copied.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        match self {
            Self::Owned(data) => data,
            Self::Borrowed(data) => data.as_ref().to_vec(),
        }
    }
}

impl<B: AsMut<[u8]>> BitBuffer<B> {
    /// Gets a mutable view of the buffer's storage.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::Owned(data) => data,
            Self::Borrowed(data) => data.as_mut(),
        }
    }
}

impl<B> From<Vec<u8>> for BitBuffer<B> {
    #[inline]
    fn from(data: Vec<u8>) -> Self {
        Self::Owned(data)
    }
}

impl<B> FromIterator<u8> for BitBuffer<B> {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::Owned(iter.into_iter().collect())
    }
}

impl<B: AsRef<[u8]>> Index<usize> for BitBuffer<B> {
    type Output = u8;

    #[inline]
    fn index(&self, idx: usize) -> &u8 {
        &self.as_slice()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::BitBuffer;

    #[test]
    fn grow_by_half() {
        let mut buf = BitBuffer::<&[u8]>::with_size(4);

        assert_eq!(buf.resize(0), 6);
        assert_eq!(buf.resize(0), 9);
        assert_eq!(buf.as_slice(), &[0; 9]);
    }

    #[test]
    fn shrinking_is_noop() {
        let mut buf = BitBuffer::<&[u8]>::from(vec![1, 2, 3]);

        assert_eq!(buf.resize(2), 3);
        assert_eq!(buf.resize(3), 3);
        assert_eq!(buf.resize(5), 5);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 0, 0]);
    }

    #[test]
    fn tiny_buffers_do_not_grow_by_half() {
        let mut empty = BitBuffer::<&[u8]>::with_size(0);
        assert_eq!(empty.resize(0), 0);

        let mut one = BitBuffer::<&[u8]>::with_size(1);
        assert_eq!(one.resize(0), 1);
    }

    #[test]
    fn borrowed_is_never_resized() {
        let mut data = [0xAA; 2];
        let mut buf = BitBuffer::Borrowed(&mut data[..]);

        assert!(!buf.is_owned());
        assert_eq!(buf.resize(0), 2);
        assert_eq!(buf.resize(16), 2);

        buf.as_mut_slice()[1] = 0x55;
        assert_eq!(data, [0xAA, 0x55]);
    }

    #[test]
    fn copies_are_owned() {
        let source = [1u8, 2, 3];

        let copied = BitBuffer::<&[u8]>::copy_from(source);
        assert!(copied.is_owned());
        assert_eq!(copied[2], 3);

        let collected: BitBuffer<&[u8]> = source.iter().map(|b| b + 1).collect();
        assert_eq!(collected.into_vec(), vec![2, 3, 4]);
    }
}
