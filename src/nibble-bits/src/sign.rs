use crate::BitInt;

/// Interprets the low `src_bits` bits of `value` as a two's complement
/// quantity and sign-extends it into `T`.
///
/// For unsigned `T`, the value is only truncated to `src_bits` bits.
/// A `src_bits` of 0 yields zero. When `src_bits` exceeds the width of
/// `T`, no extension happens and the value is merely truncated to `T`.
#[inline]
pub fn shift_signed<T: BitInt>(value: u64, src_bits: u32) -> T {
    if src_bits == 0 {
        return T::ZERO;
    }

    let shift = T::BITS.saturating_sub(src_bits);
    (T::truncate(value) << shift) >> shift
}

/// Sign-extends an `N` bit wide `value` into `T`, with `N` known at
/// compile time.
///
/// Instantiating this with `N == 0` or `N` wider than `T` fails to
/// compile.
#[inline]
pub fn extend_sign<T: BitInt, const N: u32>(value: u64) -> T {
    const {
        assert!(N > 0, "cannot sign-extend a zero-width value");
        assert!(N <= T::BITS, "source width exceeds target type");
    }

    shift_signed::<T>(value, N)
}

/// Determines the smallest number of bits that represent `value` such
/// that sign-extending it back into `T` reproduces `value`.
///
/// The result is always in `1..=T::BITS`.
pub fn bits_needed<T: BitInt>(value: T) -> u32 {
    let raw = value.to_raw();
    (1..T::BITS)
        .find(|&bits| shift_signed::<T>(raw, bits) == value)
        .unwrap_or(T::BITS)
}
