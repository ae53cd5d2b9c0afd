use crate::{mask_lsb, BitInt};

/// A bitwise operator which can fold a sequence of integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    /// The value which leaves any operand unchanged under this operator.
    #[inline]
    pub fn identity<T: BitInt>(self) -> T {
        match self {
            Self::And => T::ALL_ONES,
            Self::Or | Self::Xor => T::ZERO,
        }
    }

    /// Applies the operator to a pair of values.
    #[inline]
    pub fn apply<T: BitInt>(self, lhs: T, rhs: T) -> T {
        match self {
            Self::And => lhs & rhs,
            Self::Or => lhs | rhs,
            Self::Xor => lhs ^ rhs,
        }
    }
}

/// Folds all `values` in order with the given operator.
///
/// An empty sequence produces the operator's identity.
#[inline]
pub fn reduce<T, I>(values: I, op: BitOp) -> T
where
    T: BitInt,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .fold(op.identity(), |acc, v| op.apply(acc, v))
}

/// Computes the bitwise AND over all `values`.
#[inline]
pub fn and_all<T: BitInt, I: IntoIterator<Item = T>>(values: I) -> T {
    reduce(values, BitOp::And)
}

/// Computes the bitwise OR over all `values`.
#[inline]
pub fn or_all<T: BitInt, I: IntoIterator<Item = T>>(values: I) -> T {
    reduce(values, BitOp::Or)
}

/// Computes the bitwise XOR over all `values`.
#[inline]
pub fn xor_all<T: BitInt, I: IntoIterator<Item = T>>(values: I) -> T {
    reduce(values, BitOp::Xor)
}

/// Finds the 1-based position of the lowest set bit.
///
/// Returns 0 when no bit is set.
#[inline]
pub fn ffs<T: BitInt>(value: T) -> u32 {
    if value == T::ZERO {
        0
    } else {
        value.trailing_zeros() + 1
    }
}

/// Finds the 1-based position of the highest set bit.
///
/// For positive values this is `floor(log2(value)) + 1`. Returns 0
/// when no bit is set.
#[inline]
pub fn msb<T: BitInt>(value: T) -> u32 {
    T::BITS - value.leading_zeros()
}

/// Counts the bits set in `value`.
#[inline]
pub fn popcount<T: BitInt>(value: T) -> u32 {
    value.count_ones()
}

/// Rotates `value` left by `n` bits over the full width of `T`.
#[inline]
pub fn rotl<T: BitInt>(value: T, n: u32) -> T {
    rotl_within(value, n, T::BITS)
}

/// Rotates `value` right by `n` bits over the full width of `T`.
#[inline]
pub fn rotr<T: BitInt>(value: T, n: u32) -> T {
    rotr_within(value, n, T::BITS)
}

/// Rotates the low `bit_length` bits of `value` left by `n` bits.
///
/// Bits above `bit_length` do not take part in the rotation and are
/// zero in the result. `n` wraps around modulo `bit_length`.
///
/// # Panics
///
/// `bit_length` must be in `1..=T::BITS`. Zero panics; a window wider
/// than `T` panics in debug builds.
#[inline]
pub fn rotl_within<T: BitInt>(value: T, n: u32, bit_length: u32) -> T {
    debug_assert!(bit_length <= T::BITS, "rotation window exceeds type width");

    let window = mask_lsb::<T>(bit_length);
    let n = n % bit_length;
    if n == 0 {
        return value & window;
    }

    ((value << n) & window) | ((value >> (bit_length - n)) & mask_lsb::<T>(n))
}

/// Rotates the low `bit_length` bits of `value` right by `n` bits.
///
/// See [`rotl_within`] for the treatment of the window.
#[inline]
pub fn rotr_within<T: BitInt>(value: T, n: u32, bit_length: u32) -> T {
    debug_assert!(bit_length <= T::BITS, "rotation window exceeds type width");

    let window = mask_lsb::<T>(bit_length);
    let n = n % bit_length;
    if n == 0 {
        return value & window;
    }

    let high = (value >> n) & mask_lsb::<T>(bit_length - n);
    let low = (value & mask_lsb::<T>(n)) << (bit_length - n);
    high | low
}

/// Checks whether `value` is a positive power of two.
#[inline]
pub fn is_power_of_2<T: BitInt>(value: T) -> bool {
    value > T::ZERO && value & value.wrapping_sub(T::ONE) == T::ZERO
}

#[inline]
pub fn is_odd<T: BitInt>(value: T) -> bool {
    value & T::ONE != T::ZERO
}

#[inline]
pub fn is_even<T: BitInt>(value: T) -> bool {
    !is_odd(value)
}

/// Rounds `value` to a multiple of `multiple`.
///
/// Non-negative values round up, negative values round toward zero.
///
/// # Panics
///
/// Panics when `multiple` is zero.
#[inline]
pub fn round_to_multiple(value: i64, multiple: i64) -> i64 {
    assert!(multiple != 0, "cannot round to a multiple of zero");

    let rem = value % multiple;
    if rem == 0 || value < 0 {
        value - rem
    } else {
        value - rem + multiple
    }
}

/// Gets the number of bytes needed to hold `bits` bits.
#[inline(always)]
pub const fn round_to_byte(bits: usize) -> usize {
    bits.div_ceil(u8::BITS as usize)
}
