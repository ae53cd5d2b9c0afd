use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not, Shl, Shr},
};

mod private {
    pub trait Sealed {}
}

/// An integer type the bit primitives can operate on.
///
/// This trait is sealed and implemented for `u8`, `i8`, `u16`, `i16`,
/// `u32`, `i32`, `u64` and `i64`. Right shifts on signed types are
/// arithmetic, which the sign extension helpers rely on.
pub trait BitInt:
    Copy
    + Eq
    + Ord
    + fmt::Debug
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + private::Sealed
{
    /// The width of the type in bits.
    const BITS: u32;

    /// The value with no bits set.
    const ZERO: Self;

    /// The value with only the LSB set.
    const ONE: Self;

    /// The value with every bit set.
    const ALL_ONES: Self;

    /// Whether the type is a signed two's complement integer.
    const SIGNED: bool;

    /// Keeps the low [`Self::BITS`] bits of `raw` as a value of this type.
    fn truncate(raw: u64) -> Self;

    /// Gets the two's complement bits of the value, zero-extended to
    /// [`u64`].
    fn to_raw(self) -> u64;

    /// Counts the bits which are set.
    fn count_ones(self) -> u32;

    /// Counts the unset bits below the lowest set bit.
    fn trailing_zeros(self) -> u32;

    /// Counts the unset bits above the highest set bit.
    fn leading_zeros(self) -> u32;

    /// Subtracts `rhs`, wrapping around at the type's boundaries.
    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_bit_int {
    ($($ty:ty => $raw:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl BitInt for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const ALL_ONES: Self = !0;
                const SIGNED: bool = <$ty>::MIN != 0;

                #[inline(always)]
                fn truncate(raw: u64) -> Self {
                    raw as $ty
                }

                #[inline(always)]
                fn to_raw(self) -> u64 {
                    self as $raw as u64
                }

                #[inline(always)]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline(always)]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }

                #[inline(always)]
                fn leading_zeros(self) -> u32 {
                    <$ty>::leading_zeros(self)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}

impl_bit_int! {
    u8 => u8,
    i8 => u8,
    u16 => u16,
    i16 => u16,
    u32 => u32,
    i32 => u32,
    u64 => u64,
    i64 => u64,
}

#[cfg(test)]
mod tests {
    use super::BitInt;

    #[test]
    fn raw_round_trip() {
        assert_eq!((-1i8).to_raw(), 0xFF);
        assert_eq!(i8::truncate(0xFF), -1);
        assert_eq!(i16::truncate(0x1_8000), i16::MIN);
        assert_eq!(u32::truncate(u64::MAX), u32::MAX);
        assert_eq!(i64::MIN.to_raw(), 1 << 63);
    }

    #[test]
    fn signedness() {
        assert!(i8::SIGNED && i64::SIGNED);
        assert!(!u8::SIGNED && !u64::SIGNED);
    }
}
