use crate::BitInt;

/// Gets the width of `T` in bits.
#[inline(always)]
pub fn size_of<T: BitInt>() -> u32 {
    T::BITS
}

/// Creates a mask with only the bit at the 1-based `pos` set.
///
/// Yields zero when `pos` is 0 or exceeds the width of `T`.
#[inline]
pub fn mask_one<T: BitInt>(pos: u32) -> T {
    if pos == 0 || pos > T::BITS {
        T::ZERO
    } else {
        T::ONE << (pos - 1)
    }
}

/// Creates a mask with the `n` most significant bits set.
#[inline]
pub fn mask_msb<T: BitInt>(n: u32) -> T {
    if n >= T::BITS {
        T::ALL_ONES
    } else if n == 0 {
        T::ZERO
    } else {
        T::ALL_ONES << (T::BITS - n)
    }
}

/// Creates a mask with the `n` least significant bits set.
#[inline]
pub fn mask_lsb<T: BitInt>(n: u32) -> T {
    if n >= T::BITS {
        T::ALL_ONES
    } else {
        !(T::ALL_ONES << n)
    }
}

/// Selects the bit at the 1-based `pos`, returning either 1 or 0.
#[inline]
pub fn select_one<T: BitInt>(value: T, pos: u32) -> T {
    if value & mask_one::<T>(pos) != T::ZERO {
        T::ONE
    } else {
        T::ZERO
    }
}

/// Selects the `n` most significant bits of `value`, moved down into
/// the `n` least significant bits of the result.
#[inline]
pub fn select_msb<T: BitInt>(value: T, n: u32) -> T {
    if n == 0 {
        T::ZERO
    } else if n >= T::BITS {
        value
    } else {
        (value >> (T::BITS - n)) & mask_lsb::<T>(n)
    }
}

/// Selects the `n` least significant bits of `value`.
#[inline]
pub fn select_lsb<T: BitInt>(value: T, n: u32) -> T {
    value & mask_lsb::<T>(n)
}

/// Sets the bit at the 1-based `pos` in `value` to the LSB of `bit`.
///
/// Returns the updated value.
#[inline]
pub fn set_one<T: BitInt>(value: &mut T, bit: T, pos: u32) -> T {
    let mask = mask_one::<T>(pos);

    *value &= !mask;
    if bit & T::ONE != T::ZERO {
        *value |= mask;
    }

    *value
}

/// Replaces the `n` most significant bits of `value` with the `n`
/// least significant bits of `bits`.
///
/// Returns the updated value.
#[inline]
pub fn set_msb<T: BitInt>(value: &mut T, bits: T, n: u32) -> T {
    if n != 0 {
        let n = n.min(T::BITS);

        *value &= !mask_msb::<T>(n);
        *value |= select_lsb(bits, n) << (T::BITS - n);
    }

    *value
}

/// Replaces the `n` least significant bits of `value` with the `n`
/// least significant bits of `bits`.
///
/// Returns the updated value.
#[inline]
pub fn set_lsb<T: BitInt>(value: &mut T, bits: T, n: u32) -> T {
    *value &= !mask_lsb::<T>(n);
    *value |= select_lsb(bits, n);
    *value
}
