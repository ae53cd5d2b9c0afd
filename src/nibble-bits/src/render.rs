use crate::BitInt;

/// Folds a sequence of bits into a `T`, with the first element ending up
/// as the most significant of the produced bits.
///
/// # Panics
///
/// Panics when the sequence holds more elements than `T` has bits.
pub fn to_binary<T, I>(bits: I) -> T
where
    T: BitInt,
    I: IntoIterator<Item = bool>,
{
    let mut len = 0;
    bits.into_iter().fold(T::ZERO, |acc, bit| {
        len += 1;
        assert!(len <= T::BITS, "bit sequence overflows {} bit type", T::BITS);

        (acc << 1) | if bit { T::ONE } else { T::ZERO }
    })
}

/// Renders all bits of `value` as `'0'` and `'1'`, MSB first.
pub fn to_string<T: BitInt>(value: T) -> String {
    format!("{:0width$b}", value.to_raw(), width = T::BITS as usize)
}

/// Renders all bits of `value` as `'0'` and `'1'`, LSB first.
pub fn to_string_lsb<T: BitInt>(value: T) -> String {
    to_string(value).chars().rev().collect()
}
