use nibble_bits::*;

#[test]
fn sizes() {
    assert_eq!(size_of::<i8>(), 8);
    assert_eq!(size_of::<u8>(), 8);
    assert_eq!(size_of::<i16>(), 16);
    assert_eq!(size_of::<u16>(), 16);
    assert_eq!(size_of::<i32>(), 32);
    assert_eq!(size_of::<u32>(), 32);
    assert_eq!(size_of::<i64>(), 64);
    assert_eq!(size_of::<u64>(), 64);
}

#[test]
fn mask_bounds() {
    assert_eq!(mask_one::<u64>(0), 0);
    assert_eq!(mask_msb::<u64>(0), 0);
    assert_eq!(mask_lsb::<u64>(0), 0);

    assert_eq!(mask_one::<u64>(64), 1u64 << 63);
    assert_eq!(mask_msb::<u64>(64), !0);
    assert_eq!(mask_lsb::<u64>(64), !0);

    assert_eq!(mask_one::<u64>(65), 0);
    assert_eq!(mask_msb::<u64>(65), !0);
    assert_eq!(mask_lsb::<u64>(65), !0);
}

#[test]
fn mask_every_position() {
    let mut msb = i64::MIN;
    let mut lsb = 1u64;

    for i in 1..=64 {
        assert_eq!(mask_one::<u64>(i), 1u64 << (i - 1));
        assert_eq!(mask_msb::<u64>(i), msb as u64);
        assert_eq!(mask_lsb::<u64>(i), lsb);

        msb >>= 1;
        lsb = (lsb << 1) | 1;
    }
}

#[test]
fn signed_masks() {
    assert_eq!(mask_one::<i8>(8), i8::MIN);
    assert_eq!(mask_msb::<i16>(1), i16::MIN);
    assert_eq!(mask_lsb::<i32>(31), i32::MAX);
    assert_eq!(mask_msb::<i32>(32), -1);
}

#[test]
fn mask_one_selects_only_its_position() {
    for pos in 1..=32 {
        let mask = mask_one::<u32>(pos);
        for other in 1..=32 {
            let expected = if other == pos { 1 } else { 0 };
            assert_eq!(select_one(mask, other), expected);
        }
    }
}

#[test]
fn lsb_and_msb_masks_partition() {
    for n in 0..=16 {
        let lsb = mask_lsb::<u16>(n);
        let msb = mask_msb::<u16>(16 - n);

        assert_eq!(lsb | msb, u16::MAX);
        assert_eq!(lsb & msb, 0);
    }
}

#[test]
fn select() {
    assert_eq!(select_one(0u64, 1), 0);
    assert_eq!(select_msb(0u64, 1), 0);
    assert_eq!(select_lsb(0u64, 1), 0);

    assert_eq!(select_one(1u64, 1), 1);
    assert_eq!(select_msb(1u64, 1), 0);
    assert_eq!(select_lsb(1u64, 1), 1);

    assert_eq!(select_one(1u64 << 63, 1), 0);
    assert_eq!(select_msb(1u64 << 63, 1), 1);
    assert_eq!(select_lsb(1u64 << 63, 1), 0);

    assert_eq!(select_msb(0xA5u8, 4), 0xA);
    assert_eq!(select_lsb(0xA5u8, 4), 0x5);
    assert_eq!(select_msb(-1i16, 3), 0b111);
    assert_eq!(select_one(0xA5u8, 0), 0);
    assert_eq!(select_one(0xA5u8, 9), 0);
}

#[test]
fn set() {
    let mut x = 0u32;

    assert_eq!(set_one(&mut x, 1, 1), 0x0000_0001);
    assert_eq!(set_one(&mut x, 1, 32), 0x8000_0001);
    assert_eq!(set_one(&mut x, 0, 1), 0x8000_0000);
    assert_eq!(set_msb(&mut x, 0x07, 4), 0x7000_0000);
    assert_eq!(set_msb(&mut x, 0x0F, 5), 0x7800_0000);
    assert_eq!(set_lsb(&mut x, 0x01, 1), 0x7800_0001);
    assert_eq!(set_lsb(&mut x, 0x55, 8), 0x7800_0055);
    assert_eq!(set_lsb(&mut x, 0x00, 8), 0x7800_0000);
    assert_eq!(set_lsb(&mut x, 0x30, 6), 0x7800_0030);
    assert_eq!(set_lsb(&mut x, 0x11, 5), 0x7800_0031);

    assert_eq!(x, 0x7800_0031);
}

#[test]
fn set_out_of_range_is_noop() {
    let mut x = 0x5Au8;

    assert_eq!(set_one(&mut x, 1, 0), 0x5A);
    assert_eq!(set_one(&mut x, 1, 9), 0x5A);
    assert_eq!(set_msb(&mut x, 0xFF, 0), 0x5A);
    assert_eq!(set_lsb(&mut x, 0xFF, 0), 0x5A);
}

#[test]
fn set_signed() {
    let mut x = 0i32;

    assert_eq!(set_one(&mut x, 1, 32), i32::MIN);
    assert_eq!(set_msb(&mut x, 0b11, 2), -0x4000_0000);
    assert_eq!(set_lsb(&mut x, -1, 32), -1);
}
