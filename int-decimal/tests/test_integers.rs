mod common;

use int_decimal::{Buffer, Integer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{assert_canonical, assert_matches_reference, render};

#[test]
fn test_scenarios() {
    assert_eq!(render(0u8), "0");
    assert_eq!(render(-1i32), "-1");
    assert_eq!(render(255u8), "255");
    assert_eq!(render(-128i8), "-128");
    assert_eq!(render(18446744073709551615u64), "18446744073709551615");
    assert_eq!(render(-9223372036854775808i64), "-9223372036854775808");
    assert_eq!(render(i32::MIN), "-2147483648");
}

#[test]
fn test_zero() {
    assert_eq!(render(0u8), "0");
    assert_eq!(render(0u16), "0");
    assert_eq!(render(0u32), "0");
    assert_eq!(render(0u64), "0");
    assert_eq!(render(0u128), "0");
    assert_eq!(render(0usize), "0");
    assert_eq!(render(0i8), "0");
    assert_eq!(render(0i16), "0");
    assert_eq!(render(0i32), "0");
    assert_eq!(render(0i64), "0");
    assert_eq!(render(0i128), "0");
    assert_eq!(render(0isize), "0");
}

macro_rules! test_extremes {
    ($($name:ident => $t:ident),*) => {$(
        #[test]
        fn $name() {
            for n in [
                $t::MIN,
                $t::MIN + 1,
                $t::MAX - 1,
                $t::MAX,
                $t::MAX / 10,
                $t::MAX / 10 + 1,
            ] {
                assert_matches_reference(n);
            }

            let longest = $t::MIN.to_string().len().max($t::MAX.to_string().len());
            assert_eq!(<$t as Integer>::MAX_LEN, longest);
        }
    )*};
}

test_extremes!(
    test_extremes_u8 => u8,
    test_extremes_u16 => u16,
    test_extremes_u32 => u32,
    test_extremes_u64 => u64,
    test_extremes_u128 => u128,
    test_extremes_usize => usize,
    test_extremes_i8 => i8,
    test_extremes_i16 => i16,
    test_extremes_i32 => i32,
    test_extremes_i64 => i64,
    test_extremes_i128 => i128,
    test_extremes_isize => isize
);

#[test]
fn test_exhaustive_8_bit() {
    let mut buf = Buffer::new();
    for n in u8::MIN..=u8::MAX {
        assert_eq!(buf.format(n), n.to_string());
    }
    for n in i8::MIN..=i8::MAX {
        assert_eq!(buf.format(n), n.to_string());
    }
}

#[test]
fn test_exhaustive_16_bit() {
    let mut buf = Buffer::new();
    for n in u16::MIN..=u16::MAX {
        assert_eq!(buf.format(n), n.to_string());
    }
    for n in i16::MIN..=i16::MAX {
        assert_eq!(buf.format(n), n.to_string());
    }
}

#[test]
fn test_powers_of_ten() {
    let mut place = 1u128;
    loop {
        assert_matches_reference(place);
        assert_matches_reference(place - 1);
        if let Ok(n) = u64::try_from(place) {
            assert_matches_reference(n);
            assert_matches_reference(n + 1);
        }
        if let Ok(n) = i64::try_from(place) {
            assert_matches_reference(-n);
        }
        match place.checked_mul(10) {
            Some(next) => place = next,
            None => break,
        }
    }
}

macro_rules! test_random_round_trip {
    ($($name:ident => $t:ident),*) => {$(
        #[test]
        fn $name() {
            let mut rng = StdRng::seed_from_u64(0x5eed);
            let mut buf = Buffer::new();
            for _ in 0..100_000 {
                // Mix in small magnitudes so every width of the chain gets exercised.
                let n: $t = match rng.gen_range(0..4) {
                    0 => rng.gen::<i8>() as $t,
                    1 => rng.gen::<i16>() as $t,
                    _ => rng.gen(),
                };
                let s = buf.format(n);
                assert_eq!(s.parse::<$t>().unwrap(), n);
                assert_canonical(s, n.to_string().starts_with('-'));
                assert_eq!(s, n.to_string());
            }
        }
    )*};
}

test_random_round_trip!(
    test_random_u32 => u32,
    test_random_u64 => u64,
    test_random_u128 => u128,
    test_random_i32 => i32,
    test_random_i64 => i64,
    test_random_i128 => i128
);

#[test]
fn test_sign_exactness() {
    assert_canonical(&render(i64::MIN), true);
    assert_canonical(&render(-1i8), true);
    assert_canonical(&render(0i8), false);
    assert_canonical(&render(i128::MAX), false);
    assert_canonical(&render(u128::MAX), false);
}
