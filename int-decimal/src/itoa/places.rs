// This file was generated by int-decimal-dev. Do not edit it by hand.

#![allow(clippy::unreadable_literal)]

pub(crate) const U8_PLACES: [u8; 2] = [100, 10];

pub(crate) const U16_PLACES: [u16; 4] = [10000, 1000, 100, 10];

pub(crate) const U32_PLACES: [u32; 9] = [
    1000000000, 100000000, 10000000, 1000000, 100000, 10000, 1000, 100, 10,
];

pub(crate) const U64_PLACES: [u64; 19] = [
    10000000000000000000,
    1000000000000000000,
    100000000000000000,
    10000000000000000,
    1000000000000000,
    100000000000000,
    10000000000000,
    1000000000000,
    100000000000,
    10000000000,
    1000000000,
    100000000,
    10000000,
    1000000,
    100000,
    10000,
    1000,
    100,
    10,
];

pub(crate) const U128_PLACES: [u128; 38] = [
    100000000000000000000000000000000000000,
    10000000000000000000000000000000000000,
    1000000000000000000000000000000000000,
    100000000000000000000000000000000000,
    10000000000000000000000000000000000,
    1000000000000000000000000000000000,
    100000000000000000000000000000000,
    10000000000000000000000000000000,
    1000000000000000000000000000000,
    100000000000000000000000000000,
    10000000000000000000000000000,
    1000000000000000000000000000,
    100000000000000000000000000,
    10000000000000000000000000,
    1000000000000000000000000,
    100000000000000000000000,
    10000000000000000000000,
    1000000000000000000000,
    100000000000000000000,
    10000000000000000000,
    1000000000000000000,
    100000000000000000,
    10000000000000000,
    1000000000000000,
    100000000000000,
    10000000000000,
    1000000000000,
    100000000000,
    10000000000,
    1000000000,
    100000000,
    10000000,
    1000000,
    100000,
    10000,
    1000,
    100,
    10,
];
