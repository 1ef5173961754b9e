// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte helpers shared by the ChaCha20 engine.
//!
//! ChaCha20 reads its key and nonce, and writes its keystream, as sequences
//! of little-endian 32-bit words. Everything here is a plain, allocation-free
//! transformation over slices, except [`hex_to_bytes`] which exists for
//! test vectors.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

#[cfg(test)]
mod tests;

/// Fills a byte slice with a repeating pattern byte.
///
/// # Example
///
/// ```
/// use chacha_stream_util::fill_bytes_with_pattern;
///
/// let mut buffer = [0xFFu8; 8];
/// fill_bytes_with_pattern(&mut buffer, 0);
/// assert!(buffer.iter().all(|&b| b == 0));
/// ```
#[inline]
pub fn fill_bytes_with_pattern(slice: &mut [u8], pattern: u8) {
    for byte in slice.iter_mut() {
        *byte = pattern;
    }
}

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F).
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use chacha_stream_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("76b8e0ad");
/// assert_eq!(bytes, vec![0x76, 0xb8, 0xe0, 0xad]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Generates `{type}_from_le` and `{type}_to_le` functions for integer types.
macro_rules! impl_le_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Decodes ", stringify!($size), " little-endian bytes into a `", stringify!($type), "`.")]
        #[inline(always)]
        pub fn $fn_from(bytes: &[u8; $size]) -> $type {
            let mut value: $type = 0;
            for (i, byte) in bytes.iter().enumerate() {
                value |= (*byte as $type) << (8 * i);
            }
            value
        }

        #[doc = concat!("Encodes a `", stringify!($type), "` as ", stringify!($size), " little-endian bytes.")]
        #[inline(always)]
        pub fn $fn_to(value: $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (value >> (8 * i)) as u8;
            }
        }
    };
}

impl_le_conversions!(u32, 4, u32_from_le, u32_to_le);

/// Decodes `dst.len()` little-endian words from `src`.
///
/// `src` must hold exactly `4 * dst.len()` bytes.
///
/// # Example
///
/// ```
/// use chacha_stream_util::load_le_words;
///
/// let mut words = [0u32; 2];
/// load_le_words(&[1, 0, 0, 0, 0, 0, 0, 0x80], &mut words);
/// assert_eq!(words, [1, 0x8000_0000]);
/// ```
#[inline]
pub fn load_le_words(src: &[u8], dst: &mut [u32]) {
    debug_assert_eq!(src.len(), dst.len() * 4);

    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = u32_from_le(&[chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Encodes `src` as little-endian bytes into `dst`.
///
/// `dst` must hold exactly `4 * src.len()` bytes.
#[inline]
pub fn store_le_words(src: &[u32], dst: &mut [u8]) {
    debug_assert_eq!(dst.len(), src.len() * 4);

    for (word, chunk) in src.iter().zip(dst.chunks_exact_mut(4)) {
        let mut bytes = [0u8; 4];
        u32_to_le(*word, &mut bytes);
        chunk.copy_from_slice(&bytes);
    }
}

/// XORs `keystream` into `data`, over the shorter of the two.
#[inline]
pub fn xor_in_place(data: &mut [u8], keystream: &[u8]) {
    for (byte, ks) in data.iter_mut().zip(keystream.iter()) {
        *byte ^= ks;
    }
}

/// Writes `src ^ keystream` into `dst`, over the shortest of the three.
#[inline]
pub fn xor_into(dst: &mut [u8], src: &[u8], keystream: &[u8]) {
    for ((out, byte), ks) in dst.iter_mut().zip(src.iter()).zip(keystream.iter()) {
        *out = byte ^ ks;
    }
}
