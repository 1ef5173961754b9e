// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod le_conversions_tests {
    use crate::*;

    // u32 tests
    #[test]
    fn test_u32_from_le() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(u32_from_le(&bytes), 0x04030201);
    }

    #[test]
    fn test_u32_to_le() {
        let mut bytes = [0u8; 4];
        u32_to_le(0x04030201, &mut bytes);
        assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_u32_sigma_words() {
        // "expand 32-byte k"
        let sigma = b"expand 32-byte k";
        let mut words = [0u32; 4];
        load_le_words(sigma, &mut words);
        assert_eq!(words, [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574]);
    }

    #[test]
    fn test_u32_high_bit_is_not_sign_extended() {
        let bytes = [0x80, 0x80, 0x80, 0x80];
        assert_eq!(u32_from_le(&bytes), 0x80808080);
    }

    // word slices
    #[test]
    fn test_store_le_words() {
        let words = [0x04030201u32, 0xFFFFFFFF, 0];
        let mut bytes = [0xAAu8; 12];
        store_le_words(&words, &mut bytes);
        assert_eq!(
            bytes,
            [0x01, 0x02, 0x03, 0x04, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_load_then_store_words() {
        let bytes: [u8; 32] = core::array::from_fn(|i| i as u8);
        let mut words = [0u32; 8];
        load_le_words(&bytes, &mut words);

        assert_eq!(words[0], 0x03020100);
        assert_eq!(words[7], 0x1f1e1d1c);

        let mut recovered = [0u8; 32];
        store_le_words(&words, &mut recovered);
        assert_eq!(recovered, bytes);
    }

    #[test]
    fn test_empty_word_slices() {
        let mut words: [u32; 0] = [];
        load_le_words(&[], &mut words);

        let mut bytes: [u8; 0] = [];
        store_le_words(&words, &mut bytes);
    }
}
