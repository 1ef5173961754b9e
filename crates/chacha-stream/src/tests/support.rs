// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::ChaCha20;

/// Key 00 01 02 .. 1f, used across RFC 8439 section 2 vectors.
pub(crate) fn sequential_key() -> [u8; 32] {
    core::array::from_fn(|i| i as u8)
}

pub(crate) fn engine(nonce: &[u8], counter: u32) -> ChaCha20 {
    ChaCha20::new(&sequential_key(), nonce, counter).expect("Failed to create ChaCha20")
}

/// Encrypts `src` in one call on a fresh engine.
pub(crate) fn encrypt_once(nonce: &[u8], counter: u32, src: &[u8]) -> Vec<u8> {
    let mut dst = vec![0u8; src.len()];
    engine(nonce, counter)
        .encrypt(&mut dst, src, src.len())
        .expect("Failed to encrypt(..)");
    dst
}
