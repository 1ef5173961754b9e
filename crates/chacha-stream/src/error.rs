// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Engine error types.

use crate::consts::{EXTENDED_NONCE_SIZE, IETF_NONCE_SIZE, KEY_SIZE};

/// Errors that can occur when constructing or driving a ChaCha20 engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChaChaError {
    #[error("invalid key length: expected {expected} bytes, got {actual}", expected = KEY_SIZE)]
    InvalidKeyLength { actual: usize },

    #[error(
        "invalid nonce length: expected {short} or {long} bytes, got {actual}",
        short = EXTENDED_NONCE_SIZE,
        long = IETF_NONCE_SIZE
    )]
    InvalidNonceLength { actual: usize },

    #[error("buffer too small: required {required} bytes, available {available}")]
    BufferTooSmall { required: usize, available: usize },

    #[cfg(feature = "std")]
    #[error("cipher lock poisoned")]
    LockPoisoned,
}
