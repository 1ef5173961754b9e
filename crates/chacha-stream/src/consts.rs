// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sizes and constants for ChaCha20.

/// Key size in bytes
pub const KEY_SIZE: usize = 32;

/// Keystream block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Nonce size in bytes for the IETF layout (RFC 8439)
pub const IETF_NONCE_SIZE: usize = 12;

/// Nonce size in bytes for the original layout with a 64-bit counter
pub const EXTENDED_NONCE_SIZE: usize = 8;

/// Number of 32-bit words in the cipher state
pub(crate) const STATE_WORDS: usize = 16;

/// 20 rounds, applied as column + diagonal pairs
pub(crate) const DOUBLE_ROUNDS: usize = 10;

/// "expand 32-byte k" as four little-endian words
pub(crate) const SIGMA: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

/// Index of the block counter word
pub(crate) const COUNTER_WORD: usize = 12;
