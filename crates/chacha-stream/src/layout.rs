// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Nonce layouts for words 12..16 of the ChaCha20 state.
//!
//! ```text
//!            word 12      word 13      word 14      word 15
//! Ietf       counter      nonce[0..4]  nonce[4..8]  nonce[8..12]
//! Extended   counter lo   counter hi   nonce[0..4]  nonce[4..8]
//! ```

use chacha_stream_util::load_le_words;

use crate::consts::{EXTENDED_NONCE_SIZE, IETF_NONCE_SIZE};
use crate::error::ChaChaError;

/// How the nonce and block counter share the last four state words.
///
/// Selected once, from the nonce length, when an engine is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceLayout {
    /// 96-bit nonce, 32-bit block counter (RFC 8439).
    Ietf { nonce: [u8; IETF_NONCE_SIZE] },
    /// 64-bit nonce, 64-bit block counter (original ChaCha).
    Extended { nonce: [u8; EXTENDED_NONCE_SIZE] },
}

impl NonceLayout {
    /// Picks the layout matching `nonce.len()`.
    ///
    /// # Errors
    ///
    /// [`ChaChaError::InvalidNonceLength`] unless the nonce is 8 or 12 bytes.
    pub fn from_slice(nonce: &[u8]) -> Result<Self, ChaChaError> {
        match nonce.len() {
            IETF_NONCE_SIZE => {
                let mut bytes = [0u8; IETF_NONCE_SIZE];
                bytes.copy_from_slice(nonce);
                Ok(Self::Ietf { nonce: bytes })
            }
            EXTENDED_NONCE_SIZE => {
                let mut bytes = [0u8; EXTENDED_NONCE_SIZE];
                bytes.copy_from_slice(nonce);
                Ok(Self::Extended { nonce: bytes })
            }
            actual => Err(ChaChaError::InvalidNonceLength { actual }),
        }
    }

    pub fn nonce_len(&self) -> usize {
        match self {
            Self::Ietf { .. } => IETF_NONCE_SIZE,
            Self::Extended { .. } => EXTENDED_NONCE_SIZE,
        }
    }

    pub fn is_ietf(&self) -> bool {
        matches!(self, Self::Ietf { .. })
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Ietf { .. } => "ietf",
            Self::Extended { .. } => "extended",
        }
    }

    /// Writes counter and nonce words into `tail` (state words 12..16).
    pub(crate) fn load(&self, tail: &mut [u32], counter: u32) {
        debug_assert_eq!(tail.len(), 4);

        tail[0] = counter;

        match self {
            Self::Ietf { nonce } => load_le_words(nonce, &mut tail[1..]),
            Self::Extended { nonce } => {
                // The caller's counter is 32-bit, so the high half starts at zero
                tail[1] = 0;
                load_le_words(nonce, &mut tail[2..]);
            }
        }
    }
}

impl From<[u8; IETF_NONCE_SIZE]> for NonceLayout {
    fn from(nonce: [u8; IETF_NONCE_SIZE]) -> Self {
        Self::Ietf { nonce }
    }
}

impl From<[u8; EXTENDED_NONCE_SIZE]> for NonceLayout {
    fn from(nonce: [u8; EXTENDED_NONCE_SIZE]) -> Self {
        Self::Extended { nonce }
    }
}
