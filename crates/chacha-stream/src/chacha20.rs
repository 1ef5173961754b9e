// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 stream cipher engine.
//!
//! The engine owns the 16-word input state and advances its block counter
//! in place. Unused bytes of the last generated block are kept, so any
//! sequence of calls yields the same bytes as one call over the
//! concatenated input.

use core::ops::Range;

use chacha_stream_util::{
    fill_bytes_with_pattern, load_le_words, store_le_words, xor_in_place, xor_into,
};
use tracing::{debug, trace, warn};

use crate::consts::{BLOCK_SIZE, COUNTER_WORD, DOUBLE_ROUNDS, KEY_SIZE, SIGMA, STATE_WORDS};
use crate::error::ChaChaError;
use crate::layout::NonceLayout;

/// ChaCha20 engine bound to one (key, nonce, initial counter) triple.
///
/// # Example
///
/// ```
/// use chacha_stream::ChaCha20;
///
/// let key = [0u8; 32];
/// let nonce = [0u8; 8];
///
/// let mut ciphertext = [0u8; 7];
/// let mut cipher = ChaCha20::new(&key, &nonce, 0).unwrap();
/// cipher.encrypt(&mut ciphertext, b"testing", 7).unwrap();
///
/// let mut plaintext = [0u8; 7];
/// let mut cipher = ChaCha20::new(&key, &nonce, 0).unwrap();
/// cipher.decrypt(&mut plaintext, &ciphertext, 7).unwrap();
///
/// assert_eq!(&plaintext, b"testing");
/// ```
pub struct ChaCha20 {
    input: [u32; STATE_WORDS],
    working: [u32; STATE_WORDS],
    keystream: [u8; BLOCK_SIZE],
    // BLOCK_SIZE when the buffer is exhausted
    position: usize,
    layout: NonceLayout,
}

impl ChaCha20 {
    /// Creates an engine from raw key and nonce bytes.
    ///
    /// The nonce length selects the layout: 12 bytes for IETF, 8 bytes for
    /// the original layout with a 64-bit counter.
    ///
    /// # Errors
    ///
    /// - [`ChaChaError::InvalidKeyLength`] if `key` is not 32 bytes.
    /// - [`ChaChaError::InvalidNonceLength`] if `nonce` is not 8 or 12 bytes.
    pub fn new(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self, ChaChaError> {
        let key: &[u8; KEY_SIZE] = key
            .try_into()
            .map_err(|_| ChaChaError::InvalidKeyLength { actual: key.len() })?;
        let layout = NonceLayout::from_slice(nonce)?;

        Ok(Self::from_parts(key, layout, counter))
    }

    /// Creates an engine from an already-sized key and layout.
    pub fn from_parts(key: &[u8; KEY_SIZE], layout: NonceLayout, counter: u32) -> Self {
        let mut input = [0u32; STATE_WORDS];

        input[..4].copy_from_slice(&SIGMA);
        load_le_words(key, &mut input[4..COUNTER_WORD]);
        layout.load(&mut input[COUNTER_WORD..], counter);

        debug!(layout = layout.name(), counter, "chacha20 engine initialised");

        Self {
            input,
            working: [0; STATE_WORDS],
            keystream: [0; BLOCK_SIZE],
            position: BLOCK_SIZE,
            layout,
        }
    }

    #[inline(always)]
    fn quarter_round(&mut self, a: usize, b: usize, c: usize, d: usize) {
        self.working[a] = self.working[a].wrapping_add(self.working[b]);
        self.working[d] ^= self.working[a];
        self.working[d] = self.working[d].rotate_left(16);

        self.working[c] = self.working[c].wrapping_add(self.working[d]);
        self.working[b] ^= self.working[c];
        self.working[b] = self.working[b].rotate_left(12);

        self.working[a] = self.working[a].wrapping_add(self.working[b]);
        self.working[d] ^= self.working[a];
        self.working[d] = self.working[d].rotate_left(8);

        self.working[c] = self.working[c].wrapping_add(self.working[d]);
        self.working[b] ^= self.working[c];
        self.working[b] = self.working[b].rotate_left(7);
    }

    #[inline]
    fn do_rounds(&mut self) {
        for _ in 0..DOUBLE_ROUNDS {
            self.quarter_round(0, 4, 8, 12);
            self.quarter_round(1, 5, 9, 13);
            self.quarter_round(2, 6, 10, 14);
            self.quarter_round(3, 7, 11, 15);

            self.quarter_round(0, 5, 10, 15);
            self.quarter_round(1, 6, 11, 12);
            self.quarter_round(2, 7, 8, 13);
            self.quarter_round(3, 4, 9, 14);
        }
    }

    /// Generate the next keystream block into self.keystream and advance the counter
    fn generate_block(&mut self) {
        self.working.copy_from_slice(&self.input);

        self.do_rounds();

        for i in 0..STATE_WORDS {
            self.working[i] = self.working[i].wrapping_add(self.input[i]);
        }
        store_le_words(&self.working, &mut self.keystream);

        self.position = 0;
        self.advance_counter();
    }

    fn advance_counter(&mut self) {
        self.input[COUNTER_WORD] = self.input[COUNTER_WORD].wrapping_add(1);

        if self.input[COUNTER_WORD] != 0 {
            return;
        }

        match self.layout {
            NonceLayout::Extended { .. } => {
                self.input[COUNTER_WORD + 1] = self.input[COUNTER_WORD + 1].wrapping_add(1);
                debug!(
                    high = self.input[COUNTER_WORD + 1],
                    "chacha20 counter carried into high word"
                );
            }
            // Word 13 is nonce material here
            NonceLayout::Ietf { .. } => {
                warn!("chacha20 ietf block counter wrapped, keystream will repeat");
            }
        }
    }

    /// Feeds `len` keystream bytes to `apply`, one contiguous run at a time.
    ///
    /// `apply` receives the output range and the keystream bytes for it.
    fn process<F>(&mut self, len: usize, mut apply: F)
    where
        F: FnMut(Range<usize>, &[u8]),
    {
        let mut offset = 0;
        let mut blocks = 0usize;

        while offset < len {
            if self.position == BLOCK_SIZE {
                self.generate_block();
                blocks += 1;
            }

            let take = (len - offset).min(BLOCK_SIZE - self.position);
            apply(
                offset..offset + take,
                &self.keystream[self.position..self.position + take],
            );

            self.position += take;
            offset += take;
        }

        trace!(len, blocks, "chacha20 keystream applied");
    }

    /// Writes `src[..len] ^ keystream` into `dst[..len]`.
    ///
    /// Consecutive calls continue the same keystream.
    ///
    /// # Errors
    ///
    /// [`ChaChaError::BufferTooSmall`] if `dst` or `src` is shorter than
    /// `len`. Nothing is written and the keystream position is unchanged.
    pub fn encrypt(&mut self, dst: &mut [u8], src: &[u8], len: usize) -> Result<(), ChaChaError> {
        check_len(dst.len(), len)?;
        check_len(src.len(), len)?;

        self.process(len, |range, ks| {
            xor_into(&mut dst[range.clone()], &src[range], ks);
        });

        Ok(())
    }

    /// Same operation as [`encrypt`](Self::encrypt); XOR is its own inverse.
    ///
    /// # Errors
    ///
    /// See [`encrypt`](Self::encrypt).
    #[inline]
    pub fn decrypt(&mut self, dst: &mut [u8], src: &[u8], len: usize) -> Result<(), ChaChaError> {
        self.encrypt(dst, src, len)
    }

    /// Encrypt/decrypt data in-place.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        self.process(data.len(), |range, ks| {
            xor_in_place(&mut data[range], ks);
        });
    }

    /// Writes `len` raw keystream bytes into `dst`.
    ///
    /// # Errors
    ///
    /// [`ChaChaError::BufferTooSmall`] if `dst` is shorter than `len`.
    pub fn keystream(&mut self, dst: &mut [u8], len: usize) -> Result<(), ChaChaError> {
        check_len(dst.len(), len)?;

        fill_bytes_with_pattern(&mut dst[..len], 0);
        self.apply_keystream(&mut dst[..len]);

        Ok(())
    }

    /// Counter value of the next block to be generated.
    ///
    /// 64-bit for the extended layout; the IETF counter never exceeds `u32::MAX`.
    pub fn block_counter(&self) -> u64 {
        let low = u64::from(self.input[COUNTER_WORD]);

        match self.layout {
            NonceLayout::Ietf { .. } => low,
            NonceLayout::Extended { .. } => {
                (u64::from(self.input[COUNTER_WORD + 1]) << 32) | low
            }
        }
    }

    pub fn layout_is_ietf(&self) -> bool {
        self.layout.is_ietf()
    }

    pub fn nonce_len(&self) -> usize {
        self.layout.nonce_len()
    }

    #[cfg(test)]
    pub(crate) fn input_words(&self) -> &[u32; STATE_WORDS] {
        &self.input
    }

    #[cfg(test)]
    pub(crate) fn buffered_len(&self) -> usize {
        BLOCK_SIZE - self.position
    }

    /// Runs one quarter round over `state` using the engine's working array.
    #[cfg(test)]
    pub(crate) fn quarter_round_on(
        &mut self,
        state: [u32; STATE_WORDS],
        (a, b, c, d): (usize, usize, usize, usize),
    ) -> [u32; STATE_WORDS] {
        self.working = state;
        self.quarter_round(a, b, c, d);
        self.working
    }
}

#[inline]
fn check_len(available: usize, required: usize) -> Result<(), ChaChaError> {
    if available < required {
        return Err(ChaChaError::BufferTooSmall {
            required,
            available,
        });
    }

    Ok(())
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}
