// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mutex-guarded engine for use across threads.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::chacha20::ChaCha20;
use crate::error::ChaChaError;

/// A [`ChaCha20`] engine that can be shared between threads.
///
/// Each call holds the lock for its whole duration, so concurrent callers
/// consume disjoint, ordered ranges of the keystream.
#[derive(Debug)]
pub struct SharedChaCha20 {
    inner: Mutex<ChaCha20>,
}

impl SharedChaCha20 {
    pub fn new(cipher: ChaCha20) -> Self {
        Self {
            inner: Mutex::new(cipher),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ChaCha20>, ChaChaError> {
        self.inner.lock().map_err(|_| {
            debug!("chacha20 shared engine lock poisoned");
            ChaChaError::LockPoisoned
        })
    }

    /// See [`ChaCha20::encrypt`].
    pub fn encrypt(&self, dst: &mut [u8], src: &[u8], len: usize) -> Result<(), ChaChaError> {
        let mut guard = self.lock()?;
        guard.encrypt(dst, src, len)
    }

    /// See [`ChaCha20::decrypt`].
    pub fn decrypt(&self, dst: &mut [u8], src: &[u8], len: usize) -> Result<(), ChaChaError> {
        let mut guard = self.lock()?;
        guard.decrypt(dst, src, len)
    }

    /// See [`ChaCha20::apply_keystream`].
    pub fn apply_keystream(&self, data: &mut [u8]) -> Result<(), ChaChaError> {
        let mut guard = self.lock()?;
        guard.apply_keystream(data);
        Ok(())
    }

    /// See [`ChaCha20::keystream`].
    pub fn keystream(&self, dst: &mut [u8], len: usize) -> Result<(), ChaChaError> {
        let mut guard = self.lock()?;
        guard.keystream(dst, len)
    }

    pub fn block_counter(&self) -> Result<u64, ChaChaError> {
        Ok(self.lock()?.block_counter())
    }

    /// Returns the wrapped engine.
    pub fn into_inner(self) -> Result<ChaCha20, ChaChaError> {
        self.inner.into_inner().map_err(|_| ChaChaError::LockPoisoned)
    }

    #[cfg(test)]
    pub(crate) fn mutex(&self) -> &Mutex<ChaCha20> {
        &self.inner
    }
}

impl From<ChaCha20> for SharedChaCha20 {
    fn from(cipher: ChaCha20) -> Self {
        Self::new(cipher)
    }
}
