// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # chacha-stream
//!
//! ChaCha20 stream cipher with a resumable keystream.
//!
//! An engine is created once per (key, nonce, initial counter) and then fed
//! any number of `encrypt` / `keystream` calls. Output of consecutive calls
//! is identical to a single call over the concatenated input.
//!
//! ## Nonce layouts
//!
//! - 12-byte nonce: IETF layout (RFC 8439), 32-bit block counter.
//! - 8-byte nonce: original layout, 64-bit block counter.
//!
//! ## Quick Start
//!
//! ```rust
//! use chacha_stream::ChaCha20;
//!
//! let key = [7u8; 32];
//! let nonce = [3u8; 12];
//! let mut data = *b"hello world";
//!
//! let mut cipher = ChaCha20::new(&key, &nonce, 1)?;
//! cipher.apply_keystream(&mut data);
//!
//! let mut cipher = ChaCha20::new(&key, &nonce, 1)?;
//! cipher.apply_keystream(&mut data);
//!
//! assert_eq!(&data, b"hello world");
//! # Ok::<(), chacha_stream::ChaChaError>(())
//! ```
//!
//! ChaCha20 alone provides confidentiality only. Nonce uniqueness per key and
//! message authentication are the caller's responsibility.
//!
//! ## Features
//!
//! - `std` (default): [`SharedChaCha20`] and `std` support for dependencies.
//!   Without it the crate is `no_std`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(test)]
mod tests;

mod chacha20;
mod consts;
mod error;
mod layout;
#[cfg(feature = "std")]
mod shared;

pub use chacha20::ChaCha20;
pub use consts::{BLOCK_SIZE, EXTENDED_NONCE_SIZE, IETF_NONCE_SIZE, KEY_SIZE};
pub use error::ChaChaError;
pub use layout::NonceLayout;
#[cfg(feature = "std")]
pub use shared::SharedChaCha20;
