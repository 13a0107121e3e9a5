//! Building blocks shared by the Merkle–Damgård hash crates in this
//! repository: a self-wiping [`HashState`], the length-suffixed
//! [`Epilogue`] used to finalize a message, and the [`Compressor`] contract
//! every compression core implements.
//!
//! # Usage
//!
//! Algorithm crates implement [`Compressor`] on top of these pieces. A
//! caller can drive a compressor directly, although most users will reach
//! for the `digest`-based hashers exported by the algorithm crates instead.
//!
//! ```rust
//! use hash_core::{Epilogue, LengthField};
//!
//! let epilogue = Epilogue::<64>::new(b"abc", LengthField::Be64, 3);
//! let blocks = epilogue.blocks();
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0][3], 0x80);
//! assert_eq!(blocks[0][63], 24);
//! ```

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use zeroize;

mod epilogue;
mod error;
mod state;

pub use epilogue::{Epilogue, LengthField};
pub use error::Error;
pub use state::{ByteOrder, HashState, Word};

/// A Merkle–Damgård compression core.
///
/// An instance covers exactly one message: zero or more [`cycle`] calls
/// followed by a single [`finish`]. Once `finish` has run the instance must
/// be treated as read-only; only [`digest`] is meaningful afterwards.
///
/// The core keeps no byte counter. The caller tracks how many message bytes
/// went through `cycle` and passes the grand total to `finish`.
///
/// [`cycle`]: Compressor::cycle
/// [`finish`]: Compressor::finish
/// [`digest`]: Compressor::digest
pub trait Compressor {
    /// Block size in bytes.
    const BLOCK_SIZE: usize;
    /// Digest size in bytes.
    const DIGEST_SIZE: usize;

    /// One full message block.
    type Block;
    /// Final digest bytes.
    type Digest;

    /// Absorb whole message blocks into the chaining state.
    fn cycle(&mut self, blocks: &[Self::Block]);

    /// Pad `tail` and absorb the final one or two blocks.
    ///
    /// `processed_bytes` is the length of the entire message, `tail`
    /// included.
    ///
    /// # Panics
    ///
    /// If `tail` does not fit into the two-block epilogue together with the
    /// padding byte and length field. Callers feeding a tail shorter than
    /// one block never hit this.
    fn finish(&mut self, tail: &[u8], processed_bytes: u64);

    /// Serialize the current state into digest bytes.
    fn digest(&self) -> Self::Digest;
}
