//! An implementation of the [SHA-2][1] cryptographic hash algorithms.
//!
//! Two algorithms are provided: SHA-256, working on 32-bit words, and
//! SHA-384, the truncated variant of SHA-512 working on 64-bit words.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use sha2::{Sha256, Sha384, Digest};
//!
//! // create a Sha256 object
//! let mut hasher = Sha256::new();
//!
//! // write input message
//! hasher.update(b"hello world");
//!
//! // read hash digest and consume hasher
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9
//! ")[..]);
//!
//! // same for Sha384
//! let mut hasher = Sha384::new();
//! hasher.update(b"hello world");
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     fdbd8e75a67f29f701a4e040385e2e23986303ea10239211af907fcbb83578b3
//!     e417cb71ce646efd0819dd8c088de1bd
//! ")[..]);
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-2
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};
pub use hash_core::Compressor;

use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{Unsigned, U128, U32, U48, U64},
    HashMarker, Output,
};

mod consts;
mod sha256;
mod sha512;

pub use sha256::Sha256Compressor;
pub use sha512::Sha384Compressor;

#[cfg(feature = "compress")]
pub use sha256::compress256;
#[cfg(feature = "compress")]
pub use sha512::compress512;

macro_rules! impl_core {
    (
        $core:ident, $alg:ident, $name:literal, $block_size:ty, $out_size:ty, $block_len:expr,
        $doc:literal,
    ) => {
        #[doc = $doc]
        #[derive(Clone, Default)]
        pub struct $core {
            alg: $alg,
            block_len: u64,
        }

        impl HashMarker for $core {}

        impl BlockSizeUser for $core {
            type BlockSize = $block_size;
        }

        impl BufferKindUser for $core {
            type BufferKind = Eager;
        }

        impl OutputSizeUser for $core {
            type OutputSize = $out_size;
        }

        impl UpdateCore for $core {
            #[inline]
            fn update_blocks(&mut self, blocks: &[Block<Self>]) {
                self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
                // SAFETY: GenericArray<u8, N> and [u8; N] have
                // exactly the same memory layout
                #[allow(unsafe_code)]
                let blocks: &[[u8; $block_len]] =
                    unsafe { &*(blocks as *const _ as *const [[u8; $block_len]]) };
                self.alg.cycle(blocks);
            }
        }

        impl FixedOutputCore for $core {
            #[inline]
            fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
                let processed = self
                    .block_len
                    .wrapping_mul(Self::BlockSize::U64)
                    .wrapping_add(buffer.get_pos() as u64);
                self.alg.finish(buffer.get_data(), processed);
                out.copy_from_slice(&self.alg.digest());
            }
        }

        impl Reset for $core {
            #[inline]
            fn reset(&mut self) {
                *self = Default::default();
            }
        }

        impl AlgorithmName for $core {
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($name)
            }
        }

        impl fmt::Debug for $core {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($core), " { ... }"))
            }
        }
    };
}

impl_core!(
    Sha256Core, Sha256Compressor, "Sha256", U64, U32, consts::BLOCK_LEN_256,
    "Core SHA-256 hasher state.",
);
impl_core!(
    Sha384Core, Sha384Compressor, "Sha384", U128, U48, consts::BLOCK_LEN_512,
    "Core SHA-384 hasher state.",
);

/// SHA-256 hasher state.
pub type Sha256 = CoreWrapper<Sha256Core>;
/// SHA-384 hasher state.
pub type Sha384 = CoreWrapper<Sha384Core>;
